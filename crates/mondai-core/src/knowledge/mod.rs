//! Curated knowledge bases consulted by the MonDAI agent.
//!
//! ## Knowledge Base Architecture
//!
//! | Domain    | Adapter                     | Purpose                                         |
//! |-----------|-----------------------------|-------------------------------------------------|
//! | iQubes    | [`IQubesKnowledgeBase`]     | Protocol: MetaQube/BlakQube/TokenQube, risk     |
//! | COYN      | [`CoynKnowledgeBase`]       | Currency: tokens, treasury, tokenomics          |
//! | metaKnyts | [`MetaKnytsKnowledgeBase`]  | Story: characters, worlds, episodes             |
//!
//! Each adapter wraps a validated, read-only [`Corpus`] loaded once at construction.

mod corpus;
mod coyn;
mod iqubes;
mod metaknyts;

pub use corpus::{Corpus, MIN_TERM_LEN};
pub use coyn::CoynKnowledgeBase;
pub use iqubes::IQubesKnowledgeBase;
pub use metaknyts::MetaKnytsKnowledgeBase;

use crate::error::KnowledgeResult;
use serde::{Deserialize, Serialize};

/// A single curated document inside one knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    /// Unique within its knowledge base, not globally.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-form tag used by the UI for icon/color mapping.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub section: String,
    /// Citation source. Filled with the knowledge base label at load time when empty.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Related item ids (cross references, not enforced).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<String>>,
}

impl KnowledgeItem {
    /// Composite key used for cross-knowledge-base deduplication.
    pub fn dedup_key(&self) -> (&str, &str) {
        (self.id.as_str(), self.source.as_str())
    }
}

/// The three knowledge domains known to the router, in routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnowledgeDomain {
    IQubes,
    Coyn,
    MetaKnyts,
}

impl KnowledgeDomain {
    /// All domains in priority order (iQubes → COYN → metaKnyts).
    pub const ALL: [KnowledgeDomain; 3] = [
        KnowledgeDomain::IQubes,
        KnowledgeDomain::Coyn,
        KnowledgeDomain::MetaKnyts,
    ];

    /// Short name reported in `sources_used` and stats.
    pub fn source_name(self) -> &'static str {
        match self {
            KnowledgeDomain::IQubes => "iQubes",
            KnowledgeDomain::Coyn => "COYN",
            KnowledgeDomain::MetaKnyts => "metaKnyts",
        }
    }

    /// Label used for `primary_source`.
    pub fn label(self) -> &'static str {
        match self {
            KnowledgeDomain::IQubes => "iQubes Knowledge Base",
            KnowledgeDomain::Coyn => "COYN Knowledge Base",
            KnowledgeDomain::MetaKnyts => "metaKnyts Knowledge Base",
        }
    }

    /// Parses a domain name case-insensitively ("iqubes", "COYN", "metaknyts").
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        KnowledgeDomain::ALL
            .into_iter()
            .find(|d| d.source_name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for KnowledgeDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source_name())
    }
}

/// Capability contract implemented by every knowledge base adapter.
///
/// Adapters are synchronous and side-effect free. `search_knowledge` returns a
/// `Result` so that a failing adapter can be isolated by the router instead of
/// aborting the whole query.
pub trait KnowledgeBase: Send + Sync {
    /// Domain this adapter serves.
    fn domain(&self) -> KnowledgeDomain;

    /// Human-readable name for this knowledge base.
    fn name(&self) -> &str {
        self.domain().source_name()
    }

    /// Full corpus in insertion order.
    fn get_all_knowledge(&self) -> Vec<KnowledgeItem>;

    /// Case-insensitive keyword search; deterministic for the same corpus and query.
    fn search_knowledge(&self, query: &str) -> KnowledgeResult<Vec<KnowledgeItem>>;

    /// Number of items in the corpus.
    fn total_items(&self) -> usize {
        self.get_all_knowledge().len()
    }

    /// Looks up one item by its id.
    fn get_by_id(&self, id: &str) -> Option<KnowledgeItem> {
        self.get_all_knowledge().into_iter().find(|item| item.id == id)
    }
}
