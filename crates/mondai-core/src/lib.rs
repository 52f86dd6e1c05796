//! mondai-core: knowledge bases and query router behind the MonDAI agent.
//!
//! Three curated, read-only knowledge bases (iQubes, COYN, metaKnyts) sit behind a
//! rule-based [`KnowledgeRouter`] that classifies free-text queries by keyword,
//! searches the matching base(s) with fallback, and returns a deduplicated, capped,
//! source-labelled [`RouteResult`] ready to be embedded in an agent prompt.
//!
//! ```rust,ignore
//! use mondai_core::KnowledgeRouter;
//!
//! let router = KnowledgeRouter::with_defaults()?;
//! let route = router.route_query("what is an iqube");
//! assert_eq!(route.sources_used, ["iQubes"]);
//! let system_prompt = mondai_core::prompts::knowledge_system_prompt(&route);
//! ```

mod config;
mod error;
mod knowledge;
mod router;
pub mod prompts;

pub use crate::config::{MondaiConfig, DEFAULT_MAX_RESULTS};
pub use crate::error::{KnowledgeError, KnowledgeResult};

pub use knowledge::{
    Corpus, CoynKnowledgeBase, IQubesKnowledgeBase, KnowledgeBase, KnowledgeDomain, KnowledgeItem,
    MetaKnytsKnowledgeBase, MIN_TERM_LEN,
};

pub use router::{
    is_coyn_query, is_general_tech_query, is_iqubes_query, is_metaknyts_query, KnowledgeBaseStats,
    KnowledgeRouter, KnowledgeStats, QueryClassification, RouteResult, COYN_KEYWORDS,
    GENERAL_TECH_KEYWORDS, IQUBES_KEYWORDS, METAKNYTS_KEYWORDS, NO_KNOWLEDGE_BASE,
};
