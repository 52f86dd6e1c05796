//! Knowledge Router: picks the authoritative knowledge base(s) for a query.
//!
//! Routing order:
//! 1. iQubes query → iQubes; on zero hits, COYN if the query also looks like COYN or general tech.
//! 2. COYN query → COYN; on zero hits, iQubes.
//! 3. metaKnyts query → metaKnyts only.
//! 4. Anything else → all three, concatenated iQubes → COYN → metaKnyts.
//!
//! Results are then deduplicated by `(id, source)` and capped. Adapter failures are
//! logged and treated as empty; [`KnowledgeRouter::route_query`] never fails.

mod classifier;

pub use classifier::{
    is_coyn_query, is_general_tech_query, is_iqubes_query, is_metaknyts_query,
    QueryClassification, COYN_KEYWORDS, GENERAL_TECH_KEYWORDS, IQUBES_KEYWORDS,
    METAKNYTS_KEYWORDS,
};

use crate::config::{MondaiConfig, DEFAULT_MAX_RESULTS};
use crate::error::KnowledgeResult;
use crate::knowledge::{
    CoynKnowledgeBase, IQubesKnowledgeBase, KnowledgeBase, KnowledgeDomain, KnowledgeItem,
    MetaKnytsKnowledgeBase,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Primary source reported when no knowledge base contributed a result.
pub const NO_KNOWLEDGE_BASE: &str = "No Knowledge Base";

/// Routed, deduplicated and capped result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub results: Vec<KnowledgeItem>,
    pub primary_source: String,
    /// Knowledge bases that were searched and returned at least one item, in search order.
    pub sources_used: Vec<String>,
    /// Equals `results.len()` (post-cap).
    pub total_found: usize,
    pub classification: QueryClassification,
}

/// Per-knowledge-base size, for dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseStats {
    pub name: String,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeStats {
    pub knowledge_bases: Vec<KnowledgeBaseStats>,
    pub total_items: usize,
}

/// Collects hits while a route is being evaluated.
#[derive(Default)]
struct RouteAccumulator {
    results: Vec<KnowledgeItem>,
    sources_used: Vec<String>,
    primary_source: Option<String>,
}

impl RouteAccumulator {
    /// Appends `hits` from `domain`; the first contributing domain becomes primary.
    /// Returns the number of hits absorbed.
    fn absorb(&mut self, domain: KnowledgeDomain, hits: Vec<KnowledgeItem>) -> usize {
        let n = hits.len();
        if n > 0 {
            self.sources_used.push(domain.source_name().to_string());
            if self.primary_source.is_none() {
                self.primary_source = Some(domain.label().to_string());
            }
            self.results.extend(hits);
        }
        n
    }

    fn finish(self, max_results: usize, classification: QueryClassification) -> RouteResult {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut results: Vec<KnowledgeItem> = self
            .results
            .into_iter()
            .filter(|item| seen.insert((item.id.clone(), item.source.clone())))
            .collect();
        results.truncate(max_results);
        RouteResult {
            total_found: results.len(),
            results,
            primary_source: self
                .primary_source
                .unwrap_or_else(|| NO_KNOWLEDGE_BASE.to_string()),
            sources_used: self.sources_used,
            classification,
        }
    }
}

/// Dispatches queries to the iQubes, COYN and metaKnyts knowledge bases.
pub struct KnowledgeRouter {
    iqubes: Arc<dyn KnowledgeBase>,
    coyn: Arc<dyn KnowledgeBase>,
    metaknyts: Arc<dyn KnowledgeBase>,
    max_results: usize,
}

impl KnowledgeRouter {
    /// Creates a router over the given adapters, capping results at [`DEFAULT_MAX_RESULTS`].
    pub fn new(
        iqubes: Arc<dyn KnowledgeBase>,
        coyn: Arc<dyn KnowledgeBase>,
        metaknyts: Arc<dyn KnowledgeBase>,
    ) -> Self {
        Self {
            iqubes,
            coyn,
            metaknyts,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Router over the embedded seed corpora.
    pub fn with_defaults() -> KnowledgeResult<Self> {
        Ok(Self::new(
            Arc::new(IQubesKnowledgeBase::new()?),
            Arc::new(CoynKnowledgeBase::new()?),
            Arc::new(MetaKnytsKnowledgeBase::new()?),
        ))
    }

    /// Router honoring corpus overrides and the result cap from `config`.
    pub fn from_config(config: &MondaiConfig) -> KnowledgeResult<Self> {
        config.validate()?;
        let iqubes: Arc<dyn KnowledgeBase> = match &config.iqubes_corpus {
            Some(path) => Arc::new(IQubesKnowledgeBase::from_path(path)?),
            None => Arc::new(IQubesKnowledgeBase::new()?),
        };
        let coyn: Arc<dyn KnowledgeBase> = match &config.coyn_corpus {
            Some(path) => Arc::new(CoynKnowledgeBase::from_path(path)?),
            None => Arc::new(CoynKnowledgeBase::new()?),
        };
        let metaknyts: Arc<dyn KnowledgeBase> = match &config.metaknyts_corpus {
            Some(path) => Arc::new(MetaKnytsKnowledgeBase::from_path(path)?),
            None => Arc::new(MetaKnytsKnowledgeBase::new()?),
        };
        info!(max_results = config.max_results, "knowledge router configured");
        Ok(Self::new(iqubes, coyn, metaknyts).with_max_results(config.max_results))
    }

    /// Overrides the result cap (minimum 1).
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Adapter serving `domain`.
    pub fn knowledge_base(&self, domain: KnowledgeDomain) -> &Arc<dyn KnowledgeBase> {
        match domain {
            KnowledgeDomain::IQubes => &self.iqubes,
            KnowledgeDomain::Coyn => &self.coyn,
            KnowledgeDomain::MetaKnyts => &self.metaknyts,
        }
    }

    /// Searches one knowledge base, swallowing adapter errors.
    fn search(&self, domain: KnowledgeDomain, query: &str) -> Vec<KnowledgeItem> {
        match self.knowledge_base(domain).search_knowledge(query) {
            Ok(hits) => {
                debug!(kb = domain.source_name(), hits = hits.len(), "knowledge search");
                hits
            }
            Err(e) => {
                warn!(kb = domain.source_name(), error = %e, "knowledge search failed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Routes `query` to the matching knowledge base(s). Never fails.
    pub fn route_query(&self, query: &str) -> RouteResult {
        let classification = QueryClassification::classify(query);
        debug!(?classification, "query classified");

        let mut acc = RouteAccumulator::default();
        if classification.iqubes {
            let hits = self.search(KnowledgeDomain::IQubes, query);
            if acc.absorb(KnowledgeDomain::IQubes, hits) == 0
                && (classification.coyn || classification.general_tech)
            {
                let fallback = self.search(KnowledgeDomain::Coyn, query);
                acc.absorb(KnowledgeDomain::Coyn, fallback);
            }
        } else if classification.coyn {
            let hits = self.search(KnowledgeDomain::Coyn, query);
            if acc.absorb(KnowledgeDomain::Coyn, hits) == 0 {
                let fallback = self.search(KnowledgeDomain::IQubes, query);
                acc.absorb(KnowledgeDomain::IQubes, fallback);
            }
        } else if classification.metaknyts {
            let hits = self.search(KnowledgeDomain::MetaKnyts, query);
            acc.absorb(KnowledgeDomain::MetaKnyts, hits);
        } else {
            for domain in KnowledgeDomain::ALL {
                let hits = self.search(domain, query);
                acc.absorb(domain, hits);
            }
            if acc.sources_used.len() > 1 {
                acc.primary_source = Some(combined_label(&acc.sources_used));
            }
        }

        let result = acc.finish(self.max_results, classification);
        info!(
            primary = %result.primary_source,
            sources = ?result.sources_used,
            total = result.total_found,
            "query routed"
        );
        result
    }

    /// Item counts per knowledge base, in priority order.
    pub fn get_knowledge_stats(&self) -> KnowledgeStats {
        let knowledge_bases: Vec<KnowledgeBaseStats> = KnowledgeDomain::ALL
            .into_iter()
            .map(|domain| KnowledgeBaseStats {
                name: domain.label().to_string(),
                total_items: self.knowledge_base(domain).total_items(),
            })
            .collect();
        let total_items = knowledge_bases.iter().map(|kb| kb.total_items).sum();
        KnowledgeStats {
            knowledge_bases,
            total_items,
        }
    }
}

fn combined_label(sources: &[String]) -> String {
    format!("Multiple Knowledge Bases ({})", sources.join(", "))
}
