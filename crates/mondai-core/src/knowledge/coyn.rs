use super::{Corpus, KnowledgeBase, KnowledgeDomain, KnowledgeItem};
use crate::error::KnowledgeResult;
use std::path::Path;

const SEED: &str = include_str!("../../data/coyn.json");

/// COYN knowledge base: currency, token family, treasury and tokenomics.
pub struct CoynKnowledgeBase(Corpus);

impl CoynKnowledgeBase {
    pub fn new() -> KnowledgeResult<Self> {
        Corpus::from_json(KnowledgeDomain::Coyn, SEED).map(Self)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> KnowledgeResult<Self> {
        Corpus::from_path(KnowledgeDomain::Coyn, path).map(Self)
    }

    pub fn from_items(items: Vec<KnowledgeItem>) -> KnowledgeResult<Self> {
        Corpus::from_items(KnowledgeDomain::Coyn, items).map(Self)
    }
}

impl KnowledgeBase for CoynKnowledgeBase {
    fn domain(&self) -> KnowledgeDomain {
        self.0.domain()
    }
    fn get_all_knowledge(&self) -> Vec<KnowledgeItem> {
        self.0.to_vec()
    }
    fn search_knowledge(&self, query: &str) -> KnowledgeResult<Vec<KnowledgeItem>> {
        Ok(self.0.search(query))
    }
    fn total_items(&self) -> usize {
        self.0.len()
    }
    fn get_by_id(&self, id: &str) -> Option<KnowledgeItem> {
        self.0.get(id).cloned()
    }
}
