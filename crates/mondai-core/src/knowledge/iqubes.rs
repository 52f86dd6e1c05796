//! iQubes knowledge base: protocol documentation for MetaQubes, BlakQubes, TokenQubes and risk scoring.

use super::{Corpus, KnowledgeBase, KnowledgeDomain, KnowledgeItem};
use crate::error::KnowledgeResult;
use std::path::Path;

const SEED: &str = include_str!("../../data/iqubes.json");

pub struct IQubesKnowledgeBase(Corpus);

impl IQubesKnowledgeBase {
    /// Loads the embedded iQubes corpus.
    pub fn new() -> KnowledgeResult<Self> {
        Corpus::from_json(KnowledgeDomain::IQubes, SEED).map(Self)
    }

    /// Loads a replacement corpus from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> KnowledgeResult<Self> {
        Corpus::from_path(KnowledgeDomain::IQubes, path).map(Self)
    }

    pub fn from_items(items: Vec<KnowledgeItem>) -> KnowledgeResult<Self> {
        Corpus::from_items(KnowledgeDomain::IQubes, items).map(Self)
    }
}

impl KnowledgeBase for IQubesKnowledgeBase {
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
