//! metaKnyts knowledge base: the crypto-comic saga (characters, worlds, factions, episodes).
//!
//! Lore entries reference each other heavily, so this adapter also matches query terms
//! against an item's `connections` ("who is linked to KnowOne?").

use super::{Corpus, KnowledgeBase, KnowledgeDomain, KnowledgeItem};
use crate::error::KnowledgeResult;
use std::path::Path;

const SEED: &str = include_str!("../../data/metaknyts.json");

pub struct MetaKnytsKnowledgeBase(Corpus);

impl MetaKnytsKnowledgeBase {
    pub fn new() -> KnowledgeResult<Self> {
        Corpus::from_json(KnowledgeDomain::MetaKnyts, SEED).map(Self::from_corpus)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> KnowledgeResult<Self> {
        Corpus::from_path(KnowledgeDomain::MetaKnyts, path).map(Self::from_corpus)
    }

    pub fn from_items(items: Vec<KnowledgeItem>) -> KnowledgeResult<Self> {
        Corpus::from_items(KnowledgeDomain::MetaKnyts, items).map(Self::from_corpus)
    }

    fn from_corpus(corpus: Corpus) -> Self {
        Self(corpus.match_connections(true))
    }
}

impl KnowledgeBase for MetaKnytsKnowledgeBase {
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
