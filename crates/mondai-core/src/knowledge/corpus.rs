//! Validated in-memory corpus with case-insensitive keyword search.
//!
//! Items are lower-cased once at load; a search scores each item by where the query
//! (and each of its terms) appears and returns matches best-first, ties in insertion order.

use super::{KnowledgeDomain, KnowledgeItem};
use crate::error::{KnowledgeError, KnowledgeResult};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Query terms shorter than this are only matched as part of the whole query.
pub const MIN_TERM_LEN: usize = 3;

const TITLE_WEIGHT: u32 = 3;
const KEYWORD_WEIGHT: u32 = 2;
const CONTENT_WEIGHT: u32 = 1;
const CONNECTION_WEIGHT: u32 = 1;

#[derive(Debug, Clone)]
struct IndexedItem {
    item: KnowledgeItem,
    title: String,
    content: String,
    keywords: Vec<String>,
    connections: Vec<String>,
}

impl IndexedItem {
    fn new(item: KnowledgeItem) -> Self {
        let title = item.title.to_lowercase();
        let content = item.content.to_lowercase();
        let keywords = item.keywords.iter().map(|k| k.to_lowercase()).collect();
        let connections = item
            .connections
            .iter()
            .flatten()
            .map(|c| c.to_lowercase())
            .collect();
        Self {
            item,
            title,
            content,
            keywords,
            connections,
        }
    }

    fn score(&self, needles: &[&str], match_connections: bool) -> u32 {
        needles
            .iter()
            .map(|needle| {
                let mut score = 0;
                if self.title.contains(needle) {
                    score += TITLE_WEIGHT;
                }
                if self.keywords.iter().any(|k| k.contains(needle)) {
                    score += KEYWORD_WEIGHT;
                }
                if self.content.contains(needle) {
                    score += CONTENT_WEIGHT;
                }
                if match_connections && self.connections.iter().any(|c| c.contains(needle)) {
                    score += CONNECTION_WEIGHT;
                }
                score
            })
            .sum()
    }
}

/// Read-only collection of [`KnowledgeItem`]s for one domain.
#[derive(Debug, Clone)]
pub struct Corpus {
    domain: KnowledgeDomain,
    items: Vec<IndexedItem>,
    match_connections: bool,
}

impl Corpus {
    /// Validates and indexes `items`.
    ///
    /// Rejects empty ids, empty titles and ids repeated within the corpus. Items with an
    /// empty `source` are attributed to the domain label.
    pub fn from_items(domain: KnowledgeDomain, items: Vec<KnowledgeItem>) -> KnowledgeResult<Self> {
        let kb = domain.source_name();
        let mut seen = HashSet::with_capacity(items.len());
        let mut indexed = Vec::with_capacity(items.len());
        for mut item in items {
            if item.id.trim().is_empty() {
                return Err(KnowledgeError::InvalidItem {
                    kb,
                    reason: format!("item titled '{}' has an empty id", item.title),
                });
            }
            if item.title.trim().is_empty() {
                return Err(KnowledgeError::InvalidItem {
                    kb,
                    reason: format!("item '{}' has an empty title", item.id),
                });
            }
            if !seen.insert(item.id.clone()) {
                return Err(KnowledgeError::DuplicateId { kb, id: item.id });
            }
            if item.source.trim().is_empty() {
                item.source = domain.label().to_string();
            }
            indexed.push(IndexedItem::new(item));
        }
        let corpus = Self {
            domain,
            items: indexed,
            match_connections: false,
        };
        if corpus.is_empty() {
            warn!(kb, "knowledge corpus is empty; every search will miss");
        } else {
            info!(kb, items = corpus.len(), "knowledge corpus loaded");
        }
        Ok(corpus)
    }

    /// Parses a JSON array of items and validates it.
    pub fn from_json(domain: KnowledgeDomain, json: &str) -> KnowledgeResult<Self> {
        let items: Vec<KnowledgeItem> =
            serde_json::from_str(json).map_err(|source| KnowledgeError::Parse {
                kb: domain.source_name(),
                source,
            })?;
        Self::from_items(domain, items)
    }

    /// Reads a JSON corpus file from disk.
    pub fn from_path<P: AsRef<Path>>(domain: KnowledgeDomain, path: P) -> KnowledgeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(domain, &json)
    }

    /// When enabled, query terms are also matched against item `connections`.
    pub fn match_connections(mut self, enabled: bool) -> Self {
        self.match_connections = enabled;
        self
    }

    pub fn domain(&self) -> KnowledgeDomain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &KnowledgeItem> {
        self.items.iter().map(|i| &i.item)
    }

    pub fn to_vec(&self) -> Vec<KnowledgeItem> {
        self.items().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeItem> {
        self.items().find(|item| item.id == id)
    }

    /// Searches title, content and keywords case-insensitively.
    ///
    /// An item matches when the whole query, or any term of at least [`MIN_TERM_LEN`]
    /// characters, occurs in one of its fields. A blank query matches every item and
    /// returns the corpus in insertion order.
    pub fn search(&self, query: &str) -> Vec<KnowledgeItem> {
        let whole = query.trim().to_lowercase();
        if whole.is_empty() {
            return self.to_vec();
        }
        let mut needles: Vec<&str> = vec![whole.as_str()];
        for term in whole.split_whitespace() {
            if term.chars().count() >= MIN_TERM_LEN && !needles.contains(&term) {
                needles.push(term);
            }
        }

        let mut scored: Vec<(u32, &IndexedItem)> = self
            .items
            .iter()
            .filter_map(|item| {
                let score = item.score(&needles, self.match_connections);
                (score > 0).then_some((score, item))
            })
            .collect();
        // Stable: equal scores keep corpus order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, i)| i.item.clone()).collect()
    }
}
