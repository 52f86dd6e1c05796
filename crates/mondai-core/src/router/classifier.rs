//! Keyword classifier deciding which knowledge base a query belongs to.
//!
//! Matching is intentionally loose and symmetric: a query matches a domain when the
//! lowered query contains one of the domain keywords, or when any query term is a
//! substring of one of them ("iqube" matches "iqubes", but so does "a" match "aigent").
//! The router's fallback rules are tuned around this looseness; keep it.

use serde::{Deserialize, Serialize};

pub const IQUBES_KEYWORDS: &[&str] = &[
    "iqube",
    "iqubes",
    "metaqube",
    "blakqube",
    "tokenqube",
    "dataqube",
    "contentqube",
    "toolqube",
    "modelqube",
    "agentqube",
    "aigent",
    "proof of risk",
    "risk score",
    "minimal disclosure",
    "qubetalk",
    "data sovereignty",
];

pub const COYN_KEYWORDS: &[&str] = &[
    "coyn",
    "knyt coyn",
    "qoyn",
    "q¢",
    "tokenomics",
    "stablecoin",
    "satoshi",
    "bitcoin",
    "treasury",
    "staking",
    "liquidity",
    "minting",
    "redemption",
    "exchange rate",
];

pub const METAKNYTS_KEYWORDS: &[&str] = &[
    "metaknyts",
    "metaknyt",
    "knowone",
    "kn0w1",
    "comic",
    "saga",
    "episode",
    "character",
    "lore",
    "digiterra",
    "terra",
    "storyline",
];

/// Generic technology vocabulary; only consulted by the iQubes branch to allow a COYN fallback.
pub const GENERAL_TECH_KEYWORDS: &[&str] = &[
    "blockchain",
    "crypto",
    "web3",
    "smart contract",
    "defi",
    "protocol",
    "token",
    "wallet",
    "decentralized",
    "ledger",
    "encryption",
    "technology",
    "technical",
    "architecture",
];

fn contains_any_keyword(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

fn matches_keyword_set(lowered: &str, keywords: &[&str]) -> bool {
    contains_any_keyword(lowered, keywords)
        || lowered
            .split_whitespace()
            .any(|term| keywords.iter().any(|k| k.contains(term)))
}

pub fn is_iqubes_query(query: &str) -> bool {
    matches_keyword_set(&query.to_lowercase(), IQUBES_KEYWORDS)
}

pub fn is_coyn_query(query: &str) -> bool {
    matches_keyword_set(&query.to_lowercase(), COYN_KEYWORDS)
}

pub fn is_metaknyts_query(query: &str) -> bool {
    matches_keyword_set(&query.to_lowercase(), METAKNYTS_KEYWORDS)
}

/// One-directional: the query must contain a tech keyword.
pub fn is_general_tech_query(query: &str) -> bool {
    contains_any_keyword(&query.to_lowercase(), GENERAL_TECH_KEYWORDS)
}

/// Outcome of every detector for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryClassification {
    pub iqubes: bool,
    pub coyn: bool,
    pub metaknyts: bool,
    pub general_tech: bool,
}

impl QueryClassification {
    pub fn classify(query: &str) -> Self {
        let lowered = query.to_lowercase();
        Self {
            iqubes: matches_keyword_set(&lowered, IQUBES_KEYWORDS),
            coyn: matches_keyword_set(&lowered, COYN_KEYWORDS),
            metaknyts: matches_keyword_set(&lowered, METAKNYTS_KEYWORDS),
            general_tech: contains_any_keyword(&lowered, GENERAL_TECH_KEYWORDS),
        }
    }

    /// True when no domain detector fired.
    pub fn is_unclassified(&self) -> bool {
        !(self.iqubes || self.coyn || self.metaknyts)
    }
}
