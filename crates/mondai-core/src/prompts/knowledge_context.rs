//! Knowledge context block for the MonDAI agent.
//!
//! Renders a [`RouteResult`] as a numbered list of curated excerpts the model must
//! ground its answer in, plus citation metadata for the chat UI.

use crate::router::RouteResult;
use serde::{Deserialize, Serialize};

/// Excerpts longer than this are cut on a char boundary and suffixed with "…".
pub const MAX_EXCERPT_CHARS: usize = 600;

/// System instruction wrapping the knowledge block. `{knowledge_context}` is replaced.
pub const KNOWLEDGE_SYSTEM_PROMPT: &str = r#"You are MonDAI, a guide to the iQube protocol, the COYN currency and the metaKnyts saga.

Answer using the curated knowledge below whenever it is relevant.

Rules:
- Prefer the curated knowledge over general knowledge when they disagree
- Cite entries by their number, e.g. [1]
- If the curated knowledge does not cover the question, say so before answering from general knowledge
- Never invent token prices, balances or release dates

{knowledge_context}"#;

/// Citation shown next to an agent answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    pub title: String,
    pub source: String,
    pub section: String,
}

fn excerpt(content: &str) -> String {
    let trimmed = content.trim();
    match trimmed.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", trimmed[..cut].trim_end()),
        None => trimmed.to_string(),
    }
}

/// Render the routed items as a context block.
pub fn knowledge_context_block(route: &RouteResult) -> String {
    if route.results.is_empty() {
        return "## Curated knowledge\nNo curated knowledge matched this question.".to_string();
    }
    let mut out = format!(
        "## Curated knowledge\nPrimary source: {}\nSources used: {}\n",
        route.primary_source,
        route.sources_used.join(", ")
    );
    for (n, item) in route.results.iter().enumerate() {
        let source = if item.section.is_empty() {
            item.source.clone()
        } else {
            format!("{} / {}", item.source, item.section)
        };
        out.push_str(&format!(
            "\n[{}] {}\nSource: {}\n{}\n",
            n + 1,
            item.title,
            source,
            excerpt(&item.content)
        ));
    }
    out.trim_end().to_string()
}

/// Full system prompt for `route`.
pub fn knowledge_system_prompt(route: &RouteResult) -> String {
    KNOWLEDGE_SYSTEM_PROMPT.replace("{knowledge_context}", &knowledge_context_block(route))
}

pub fn citations(route: &RouteResult) -> Vec<Citation> {
    route
        .results
        .iter()
        .map(|item| Citation {
            id: item.id.clone(),
            title: item.title.clone(),
            source: item.source.clone(),
            section: item.section.clone(),
        })
        .collect()
}
