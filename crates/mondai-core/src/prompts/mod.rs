//! Prompt templates that embed routed knowledge into the agent's system prompt.

pub mod knowledge_context;

pub use knowledge_context::{
    citations, knowledge_context_block, knowledge_system_prompt, Citation,
    KNOWLEDGE_SYSTEM_PROMPT, MAX_EXCERPT_CHARS,
};
