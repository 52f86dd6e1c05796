//! Router configuration loaded from TOML and environment.
//!
//! | Key / Env | Default | Description |
//! |-----------|---------|-------------|
//! | `max_results` / MONDAI_MAX_RESULTS | 5 | Cap applied after deduplication. |
//! | `iqubes_corpus` / MONDAI_IQUBES_CORPUS | embedded | JSON file replacing the iQubes seed corpus. |
//! | `coyn_corpus` / MONDAI_COYN_CORPUS | embedded | JSON file replacing the COYN seed corpus. |
//! | `metaknyts_corpus` / MONDAI_METAKNYTS_CORPUS | embedded | JSON file replacing the metaKnyts seed corpus. |

use crate::error::{KnowledgeError, KnowledgeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result cap used when nothing else is configured.
pub const DEFAULT_MAX_RESULTS: usize = 5;

const ENV_CONFIG_PATH: &str = "MONDAI_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/mondai";

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MondaiConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub iqubes_corpus: Option<PathBuf>,
    #[serde(default)]
    pub coyn_corpus: Option<PathBuf>,
    #[serde(default)]
    pub metaknyts_corpus: Option<PathBuf>,
}

impl Default for MondaiConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            iqubes_corpus: None,
            coyn_corpus: None,
            metaknyts_corpus: None,
        }
    }
}

impl MondaiConfig {
    /// Load config from file and environment. Precedence: env `MONDAI_CONFIG` path >
    /// `config/mondai` (optional) > defaults, then `MONDAI_*` environment overrides.
    pub fn load() -> KnowledgeResult<Self> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), but an explicit `path` wins over `MONDAI_CONFIG`.
    /// An explicitly named file must exist.
    pub fn load_from(path: Option<&Path>) -> KnowledgeResult<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var(ENV_CONFIG_PATH) {
                Ok(p) => (PathBuf::from(p), true),
                Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
            },
        };

        let file = if config_path.exists() {
            config::File::from(config_path.as_path())
        } else {
            config::File::with_name(&config_path.to_string_lossy()).required(required)
        };

        let built = config::Config::builder()
            .set_default("max_results", DEFAULT_MAX_RESULTS as i64)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("MONDAI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = built.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> KnowledgeResult<()> {
        if self.max_results == 0 {
            return Err(KnowledgeError::Config(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
