//! Harness Configuration
//!
//! Two layers: the task spec (what the agent's output must look like),
//! loadable from YAML so the eval definition can live next to its
//! prompts, and environment-driven provider settings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::{LLMProvider, OllamaProvider, OpenAICompatibleProvider};
use crate::problem::build_problem;

/// Output schema constraints the agent is graded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputFormat {
    pub required_keys: Vec<String>,
    pub x_length: usize,
}

impl Default for TaskSpec {
    fn default() -> Self {
        let problem = build_problem();
        Self {
            output_format: OutputFormat {
                required_keys: vec!["x".to_string(), "objective_value".to_string()],
                x_length: problem.n_variables,
            },
        }
    }
}

impl TaskSpec {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from disk, falling back to the built-in default when the file
    /// is absent or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("failed to load task spec {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Which LLM transport to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAICompatible,
    Ollama,
}

/// Environment-driven harness settings, read once at startup.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub provider: ProviderKind,
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub output_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl EvalConfig {
    /// Read configuration from the environment (after dotenv).
    pub fn from_env() -> Self {
        let provider = match std::env::var("EVAL_PROVIDER").as_deref() {
            Ok("ollama") => ProviderKind::Ollama,
            _ => ProviderKind::OpenAICompatible,
        };
        Self {
            provider,
            base_url: std::env::var("EVAL_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("EVAL_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            output_dir: PathBuf::from(
                std::env::var("EVAL_OUTPUT_DIR").unwrap_or_else(|_| "outputs".to_string()),
            ),
            cache_dir: PathBuf::from(
                std::env::var("EVAL_CACHE_DIR").unwrap_or_else(|_| ".eval_cache".to_string()),
            ),
        }
    }

    /// Build the configured provider.
    pub fn build_provider(&self) -> Arc<dyn LLMProvider> {
        match self.provider {
            ProviderKind::Ollama => Arc::new(OllamaProvider::new(ollama_rs::Ollama::default())),
            ProviderKind::OpenAICompatible => Arc::new(OpenAICompatibleProvider::new(
                self.base_url.clone(),
                self.api_key.clone(),
            )),
        }
    }
}
