//! Agent Transport
//!
//! The boundary to the language model under evaluation: provider
//! implementations plus extraction of structured output from raw
//! responses.

mod extract;
mod provider;

pub use extract::extract_json;
pub use provider::{LLMProvider, OllamaProvider, OpenAICompatibleProvider};
