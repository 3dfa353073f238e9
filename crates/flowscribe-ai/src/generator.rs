//! Provider-facing request/response types and the generator trait

use anyhow::Result;
use flowscribe_core::Translation;
use serde::{Deserialize, Serialize};

/// Target language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Request for code generation from a pseudocode listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeGenRequest {
    /// Linearized pseudocode, one statement per line
    pub pseudocode: Vec<String>,
    /// Target programming language
    pub language: String,
}

impl CodeGenRequest {
    pub fn new(pseudocode: Vec<String>, language: impl Into<String>) -> Self {
        Self {
            pseudocode,
            language: language.into(),
        }
    }

    pub fn from_translation(translation: &Translation, language: impl Into<String>) -> Self {
        Self::new(translation.lines.clone(), language)
    }
}

/// Result of code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Source code in the requested language
    pub code: String,
    /// Name of the provider that produced it
    pub provider: String,
    /// Tokens used for this generation (0 for offline providers)
    pub tokens_used: u32,
}

/// Text-generation backend turning pseudocode into source code
#[async_trait::async_trait]
pub trait CodeGenerator: Send + Sync {
    /// Generate source code for the request
    async fn generate(&self, request: &CodeGenRequest) -> Result<GeneratedCode>;

    /// Get provider name
    fn name(&self) -> &str;
}
