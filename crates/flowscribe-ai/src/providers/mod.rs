//! Code generation provider implementations

pub mod local;
pub mod openai;

use super::generator::CodeGenerator;
use anyhow::Result;

/// Factory function to create code generators
pub fn create_generator(
    provider_name: &str,
    api_key: Option<String>,
    model: Option<String>,
) -> Result<Box<dyn CodeGenerator>> {
    match provider_name {
        "openai" => Ok(Box::new(openai::OpenAIProvider::new(api_key, model))),
        "local" => Ok(Box::new(local::LocalProvider::new())),
        _ => anyhow::bail!("Unknown code generation provider: {}", provider_name),
    }
}
