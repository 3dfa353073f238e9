//! CLI command implementations

use anyhow::Context;
use flowscribe_ai::{CodeGenRequest, CodeGenerator};
use flowscribe_core::{extract_file, translate_file};
use flowscribe_server::{FlowscribeServer, ServerConfig, ServerState};
use std::path::PathBuf;
use std::sync::Arc;

pub fn translate(file: PathBuf) -> anyhow::Result<()> {
    let translation = translate_file(&file)
        .with_context(|| format!("Translation failed for {}", file.display()))?;

    for line in &translation.lines {
        println!("{}", line);
    }
    if !translation.diagnostics.is_empty() {
        tracing::info!("{} diagnostics reported", translation.diagnostics.len());
    }
    Ok(())
}

pub fn inspect(file: PathBuf) -> anyhow::Result<()> {
    let extraction = extract_file(&file)
        .with_context(|| format!("Parsing failed for {}", file.display()))?;

    print!("{}", extraction.graph.describe());
    Ok(())
}

pub async fn generate(
    file: PathBuf,
    generator: &dyn CodeGenerator,
    language: &str,
) -> anyhow::Result<()> {
    let translation = translate_file(&file)
        .with_context(|| format!("Translation failed for {}", file.display()))?;

    tracing::info!("Generating {} code with {}", language, generator.name());
    let request = CodeGenRequest::from_translation(&translation, language);
    let generated = generator.generate(&request).await?;

    println!("{}", generated.code.trim_end());
    if generated.tokens_used > 0 {
        tracing::info!("Used {} tokens", generated.tokens_used);
    }
    Ok(())
}

pub async fn serve(
    config: ServerConfig,
    generator: Option<Box<dyn CodeGenerator>>,
) -> anyhow::Result<()> {
    tracing::info!("Starting Flowscribe server on {}:{}", config.host, config.port);

    let mut state = ServerState::new(config);
    if let Some(generator) = generator {
        tracing::info!("Code generation provider: {}", generator.name());
        state = state.with_generator(Arc::from(generator));
    }

    FlowscribeServer::new(state).start().await
}
