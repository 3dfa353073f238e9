//! Flowscribe CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "flowscribe")]
#[command(about = "Translate draw.io flowcharts into pseudocode and code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pseudocode for a diagram
    Translate {
        /// Path to the .drawio XML file
        file: PathBuf,
    },
    /// Print the parsed graph structure of a diagram
    Inspect {
        /// Path to the .drawio XML file
        file: PathBuf,
    },
    /// Generate source code for a diagram
    Generate {
        /// Path to the .drawio XML file
        file: PathBuf,

        #[command(flatten)]
        provider: ProviderArgs,

        /// Target language
        #[arg(short, long, default_value = flowscribe_ai::DEFAULT_LANGUAGE)]
        language: String,
    },
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Browser origin allowed by CORS
        #[arg(long, default_value = flowscribe_server::DEFAULT_ALLOW_ORIGIN)]
        allow_origin: String,

        /// Only return pseudocode, never call a provider
        #[arg(long)]
        no_codegen: bool,

        #[command(flatten)]
        provider: ProviderArgs,
    },
    /// Show version
    Version,
}

#[derive(clap::Args)]
struct ProviderArgs {
    /// Code generation provider (local, openai)
    #[arg(long, default_value = "local")]
    provider: String,

    /// Model name for remote providers
    #[arg(long)]
    model: Option<String>,

    /// API key (falls back to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "flowscribe={0},flowscribe_core={0},flowscribe_ai={0},flowscribe_server={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Flowscribe v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Translate { file } => commands::translate(file),
        Commands::Inspect { file } => commands::inspect(file),
        Commands::Generate {
            file,
            provider,
            language,
        } => {
            let generator = flowscribe_ai::create_generator(
                &provider.provider,
                provider.api_key,
                provider.model,
            )?;
            commands::generate(file, generator.as_ref(), &language).await
        }
        Commands::Serve {
            port,
            host,
            allow_origin,
            no_codegen,
            provider,
        } => {
            let generator = if no_codegen {
                None
            } else {
                Some(flowscribe_ai::create_generator(
                    &provider.provider,
                    provider.api_key,
                    provider.model,
                )?)
            };
            let config = flowscribe_server::ServerConfig {
                host,
                port,
                allow_origin,
            };
            commands::serve(config, generator).await
        }
        Commands::Version => {
            println!("Flowscribe v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
