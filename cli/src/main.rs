//! Sentvec entry point
//!
//! Loads the embedding model once, encodes every configured text and writes
//! the records to a JSON file. With no flags it encodes the three built-in
//! Portuguese sentences into `data.json`.

use anyhow::Context;
use clap::Parser;
use sentvec::{generate, GeneratorConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sentvec")]
#[command(about = "Encode texts with a sentence-embedding model and write JSON records")]
#[command(version)]
struct Args {
    /// Embedding model name
    #[arg(long, short)]
    model: Option<String>,

    /// Output JSON file (replaced if it exists)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Keep raw model vectors instead of L2-normalizing them
    #[arg(long)]
    no_normalize: bool,

    /// Directory for downloaded model files
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Text to encode (repeatable; replaces the built-in texts)
    #[arg(long = "text", short = 't')]
    texts: Vec<String>,

    /// File with one text per line (replaces the built-in texts)
    #[arg(long, short, conflicts_with = "texts")]
    input: Option<PathBuf>,

    /// Use an OpenAI-compatible embeddings API at this base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// Overlay command-line values on top of `config`
    fn apply(self, mut config: GeneratorConfig) -> anyhow::Result<GeneratorConfig> {
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.no_normalize {
            config.normalize = false;
        }
        if let Some(dir) = self.cache_dir {
            config.cache_dir = Some(dir);
        }
        if let Some(input) = self.input {
            config
                .load_texts(&input)
                .with_context(|| format!("loading texts from {}", input.display()))?;
        } else if !self.texts.is_empty() {
            config.texts = self.texts;
        }
        if let Some(url) = self.api_url {
            config.use_remote(url, std::env::var(sentvec::config::ENV_API_KEY).ok());
        } else if let sentvec::Backend::Remote(remote) = &mut config.backend {
            remote.model = config.model.clone();
        }
        Ok(config)
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = args.apply(GeneratorConfig::from_env()?)?;

    tracing::info!(
        "Generating {} embeddings with {} -> {}",
        config.texts.len(),
        config.model,
        config.output.display()
    );

    let summary = generate(config)?;
    println!(
        "wrote {} records ({} dims) to {}",
        summary.records,
        summary.dimension,
        summary.output.display()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let log_filter = if args.verbose {
        "sentvec=debug,sentvec_cli=debug"
    } else {
        "sentvec=info,sentvec_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(args) {
        tracing::error!("Failed to generate embeddings: {:#}", e);
        std::process::exit(1);
    }
}
