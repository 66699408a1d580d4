//! Encode-then-write run

use crate::builder::RecordBuilder;
use crate::config::{Backend, GeneratorConfig};
use crate::embedding::{Encoder, FastEmbedEncoder, RemoteEncoder};
use crate::error::Result;
use crate::serializer::write_records;
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub dimension: usize,
    pub output: PathBuf,
}

/// Builds every record, then writes them in one go
///
/// Nothing is written unless all texts encode successfully.
pub struct Pipeline<E> {
    builder: RecordBuilder<E>,
    config: GeneratorConfig,
}

impl<E: Encoder> Pipeline<E> {
    pub fn new(encoder: E, config: GeneratorConfig) -> Self {
        Self {
            builder: RecordBuilder::new(encoder, config.normalize),
            config,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let records = self.builder.build(&self.config.texts)?;
        write_records(&self.config.output, &records)?;

        let dimension = records
            .first()
            .map(|r| r.dimension())
            .unwrap_or_else(|| self.builder.encoder().dimension());

        Ok(RunSummary {
            records: records.len(),
            dimension,
            output: self.config.output.clone(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Construct the encoder selected by `config.backend`
pub fn load_encoder(config: &GeneratorConfig) -> Result<Box<dyn Encoder>> {
    match &config.backend {
        Backend::Local => Ok(Box::new(FastEmbedEncoder::from_name(
            &config.model,
            config.cache_dir.as_deref(),
        )?)),
        Backend::Remote(remote) => Ok(Box::new(RemoteEncoder::new(remote.clone())?)),
    }
}

/// Load the configured encoder and run the pipeline
pub fn generate(config: GeneratorConfig) -> Result<RunSummary> {
    let encoder = load_encoder(&config)?;
    log::info!(
        "Encoder {} ready ({}d)",
        encoder.model_name(),
        encoder.dimension()
    );
    Pipeline::new(encoder, config).run()
}
