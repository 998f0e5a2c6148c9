//! CLI for the shelver ebook organizer.

mod summary;

use anyhow::Result;
use clap::Parser;
use shelver_core::config::{self, ShelverConfig};
use shelver_core::{logging, organize, FormatRegistry};
use std::path::PathBuf;

/// Files ebooks into `<DESTINATION>/<author>/<title>.<ext>` using their embedded metadata.
#[derive(Debug, Parser)]
#[command(name = "shelver")]
#[command(about = "shelver: organize ebooks by author and title", long_about = None)]
pub struct Cli {
    /// Directory to search for ebooks.
    pub source: PathBuf,

    /// Root of the organized library; the run log is written here too.
    pub destination: PathBuf,

    /// Config file to use instead of ~/.config/shelver/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let (cfg, created) = self.load_config()?;
        let log_path = logging::init_logging(&self.destination, &cfg.log_file_name)?;
        if let Some(path) = created {
            tracing::info!("created default config at {}", path.display());
        }
        tracing::debug!("loaded config: {:?}", cfg);

        tracing::info!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            log = %log_path.display(),
            "organize started"
        );

        let registry = FormatRegistry::default();
        for ext in unsupported_extensions(&registry, &cfg.extensions) {
            tracing::warn!(
                extension = %ext,
                "no parser for configured extension, files will be skipped"
            );
        }
        let report = organize(&self.source, &self.destination, &registry, &cfg.extensions)?;
        summary::print_summary(&report);
        Ok(())
    }

    /// The config to use, and its path if a default file was just created.
    fn load_config(&self) -> Result<(ShelverConfig, Option<PathBuf>)> {
        match &self.config {
            Some(path) => Ok((config::load_from_path(path)?, None)),
            None => config::load_or_init(),
        }
    }
}

/// Configured extensions that no registered parser reads.
fn unsupported_extensions<'a>(registry: &FormatRegistry, extensions: &'a [String]) -> Vec<&'a str> {
    extensions
        .iter()
        .map(String::as_str)
        .filter(|ext| !registry.supports(ext))
        .collect()
}

#[cfg(test)]
mod tests;
