use std::{fs, path::PathBuf};

use clap::{Args, ValueEnum};
use jdk_images_matrix::{AxisConfig, matrix, order};
use log::info;
use miette::{Context, IntoDiagnostic};

use super::ImagesCommand;

#[derive(Debug, Copy, Clone, Default, ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct ManifestCommand {
    /// Output format of the manifest
    #[arg(short, long, default_value = "yaml")]
    format: Format,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl ImagesCommand for ManifestCommand {
    fn try_run(&mut self) -> miette::Result<()> {
        let config = AxisConfig::builtin();
        let variants = order::sort_variants(&matrix::valid_variants(&config)?)?;

        let manifest = match self.format {
            Format::Yaml => serde_yaml::to_string(&variants).into_diagnostic()?,
            Format::Json => serde_json::to_string_pretty(&variants).into_diagnostic()?,
        };

        match self.out.as_ref() {
            Some(path) => {
                fs::write(path, manifest)
                    .into_diagnostic()
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote manifest of {} variants to {}", variants.len(), path.display());
            }
            None => print!("{manifest}"),
        }

        Ok(())
    }
}
