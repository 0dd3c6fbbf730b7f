use clap::Args;
use jdk_images_matrix::AxisConfig;
use miette::IntoDiagnostic;

use super::ImagesCommand;

#[derive(Debug, Clone, Args)]
pub struct ConfigCommand;

impl ImagesCommand for ConfigCommand {
    fn try_run(&mut self) -> miette::Result<()> {
        let config = AxisConfig::builtin();
        print!("{}", serde_yaml::to_string(&config).into_diagnostic()?);

        Ok(())
    }
}
