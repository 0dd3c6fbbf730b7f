use clap::Args;
use jdk_images_matrix::{AxisConfig, matrix, order};
use log::debug;

use super::ImagesCommand;

#[derive(Debug, Clone, Args)]
pub struct TagsCommand {
    /// Print the base image tag alongside each docker tag
    #[arg(short, long)]
    base_images: bool,
}

impl ImagesCommand for TagsCommand {
    fn try_run(&mut self) -> miette::Result<()> {
        let config = AxisConfig::builtin();
        let variants = order::sort_variants(&matrix::valid_variants(&config)?)?;
        debug!("{} buildable variants", variants.len());

        for variant in &variants {
            if self.base_images {
                println!("{}\t{}", variant.docker_tag, variant.base_image_tag);
            } else {
                println!("{}", variant.docker_tag);
            }
        }

        Ok(())
    }
}
