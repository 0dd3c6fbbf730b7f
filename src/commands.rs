use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::error;

pub mod config;
pub mod manifest;
pub mod tags;

pub trait ImagesCommand {
    /// Runs the command and returns a result
    /// of the execution.
    ///
    /// # Errors
    /// Can return a `miette` Error.
    fn try_run(&mut self) -> miette::Result<()>;

    /// Runs the command and exits if there is an error.
    fn run(&mut self) {
        if let Err(e) = self.try_run() {
            error!("{e:?}");
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "jdk-images", about, long_about = None, version)]
pub struct ImagesArgs {
    #[command(subcommand)]
    pub command: CommandArgs,

    #[clap(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub enum CommandArgs {
    /// Print the docker tag of every buildable
    /// variant in build order
    Tags(tags::TagsCommand),

    /// Emit the full ordered variant manifest
    Manifest(manifest::ManifestCommand),

    /// Dump the built-in axis configuration
    Config(config::ConfigCommand),
}
