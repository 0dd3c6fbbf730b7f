use clap::Parser;

mod commands;
mod logging;

use commands::{CommandArgs, ImagesArgs, ImagesCommand};

fn main() {
    let args = ImagesArgs::parse();

    logging::init(args.verbosity.log_level_filter());

    log::trace!("Parsed arguments: {args:#?}");

    match args.command {
        CommandArgs::Tags(mut command) => command.run(),
        CommandArgs::Manifest(mut command) => command.run(),
        CommandArgs::Config(mut command) => command.run(),
    }
}
