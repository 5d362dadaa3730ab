mod commands;
mod terminal;

use commands::{CommandLine, Commands, generate, plan};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();

    match commands.command {
        Commands::Generate(args) => generate::generate(&args),
        Commands::Plan(args) => plan::plan(&args),
    }
}
