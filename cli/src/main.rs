mod commands;
mod terminal;

use commands::{CommandLine, Commands, render, template};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner();

    match commands.command {
        Commands::Render(args) => {
            print::header("generating scan report");
            render::run(args)
        }
        Commands::Template { dir } => {
            print::header("initializing template asset");
            template::run(&dir)
        }
    }
}
