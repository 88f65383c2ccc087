mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, list, menu, stats};
use libris_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: command_line.no_banner,
        no_color: command_line.no_color,
    };

    if cfg.no_color {
        colored::control::set_override(false);
    }

    print::banner(&cfg);

    match command_line.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run(&cfg),
        Commands::Demo => demo::run(&cfg),
        Commands::List => Ok(list::run(&cfg)),
        Commands::Stats => Ok(stats::run(&cfg)),
    }
}
