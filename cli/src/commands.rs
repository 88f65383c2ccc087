pub mod demo;
pub mod list;
pub mod menu;
pub mod stats;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "A small book lending registry.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (the default)
    #[command(alias = "m")]
    Menu,
    /// Run the scripted demonstration against a fresh library
    #[command(alias = "d")]
    Demo,
    /// Print the seeded catalog and exit
    #[command(alias = "l")]
    List,
    /// Print system statistics and exit
    #[command(alias = "s")]
    Stats,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
