// src/bin/cscan.rs
use anyhow::Result;
use clap::Parser;

use cscan_core::cli::handlers;
use cscan_core::cli::{CheckArgs, Cli, Commands};
use cscan_core::exit::CscanExit;

fn main() {
    CscanExit::from(run()).exit()
}

fn run() -> Result<CscanExit> {
    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Check(args)) => handlers::handle_check(args, cli.verbose),
        Some(Commands::Demo { format }) => handlers::handle_demo(*format),
        Some(Commands::Init) => handlers::handle_init(),
        None => handlers::handle_check(&CheckArgs::default(), cli.verbose),
    }
}
