//! Quill CLI Application
//!
//! Command-line front end for the Quill submission wizards.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        outbox_dir,
        no_color,
        command,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color), outbox_dir);

    info!("Quill started");

    match command {
        Some(Show(args)) => cli.show_flow(args),
        Some(Check(args)) => cli.check_answers(args),
        Some(Fill(args)) => cli.fill(args).await,
        Some(Propose(args)) => cli.propose(args).await,
        Some(Flows) | None => cli.list_flows(),
    }
}
