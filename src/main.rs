mod cli;
mod display;
mod generators;
mod models;
mod scores;
mod session;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
