mod menu;
mod scores_cmd;

use clap::{Parser, Subcommand};

use crate::display;
use crate::models::Difficulty;

#[derive(Parser)]
#[command(name = "mathquiz")]
#[command(about = "Interactive math quiz", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the high-score table and exit
    Scores {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    /// Print information about the quiz and exit
    Info,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => menu::run_menu(),
        Some(Commands::Scores { level }) => scores_cmd::show_scores(level),
        Some(Commands::Info) => display::show_info(),
    }
}
