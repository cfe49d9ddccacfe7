mod cli;
mod commands;
mod db_file;
mod report;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let color = cli.color.should_colorize();

    match cli.command {
        Command::Check { line } => commands::check::run(commands::check::CheckArgs {
            db: cli.db,
            line,
            color,
        }),
        Command::Add { line, history } => commands::add::run(commands::add::AddArgs {
            db: cli.db,
            line,
            history,
            color,
        }),
        Command::Show { name } => commands::show::run(commands::show::ShowArgs { db: cli.db, name }),
        Command::History { file } => {
            commands::history::run(commands::history::HistoryArgs { db: cli.db, file })
        }
    }
}
