use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "strucline", bin_name = "strucline")]
#[command(about = "One-line struct-member edits: `struct_name offset [type] [name]`")]
pub struct Cli {
    /// Struct database file (JSON). `add` creates it when missing.
    #[arg(
        short = 'd',
        long = "db",
        value_name = "FILE",
        global = true,
        default_value = "structs.json"
    )]
    pub db: PathBuf,

    #[arg(long, value_name = "WHEN", global = true, default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a line and report its status without committing
    #[command(after_help = r#"EXAMPLES:
  strucline check 'Packet 0x10 _QWORD[4]'
  strucline check 'Packet 18 _DWORD count'"#)]
    Check {
        /// The input line
        line: String,
    },

    /// Commit a line against the database
    #[command(after_help = r#"EXAMPLES:
  strucline add 'Packet 0x10 _QWORD[4] payload'
  strucline add 'Packet 20' --history strucline_history.json"#)]
    Add {
        /// The input line
        line: String,

        /// Record the committed line in this history file
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,
    },

    /// Print struct layouts from the database
    Show {
        /// Struct to print; all structs when omitted
        name: Option<String>,
    },

    /// List committed lines recorded for this database
    History {
        /// History file to read
        #[arg(
            long = "file",
            value_name = "FILE",
            default_value = "strucline_history.json"
        )]
        file: PathBuf,
    },
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use clap::CommandFactory;
    use strucline_core::StructLayout;
    use strucline_engine::{MemDb, Seeds, evaluate};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_examples_are_accepted_by_the_pipeline() {
        let mut db = MemDb::new();
        db.define_struct(StructLayout::new("Packet"));

        // Every line shown in an after_help EXAMPLES block.
        for line in [
            "Packet 0x10 _QWORD[4]",
            "Packet 18 _DWORD count",
            "Packet 0x10 _QWORD[4] payload",
            "Packet 20",
        ] {
            let resolution = evaluate(line, &Seeds::default(), &db);
            assert!(resolution.status.is_valid(), "rejected example: {line}");
        }
    }
}
