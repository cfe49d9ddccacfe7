use std::path::PathBuf;

use strucline_engine::{CommitError, History, Seeds, Session, commit};

use crate::db_file;
use crate::report;

pub struct AddArgs {
    pub db: PathBuf,
    pub line: String,
    pub history: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: AddArgs) {
    let mut db = match db_file::load(&args.db) {
        Ok(db) => db,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new();
    let outcome = match commit(&args.line, &Seeds::default(), &mut session, &mut db) {
        Ok(outcome) => outcome,
        Err(CommitError::Invalid(reason)) => {
            let line = strucline_engine::tokenizer::tokenize(&args.line);
            eprintln!(
                "{}",
                report::render_invalid(&args.line, &line, &reason, args.color)
            );
            std::process::exit(1);
        }
        Err(CommitError::Apply(err)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(msg) = db_file::save(&args.db, &db) {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }

    if let Some(history_path) = &args.history {
        // History is per-database, keyed by the database file path.
        let identity = args.db.display().to_string();
        let saved = History::open(history_path, &identity).and_then(|mut history| {
            history.append(args.line.trim());
            history.save()
        });
        if let Err(err) = saved {
            eprintln!("warning: could not update history: {err}");
        }
    }

    println!("{}", outcome.report);
}
