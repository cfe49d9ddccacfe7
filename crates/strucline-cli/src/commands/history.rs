use std::path::PathBuf;

use strucline_engine::History;

pub struct HistoryArgs {
    pub db: PathBuf,
    pub file: PathBuf,
}

pub fn run(args: HistoryArgs) {
    let identity = args.db.display().to_string();
    let history = match History::open(&args.file, &identity) {
        Ok(history) => history,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", args.file.display());
            std::process::exit(1);
        }
    };

    if history.lines().is_empty() {
        println!("(no history for {})", args.db.display());
        return;
    }
    for line in history.lines() {
        println!("{line}");
    }
}
