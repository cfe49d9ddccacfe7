//! Loading and saving the JSON struct database file.

use std::fs;
use std::io;
use std::path::Path;

use strucline_engine::MemDb;

/// Load a database file; a missing file is an empty database.
pub fn load(path: &Path) -> Result<MemDb, String> {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text)
            .map_err(|err| format!("cannot parse {}: {err}", path.display())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(MemDb::new()),
        Err(err) => Err(format!("cannot read {}: {err}", path.display())),
    }
}

pub fn save(path: &Path, db: &MemDb) -> Result<(), String> {
    let text = serde_json::to_string_pretty(db).expect("database serializes");
    fs::write(path, text).map_err(|err| format!("cannot write {}: {err}", path.display()))
}
