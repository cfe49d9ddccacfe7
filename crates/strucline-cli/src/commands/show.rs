use std::path::PathBuf;

use strucline_core::StructLayout;
use strucline_engine::StructDatabase;

use crate::db_file;

pub struct ShowArgs {
    pub db: PathBuf,
    pub name: Option<String>,
}

pub fn run(args: ShowArgs) {
    let db = match db_file::load(&args.db) {
        Ok(db) => db,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    match &args.name {
        Some(name) => {
            let layout = db.lookup_struct(name);
            if !layout.exists {
                eprintln!("error: no struct `{name}` in {}", args.db.display());
                std::process::exit(1);
            }
            print_layout(&layout);
        }
        None => {
            let mut first = true;
            for layout in db.structs() {
                if !first {
                    println!();
                }
                print_layout(layout);
                first = false;
            }
            if first {
                println!("(no structs in {})", args.db.display());
            }
        }
    }
}

fn print_layout(layout: &StructLayout) {
    println!("struct {} (size {:#x})", layout.name, layout.size);
    for member in layout.members.values() {
        println!(
            "    {:#08x}  {:<16} {}",
            member.offset,
            member.spec.to_string(),
            member.name
        );
    }
}
