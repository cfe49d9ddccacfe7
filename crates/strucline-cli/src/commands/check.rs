use std::path::PathBuf;

use strucline_engine::{Seeds, Status, evaluate};

use crate::db_file;
use crate::report;

pub struct CheckArgs {
    pub db: PathBuf,
    pub line: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let db = match db_file::load(&args.db) {
        Ok(db) => db,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let resolution = evaluate(&args.line, &Seeds::default(), &db);

    match &resolution.status {
        Status::Invalid(reason) => {
            eprintln!(
                "{}",
                report::render_invalid(&args.line, &resolution.line, reason, args.color)
            );
            std::process::exit(1);
        }
        status => {
            let plan = resolution
                .plan
                .as_ref()
                .expect("valid resolution always carries a plan");
            let verdict = match status {
                Status::Valid => "valid".to_string(),
                Status::ValidCreate => format!("valid: creates struct `{}`", plan.struct_name),
                Status::ValidOverwrite => format!(
                    "valid: overwrites {} member(s) of `{}`",
                    plan.deletions.len(),
                    plan.struct_name
                ),
                Status::Invalid(_) => unreachable!(),
            };
            println!("{verdict}");
            println!(
                "  member {} {} at {}",
                plan.member.spec,
                plan.member.name,
                plan.member.range()
            );
            if let Some(grow_to) = plan.grow_to {
                println!("  grows `{}` to {grow_to:#x}", plan.struct_name);
            }
            if !resolution.collisions.is_empty() {
                println!("{}", report::overlap_hint(&resolution.collisions));
            }
        }
    }
}
