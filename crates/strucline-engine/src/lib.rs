//! The strucline engine: parse → resolve → classify → commit.
//!
//! One line of text — `struct_name offset [type] [name]` — becomes a fully
//! resolved, collision-free struct mutation:
//!
//! - `tokenizer` - field splitting with spans for diagnostics
//! - `context` - auto-fill seeds (cursor, sticky last struct)
//! - `type_expr` - the restricted type grammar
//! - `collision` - byte-range overlap and struct growth
//! - `naming` - member-name validity and `_1`/`_2` suffixing
//! - `plan` - commit plans and live status classification
//! - `pipeline` - per-keystroke evaluation and transactional commit
//! - `db` - host database boundary plus an in-memory reference host
//! - `history` - per-database log of committed lines
//!
//! Evaluation is pure: [`evaluate`] recomputes the [`Status`] from a fresh
//! layout snapshot on every call and never mutates anything. Only
//! [`commit`] touches the host, and it re-resolves against current state
//! first, so a stale displayed status can never smuggle a stale plan in.

pub mod collision;
pub mod context;
pub mod db;
pub mod history;
pub mod naming;
pub mod pipeline;
pub mod plan;
pub mod tokenizer;
pub mod type_expr;

#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod naming_tests;

pub use context::{ContextProvider, NoContext, Seeds, Session, gather_seeds};
pub use db::{MemDb, StructDatabase, TypeError};
pub use history::History;
pub use pipeline::{CommitError, CommitOutcome, Resolution, commit, evaluate};
pub use plan::{ApplyError, ApplyStage, CommitPlan, InvalidReason, Status};
