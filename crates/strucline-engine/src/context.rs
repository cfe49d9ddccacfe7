//! Auto-fill seeds and session state.
//!
//! Seeds are advisory defaults pre-filled into the editable input line.
//! They are consumed only when the corresponding field is absent from the
//! raw line; once the user types a field, the typed value wins.

use crate::db::StructDatabase;

/// Caller-environment probe for auto-fill seeds.
///
/// Hosts without cursor context use [`NoContext`]; every method defaults
/// to "nothing there".
pub trait ContextProvider {
    /// Identifier currently highlighted in the caller's view, if any.
    fn highlighted_identifier(&self) -> Option<String> {
        None
    }

    /// Declared type name of the decompiler local variable under the
    /// cursor. May carry trailing pointer layers (`Foo **`).
    fn lvar_type_name(&self) -> Option<String> {
        None
    }

    /// Numeric value under the cursor, if the cursor is on one.
    fn numeric_under_cursor(&self) -> Option<u64> {
        None
    }
}

/// Provider for hosts without any cursor context.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoContext;

impl ContextProvider for NoContext {}

/// State carried between successive edits in one session.
///
/// Owns the sticky "last struct" default. Explicitly injectable rather
/// than process-global so independent pipelines never cross-contaminate.
/// Updated only by a successful commit or [`Session::clear_last_struct`];
/// status evaluation never touches it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub last_struct: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the sticky struct default (the user emptied the struct-name
    /// field).
    pub fn clear_last_struct(&mut self) {
        self.last_struct = None;
    }
}

/// Seeds injected into an empty or partial input line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Seeds {
    pub struct_name: Option<String>,
    pub offset: Option<u64>,
}

/// Strip pointer layers off a declared lvar type (`Foo **` -> `Foo`).
fn strip_pointers(type_name: &str) -> &str {
    type_name.trim_end_matches(['*', ' '])
}

/// Compute the seeds for the next input line.
///
/// Struct-name seed priority: highlighted identifier, then the lvar's
/// declared type, then the session's last struct. Cursor-derived names
/// only count when the database already defines a struct of that name.
/// The offset seed is consumed only while a last struct is active;
/// otherwise the offset must be typed.
pub fn gather_seeds(
    ctx: &impl ContextProvider,
    session: &Session,
    db: &impl StructDatabase,
) -> Seeds {
    let cursor_struct = ctx
        .highlighted_identifier()
        .filter(|name| db.lookup_struct(name).exists)
        .or_else(|| {
            ctx.lvar_type_name()
                .map(|name| strip_pointers(&name).to_string())
                .filter(|name| db.lookup_struct(name).exists)
        });

    let struct_name = cursor_struct.or_else(|| session.last_struct.clone());

    let offset = if session.last_struct.is_some() {
        ctx.numeric_under_cursor()
    } else {
        None
    };

    Seeds {
        struct_name,
        offset,
    }
}
