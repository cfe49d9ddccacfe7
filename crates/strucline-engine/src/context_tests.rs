use crate::context::{ContextProvider, NoContext, Session, gather_seeds};
use crate::db::MemDb;
use strucline_core::StructLayout;

#[derive(Default)]
struct FakeContext {
    highlighted: Option<String>,
    lvar: Option<String>,
    numeric: Option<u64>,
}

impl ContextProvider for FakeContext {
    fn highlighted_identifier(&self) -> Option<String> {
        self.highlighted.clone()
    }
    fn lvar_type_name(&self) -> Option<String> {
        self.lvar.clone()
    }
    fn numeric_under_cursor(&self) -> Option<u64> {
        self.numeric
    }
}

fn db_with(names: &[&str]) -> MemDb {
    let mut db = MemDb::new();
    for name in names {
        db.define_struct(StructLayout::new(*name));
    }
    db
}

#[test]
fn no_context_no_session_yields_nothing() {
    let seeds = gather_seeds(&NoContext, &Session::new(), &db_with(&[]));
    assert_eq!(seeds.struct_name, None);
    assert_eq!(seeds.offset, None);
}

#[test]
fn highlighted_known_struct_wins() {
    let ctx = FakeContext {
        highlighted: Some("Packet".to_string()),
        lvar: Some("Frame".to_string()),
        ..Default::default()
    };
    let session = Session {
        last_struct: Some("Old".to_string()),
    };
    let seeds = gather_seeds(&ctx, &session, &db_with(&["Packet", "Frame", "Old"]));
    assert_eq!(seeds.struct_name.as_deref(), Some("Packet"));
}

#[test]
fn unknown_highlight_is_ignored() {
    let ctx = FakeContext {
        highlighted: Some("not_a_struct".to_string()),
        ..Default::default()
    };
    let seeds = gather_seeds(&ctx, &Session::new(), &db_with(&["Packet"]));
    assert_eq!(seeds.struct_name, None);
}

#[test]
fn lvar_type_is_stripped_of_pointers() {
    let ctx = FakeContext {
        lvar: Some("Packet **".to_string()),
        ..Default::default()
    };
    let seeds = gather_seeds(&ctx, &Session::new(), &db_with(&["Packet"]));
    assert_eq!(seeds.struct_name.as_deref(), Some("Packet"));
}

#[test]
fn last_struct_is_the_fallback() {
    let session = Session {
        last_struct: Some("Packet".to_string()),
    };
    let seeds = gather_seeds(&NoContext, &session, &db_with(&["Packet"]));
    assert_eq!(seeds.struct_name.as_deref(), Some("Packet"));
}

#[test]
fn offset_seed_requires_an_active_last_struct() {
    let ctx = FakeContext {
        highlighted: Some("Packet".to_string()),
        numeric: Some(0x18),
        ..Default::default()
    };

    // Cursor struct alone: no offset seed.
    let seeds = gather_seeds(&ctx, &Session::new(), &db_with(&["Packet"]));
    assert_eq!(seeds.offset, None);

    // With a last struct active the cursor value seeds the offset.
    let session = Session {
        last_struct: Some("Packet".to_string()),
    };
    let seeds = gather_seeds(&ctx, &session, &db_with(&["Packet"]));
    assert_eq!(seeds.offset, Some(0x18));
}
