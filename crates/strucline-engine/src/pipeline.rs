//! Per-keystroke evaluation and transactional commit.
//!
//! [`evaluate`] is the pure half: raw text plus seeds plus a fresh layout
//! snapshot in, a [`Resolution`] out. Callers re-invoke it on every text
//! change; it never mutates the session or the database. [`commit`] is the
//! mutating half: it re-evaluates against current database state (the
//! displayed status may be stale), hands the plan to the host, and only
//! then updates the session's last struct.

use strucline_core::{ByteRange, Member, MemberDraft, TypeSpec, parse_offset};
use thiserror::Error;

use crate::collision;
use crate::context::{Seeds, Session};
use crate::db::StructDatabase;
use crate::naming;
use crate::plan::{ApplyError, CommitPlan, InvalidReason, Status};
use crate::tokenizer::{self, Line};
use crate::type_expr::{self, TypeExprError};

/// Everything one pipeline run produces: the live status plus the data the
/// caller needs for coloring, the overlap tooltip, and the eventual commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: Status,
    /// The tokenized line, with field spans for diagnostics.
    pub line: Line,
    /// Present iff the status is one of the valid variants.
    pub plan: Option<CommitPlan>,
    /// Overlapped members slated for deletion, in layout order.
    pub collisions: Vec<Member>,
    /// True iff committing would create the struct.
    pub create_struct: bool,
}

impl Resolution {
    fn invalid(line: Line, reason: InvalidReason) -> Self {
        Self {
            status: Status::Invalid(reason),
            line,
            plan: None,
            collisions: Vec::new(),
            create_struct: false,
        }
    }
}

/// Resolve the type field into a spec, or the reason it cannot be one.
///
/// Expressions outside the grammar are forwarded verbatim as a base name;
/// the host gives the final verdict on those.
fn resolve_spec(expr: &str) -> Result<TypeSpec, InvalidReason> {
    match type_expr::parse_type_expr(expr) {
        Ok(spec) => Ok(spec),
        Err(TypeExprError::Unrecognized) => Ok(TypeSpec::scalar(expr)),
        Err(TypeExprError::MalformedArray) => {
            Err(InvalidReason::MalformedArray(expr.to_string()))
        }
        Err(TypeExprError::MalformedPointer) => {
            Err(InvalidReason::MalformedPointer(expr.to_string()))
        }
    }
}

/// Run the pipeline once over `raw` without mutating anything.
///
/// Pure and idempotent: identical (line, seeds, snapshot) inputs yield
/// identical resolutions.
pub fn evaluate(raw: &str, seeds: &Seeds, db: &impl StructDatabase) -> Resolution {
    let line = tokenizer::tokenize(raw);

    if !line.surplus.is_empty() {
        return Resolution::invalid(line, InvalidReason::TooManyFields);
    }

    let struct_name = match (&line.struct_name, &seeds.struct_name) {
        (Some(field), _) => field.text.clone(),
        (None, Some(seed)) => seed.clone(),
        (None, None) => return Resolution::invalid(line, InvalidReason::MissingStructName),
    };

    let offset = match (&line.offset, seeds.offset) {
        (Some(field), _) => match parse_offset(&field.text) {
            Ok(offset) => offset,
            Err(_) => {
                let text = field.text.clone();
                return Resolution::invalid(line, InvalidReason::MalformedOffset(text));
            }
        },
        (None, Some(seed)) => seed,
        (None, None) => return Resolution::invalid(line, InvalidReason::MissingOffset),
    };

    let type_text = line
        .type_expr
        .as_ref()
        .map(|field| field.text.clone())
        .unwrap_or_else(|| "_BYTE".to_string());
    let spec = match resolve_spec(&type_text) {
        Ok(spec) => spec,
        Err(reason) => return Resolution::invalid(line, reason),
    };

    let size = match db.resolve_size(&spec) {
        Ok(0) => return Resolution::invalid(line, InvalidReason::ZeroSizedType(type_text)),
        Ok(size) => size,
        Err(_) => return Resolution::invalid(line, InvalidReason::UnknownType(type_text)),
    };

    // The draft's end must stay representable as a byte offset.
    if offset.checked_add(size).is_none() {
        return Resolution::invalid(line, InvalidReason::OffsetOutOfRange(offset));
    }

    let name = match &line.member_name {
        Some(field) => {
            if !naming::is_valid_member_name(&field.text) {
                let text = field.text.clone();
                return Resolution::invalid(line, InvalidReason::InvalidMemberName(text));
            }
            field.text.clone()
        }
        None => format!("field_{offset:X}"),
    };

    let layout = db.lookup_struct(&struct_name);
    let report = collision::scan(&layout, ByteRange::at(offset, size));
    let deletions = report.deletions();

    // Deleted names are freed before disambiguation runs.
    let final_name = naming::disambiguate(&name, |candidate| {
        layout.has_member(candidate) && !deletions.iter().any(|d| d == candidate)
    });

    let create_struct = !layout.exists;
    let status = if create_struct {
        Status::ValidCreate
    } else if report.overlapped.is_empty() {
        Status::Valid
    } else {
        Status::ValidOverwrite
    };

    let plan = CommitPlan {
        struct_name,
        create_struct,
        deletions,
        member: MemberDraft {
            name: final_name,
            spec,
            offset,
            size,
        },
        grow_to: report.grow_to,
    };

    Resolution {
        status,
        line,
        plan: Some(plan),
        collisions: report.overlapped,
        create_struct,
    }
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The plan as applied, after re-resolution against current state.
    pub plan: CommitPlan,
    /// One-line report, e.g. `Added _QWORD count @ 0x10 for Packet`.
    pub report: String,
}

/// Why a commit did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("line is not committable: {0}")]
    Invalid(InvalidReason),
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// Commit one input line against the host database.
///
/// The line is re-resolved against a fresh snapshot first: whatever status
/// the caller last displayed is not trusted. On success the session's
/// last struct is updated; on any failure it is left alone and the
/// database is untouched.
pub fn commit(
    raw: &str,
    seeds: &Seeds,
    session: &mut Session,
    db: &mut impl StructDatabase,
) -> Result<CommitOutcome, CommitError> {
    let resolution = evaluate(raw, seeds, db);
    let plan = match resolution.status {
        Status::Invalid(reason) => return Err(CommitError::Invalid(reason)),
        _ => resolution
            .plan
            .expect("valid resolution always carries a plan"),
    };

    db.apply(&plan)?;
    session.last_struct = Some(plan.struct_name.clone());

    let report = format!(
        "Added {} {} @ {:#x} for {}",
        plan.member.spec, plan.member.name, plan.member.offset, plan.struct_name
    );
    Ok(CommitOutcome { plan, report })
}
