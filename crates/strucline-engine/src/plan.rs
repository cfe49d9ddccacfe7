//! Commit plans and live status classification.

use strucline_core::MemberDraft;
use thiserror::Error;

/// Why an input line cannot commit.
///
/// Every pre-commit failure surfaces as one of these inside
/// [`Status::Invalid`]; nothing escapes the pipeline as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("missing struct name")]
    MissingStructName,
    #[error("missing member offset")]
    MissingOffset,
    #[error("malformed offset `{0}`")]
    MalformedOffset(String),
    #[error("member at {0:#x} overflows the address space")]
    OffsetOutOfRange(u64),
    #[error("unknown type `{0}`")]
    UnknownType(String),
    #[error("type `{0}` has zero size")]
    ZeroSizedType(String),
    #[error("malformed array in `{0}`")]
    MalformedArray(String),
    #[error("malformed pointer in `{0}`")]
    MalformedPointer(String),
    #[error("invalid member name `{0}`")]
    InvalidMemberName(String),
    #[error("too many fields, expected `struct_name offset [type] [name]`")]
    TooManyFields,
}

/// Live classification of the current input line.
///
/// Recomputed on every text change; drives the caller's coloring and
/// tooltip. Only an explicit commit turns a valid status into a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Struct exists, no overlap: commit adds one member.
    Valid,
    /// Struct exists, draft overlaps existing members: commit deletes them
    /// first.
    ValidOverwrite,
    /// Struct does not exist yet: commit creates it.
    ValidCreate,
    /// The line cannot commit as written.
    Invalid(InvalidReason),
}

impl Status {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Status::Invalid(_))
    }
}

/// Transaction stage the host was executing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStage {
    CreateStruct,
    DeleteMember,
    Resize,
    InsertMember,
}

impl std::fmt::Display for ApplyStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ApplyStage::CreateStruct => "create struct",
            ApplyStage::DeleteMember => "delete member",
            ApplyStage::Resize => "resize",
            ApplyStage::InsertMember => "insert member",
        };
        f.write_str(name)
    }
}

/// A commit rejected by the host. The whole transaction aborted; no partial
/// mutation was applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("commit failed during {stage}: {detail}")]
pub struct ApplyError {
    pub stage: ApplyStage,
    pub detail: String,
}

impl ApplyError {
    pub fn new(stage: ApplyStage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

/// Ordered, all-or-nothing mutation of one struct.
///
/// Steps apply in order: create the struct if requested, delete every
/// overlapped member, grow to `grow_to` if set, insert the member. A single
/// undo action reverts all of them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    pub struct_name: String,
    /// True iff the struct does not exist yet.
    pub create_struct: bool,
    /// Names of overlapped members to delete, in layout order.
    pub deletions: Vec<String>,
    /// The member to insert, with its final (disambiguated) name and size.
    pub member: MemberDraft,
    /// New struct size; set iff the draft's end exceeds the current size.
    /// Structs never shrink.
    pub grow_to: Option<u64>,
}
