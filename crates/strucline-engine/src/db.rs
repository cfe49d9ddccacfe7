//! The host database boundary and an in-memory reference host.
//!
//! The engine never owns type information. It snapshots layouts through
//! [`StructDatabase`] once per pipeline run and applies commit plans
//! transactionally through the same trait. [`MemDb`] is the reference
//! implementation backing the CLI and the tests; a disassembler or
//! decompiler plugin supplies its own.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strucline_core::{StructLayout, TypeSpec};
use thiserror::Error;

use crate::plan::{ApplyError, ApplyStage, CommitPlan};

/// Why the host rejected a type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("unknown type `{0}`")]
    Unknown(String),
}

/// Boundary to the host type/struct database.
pub trait StructDatabase {
    /// Size in bytes of a pointer member.
    fn pointer_width(&self) -> u64;

    /// Size in bytes of the named base type, ignoring pointers and arrays.
    fn base_size(&self, base: &str) -> Result<u64, TypeError>;

    /// Current layout snapshot, or an `exists == false` placeholder.
    /// Read-only probe; must not mutate anything.
    fn lookup_struct(&self, name: &str) -> StructLayout;

    /// Apply a commit plan as one undo-grouped transaction. Any stage
    /// failure must leave the database untouched.
    fn apply(&mut self, plan: &CommitPlan) -> Result<(), ApplyError>;

    /// Fully resolve a spec's size. Pointer members never consult the base
    /// type: the pointee may be a type the host only learns about later.
    fn resolve_size(&self, spec: &TypeSpec) -> Result<u64, TypeError> {
        let base_size = if spec.is_pointer() {
            self.pointer_width()
        } else {
            self.base_size(&spec.base)?
        };
        Ok(spec.size(base_size, self.pointer_width()))
    }
}

impl<T: StructDatabase + ?Sized> StructDatabase for &mut T {
    fn pointer_width(&self) -> u64 {
        (**self).pointer_width()
    }
    fn base_size(&self, base: &str) -> Result<u64, TypeError> {
        (**self).base_size(base)
    }
    fn lookup_struct(&self, name: &str) -> StructLayout {
        (**self).lookup_struct(name)
    }
    fn apply(&mut self, plan: &CommitPlan) -> Result<(), ApplyError> {
        (**self).apply(plan)
    }
}

/// Builtin decompiler scalar types and their sizes.
pub const DECOMP_TYPES: &[(&str, u64)] = &[
    ("_BYTE", 1),
    ("_WORD", 2),
    ("_DWORD", 4),
    ("_QWORD", 8),
    ("_OWORD", 16),
    ("_TBYTE", 10),
    ("_UNKNOWN", 1),
];

fn default_pointer_width() -> u64 {
    8
}

/// In-memory reference implementation of [`StructDatabase`].
///
/// Knows the builtin decompiler scalars, any registered named types, and
/// every struct it stores — structs are themselves usable as member base
/// types. Serializes to the CLI's JSON database file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemDb {
    #[serde(default = "default_pointer_width")]
    pointer_width: u64,
    /// Registered named types (typedefs, enums) and their sizes.
    #[serde(default)]
    types: IndexMap<String, u64>,
    #[serde(default)]
    structs: IndexMap<String, StructLayout>,
}

impl Default for MemDb {
    fn default() -> Self {
        Self::new()
    }
}

impl MemDb {
    pub fn new() -> Self {
        Self {
            pointer_width: default_pointer_width(),
            types: IndexMap::new(),
            structs: IndexMap::new(),
        }
    }

    pub fn with_pointer_width(width: u64) -> Self {
        Self {
            pointer_width: width,
            ..Self::new()
        }
    }

    /// Register a named type (typedef, enum) with its size.
    pub fn register_type(&mut self, name: impl Into<String>, size: u64) {
        self.types.insert(name.into(), size);
    }

    /// Define or replace a struct wholesale (test and file-load path).
    pub fn define_struct(&mut self, layout: StructLayout) {
        self.structs.insert(layout.name.clone(), layout);
    }

    pub fn structs(&self) -> impl Iterator<Item = &StructLayout> {
        self.structs.values()
    }

    pub fn struct_names(&self) -> Vec<String> {
        self.structs.keys().cloned().collect()
    }
}

impl StructDatabase for MemDb {
    fn pointer_width(&self) -> u64 {
        self.pointer_width
    }

    fn base_size(&self, base: &str) -> Result<u64, TypeError> {
        if let Some((_, size)) = DECOMP_TYPES.iter().find(|(name, _)| *name == base) {
            return Ok(*size);
        }
        if let Some(size) = self.types.get(base) {
            return Ok(*size);
        }
        if let Some(layout) = self.structs.get(base) {
            return Ok(layout.size);
        }
        Err(TypeError::Unknown(base.to_string()))
    }

    fn lookup_struct(&self, name: &str) -> StructLayout {
        self.structs
            .get(name)
            .cloned()
            .unwrap_or_else(|| StructLayout::missing(name))
    }

    fn apply(&mut self, plan: &CommitPlan) -> Result<(), ApplyError> {
        // Stage every step on a scratch copy; the stored struct is only
        // replaced once all of them succeeded.
        let mut layout = match self.structs.get(&plan.struct_name) {
            Some(existing) if plan.create_struct => {
                return Err(ApplyError::new(
                    ApplyStage::CreateStruct,
                    format!("struct `{}` already exists", existing.name),
                ));
            }
            Some(existing) => existing.clone(),
            None if plan.create_struct => StructLayout::new(&plan.struct_name),
            None => {
                return Err(ApplyError::new(
                    ApplyStage::CreateStruct,
                    format!("struct `{}` does not exist", plan.struct_name),
                ));
            }
        };

        for name in &plan.deletions {
            if !layout.remove(name) {
                return Err(ApplyError::new(
                    ApplyStage::DeleteMember,
                    format!("no member `{name}` in `{}`", plan.struct_name),
                ));
            }
        }

        if let Some(grow_to) = plan.grow_to {
            if grow_to < layout.size {
                return Err(ApplyError::new(
                    ApplyStage::Resize,
                    format!(
                        "cannot shrink `{}` from {} to {grow_to}",
                        plan.struct_name, layout.size
                    ),
                ));
            }
            layout.size = grow_to;
        }

        let draft = &plan.member;
        if draft.size == 0 {
            return Err(ApplyError::new(
                ApplyStage::InsertMember,
                format!("member `{}` has zero size", draft.name),
            ));
        }
        if layout.has_member(&draft.name) {
            return Err(ApplyError::new(
                ApplyStage::InsertMember,
                format!("member name `{}` already taken", draft.name),
            ));
        }
        if layout.members_overlapping(draft.range()).next().is_some() {
            return Err(ApplyError::new(
                ApplyStage::InsertMember,
                format!("member `{}` overlaps surviving members", draft.name),
            ));
        }
        if draft.range().end > layout.size {
            return Err(ApplyError::new(
                ApplyStage::InsertMember,
                format!("member `{}` extends past the struct end", draft.name),
            ));
        }
        layout.insert(draft.clone().into_member());

        self.structs.insert(plan.struct_name.clone(), layout);
        Ok(())
    }
}
