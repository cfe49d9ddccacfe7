//! Struct layout snapshots and member drafts.
//!
//! A [`StructLayout`] is read from the host database once per pipeline run
//! and never cached across runs. Members are kept in offset order in an
//! `IndexMap` keyed by name, so both "name taken?" and ordered iteration
//! are cheap.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::range::ByteRange;
use crate::typespec::TypeSpec;

/// One existing member of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub spec: TypeSpec,
    pub offset: u64,
    pub size: u64,
}

impl Member {
    /// Byte range `[offset, offset + size)` this member occupies.
    #[inline]
    pub fn range(&self) -> ByteRange {
        ByteRange::at(self.offset, self.size)
    }
}

/// A fully resolved member edit awaiting commit.
///
/// Same shape as [`Member`], but the name may still change (suffixing) and
/// nothing in the host database backs it yet. `size > 0` for any
/// committable draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub spec: TypeSpec,
    pub offset: u64,
    pub size: u64,
}

impl MemberDraft {
    #[inline]
    pub fn range(&self) -> ByteRange {
        ByteRange::at(self.offset, self.size)
    }

    /// Convert into a committed member once the host accepted it.
    pub fn into_member(self) -> Member {
        Member {
            name: self.name,
            spec: self.spec,
            offset: self.offset,
            size: self.size,
        }
    }
}

/// Snapshot of one struct's current layout.
///
/// `exists == false` is the placeholder for a struct the host does not
/// define yet: size 0 and no members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructLayout {
    pub name: String,
    #[serde(default = "exists_default")]
    pub exists: bool,
    pub size: u64,
    #[serde(default)]
    pub members: IndexMap<String, Member>,
}

fn exists_default() -> bool {
    true
}

impl StructLayout {
    /// An existing, empty struct.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exists: true,
            size: 0,
            members: IndexMap::new(),
        }
    }

    /// Placeholder for a struct the host does not define.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exists: false,
            size: 0,
            members: IndexMap::new(),
        }
    }

    /// Insert a member, keeping iteration ordered by offset.
    pub fn insert(&mut self, member: Member) {
        self.members.insert(member.name.clone(), member);
        self.members
            .sort_by(|_, a, _, b| a.offset.cmp(&b.offset));
    }

    /// Remove a member by name. Returns false if no such member.
    pub fn remove(&mut self, name: &str) -> bool {
        self.members.shift_remove(name).is_some()
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Members whose byte range intersects `range`, in layout order.
    pub fn members_overlapping<'a>(
        &'a self,
        range: ByteRange,
    ) -> impl Iterator<Item = &'a Member> {
        self.members
            .values()
            .filter(move |m| m.range().overlaps(&range))
    }
}
