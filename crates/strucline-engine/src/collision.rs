//! Byte-range overlap against a layout snapshot.

use strucline_core::{ByteRange, Member, StructLayout};

/// Outcome of the overlap scan for one draft range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Existing members whose byte range intersects the draft range, in
    /// layout order. Every one of them is deleted on commit; partial
    /// overlap is a full removal, never a split or truncation.
    pub overlapped: Vec<Member>,
    /// Required struct size, when the draft extends past the current end.
    pub grow_to: Option<u64>,
}

impl CollisionReport {
    pub fn deletions(&self) -> Vec<String> {
        self.overlapped.iter().map(|m| m.name.clone()).collect()
    }
}

/// Scan `layout` for members overlapping `range` and compute growth.
///
/// Touching endpoints do not collide: a member ending exactly at
/// `range.start` survives.
pub fn scan(layout: &StructLayout, range: ByteRange) -> CollisionReport {
    let overlapped = layout.members_overlapping(range).cloned().collect();
    let grow_to = (range.end > layout.size).then_some(range.end);
    CollisionReport { overlapped, grow_to }
}
