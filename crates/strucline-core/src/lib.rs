//! Core data structures for strucline.
//!
//! A strucline edit describes one struct member as a single line of text
//! (`struct_name offset [type] [name]`). This crate holds the value types
//! that edit resolves into:
//!
//! - [`ByteRange`] - half-open byte intervals and the overlap test
//! - [`TypeSpec`] - parsed member types and their size rule
//! - [`Member`] / [`StructLayout`] - layout snapshots read from the host
//! - [`MemberDraft`] - a fully resolved edit awaiting commit
//! - [`parse_offset`] - the hexadecimal offset grammar
//!
//! The pipeline that produces and consumes these lives in `strucline-engine`.

pub mod layout;
pub mod offset;
pub mod range;
pub mod typespec;

#[cfg(test)]
mod layout_tests;
#[cfg(test)]
mod offset_tests;
#[cfg(test)]
mod range_tests;
#[cfg(test)]
mod typespec_tests;

pub use layout::{Member, MemberDraft, StructLayout};
pub use offset::{OffsetError, parse_offset};
pub use range::ByteRange;
pub use typespec::TypeSpec;
