//! Parsed member types and their size rule.

use serde::{Deserialize, Serialize};

/// A member type: base name, pointer depth, optional array length.
///
/// `array_len == 0` means "not an array". The restricted grammar this maps
/// to is `BASE`, `BASE*` (any depth), `BASE[N]`, and `BASE*[N]` for arrays
/// of pointers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSpec {
    pub base: String,
    #[serde(default)]
    pub ptr_depth: u8,
    #[serde(default)]
    pub array_len: u32,
}

impl TypeSpec {
    pub fn scalar(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ptr_depth: 0,
            array_len: 0,
        }
    }

    pub fn pointer(base: impl Into<String>, depth: u8) -> Self {
        Self {
            base: base.into(),
            ptr_depth: depth,
            array_len: 0,
        }
    }

    pub fn array(base: impl Into<String>, len: u32) -> Self {
        Self {
            base: base.into(),
            ptr_depth: 0,
            array_len: len,
        }
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.ptr_depth > 0
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.array_len > 0
    }

    /// Number of elements the member occupies: 1 for non-arrays.
    #[inline]
    pub fn element_count(&self) -> u64 {
        u64::from(self.array_len.max(1))
    }

    /// Total size in bytes given the host-resolved base size and pointer width.
    ///
    /// Pointer depth > 0 makes the element pointer-sized regardless of the
    /// base type; the array length still multiplies, so `QWORD*[4]` is four
    /// pointers wide. Saturates instead of wrapping; the planner rejects any
    /// draft whose end is not representable.
    pub fn size(&self, base_size: u64, pointer_width: u64) -> u64 {
        let element = if self.is_pointer() {
            pointer_width
        } else {
            base_size
        };
        element.saturating_mul(self.element_count())
    }
}

impl std::fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)?;
        for _ in 0..self.ptr_depth {
            write!(f, "*")?;
        }
        if self.is_array() {
            write!(f, "[{}]", self.array_len)?;
        }
        Ok(())
    }
}
