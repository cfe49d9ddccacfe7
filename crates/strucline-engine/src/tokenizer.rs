//! Field splitting for the input line.
//!
//! The line is split into at most four positional fields:
//! `struct_name offset [type] [name]`. Fields carry byte spans into the raw
//! line so invalid input can be reported with a caret under the offending
//! field. Commas count as separators (`MyStruct 10, _QWORD` is accepted).
//!
//! Splitting is pure and never fails; missing or surplus fields are judged
//! downstream by the planner.

use std::ops::Range;

/// Positional role of a field in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    StructName,
    Offset,
    TypeExpr,
    MemberName,
    /// Anything past the fourth field.
    Surplus,
}

/// One field: role, text, and byte span into the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub text: String,
    pub span: Range<usize>,
}

/// The positionally mapped fields of one input line.
///
/// A field is never inferred from a later position: the second field is the
/// offset whether or not it parses as one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub struct_name: Option<Field>,
    pub offset: Option<Field>,
    pub type_expr: Option<Field>,
    pub member_name: Option<Field>,
    pub surplus: Vec<Field>,
}

impl Line {
    pub fn field_count(&self) -> usize {
        [
            self.struct_name.is_some(),
            self.offset.is_some(),
            self.type_expr.is_some(),
            self.member_name.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
            + self.surplus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.struct_name.is_none()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Split a raw line into positional fields.
pub fn tokenize(raw: &str) -> Line {
    let mut line = Line::default();
    let mut position = 0usize;

    let mut chars = raw.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if is_separator(c) {
            chars.next();
            continue;
        }

        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if is_separator(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        let kind = match position {
            0 => FieldKind::StructName,
            1 => FieldKind::Offset,
            2 => FieldKind::TypeExpr,
            3 => FieldKind::MemberName,
            _ => FieldKind::Surplus,
        };
        let field = Field {
            kind,
            text: raw[start..end].to_string(),
            span: start..end,
        };
        match kind {
            FieldKind::StructName => line.struct_name = Some(field),
            FieldKind::Offset => line.offset = Some(field),
            FieldKind::TypeExpr => line.type_expr = Some(field),
            FieldKind::MemberName => line.member_name = Some(field),
            FieldKind::Surplus => line.surplus.push(field),
        }
        position += 1;
    }

    line
}
