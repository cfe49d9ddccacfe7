//! The restricted type-expression grammar.
//!
//! Recognized shapes: `BASE`, `BASE*` (one `*` per pointer layer),
//! `BASE[N]`, and `BASE*[N]` for an array of pointers. Nothing else is
//! parsed here — an expression that does not even fit the token shapes is
//! [`TypeExprError::Unrecognized`] and gets forwarded verbatim to the host
//! type system, which may know typedefs and enums this grammar cannot
//! predict.

use logos::Logos;
use strucline_core::TypeSpec;
use thiserror::Error;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum TypeToken {
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$:]*")]
    Ident,

    #[token("*")]
    Star,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[regex(r"[0-9]+")]
    Number,
}

/// Why a type expression failed the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeExprError {
    /// `[` without a well-formed `N]`, or trailing tokens after `]`.
    #[error("malformed array")]
    MalformedArray,
    /// A `*` somewhere it cannot mean a pointer layer (e.g. `BASE[4]*`).
    #[error("malformed pointer")]
    MalformedPointer,
    /// Not even token-shaped; the host gets the final verdict.
    #[error("unrecognized type expression")]
    Unrecognized,
}

/// Parse a type expression into a [`TypeSpec`].
///
/// # Examples
/// ```
/// use strucline_engine::type_expr::parse_type_expr;
/// let spec = parse_type_expr("_QWORD[4]").unwrap();
/// assert_eq!(spec.base, "_QWORD");
/// assert_eq!(spec.array_len, 4);
/// ```
pub fn parse_type_expr(expr: &str) -> Result<TypeSpec, TypeExprError> {
    let mut lexer = TypeToken::lexer(expr);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        match token {
            Ok(kind) => tokens.push((kind, lexer.slice())),
            Err(()) => return Err(TypeExprError::Unrecognized),
        }
    }

    let mut iter = tokens.into_iter().peekable();

    let base = match iter.next() {
        Some((TypeToken::Ident, text)) => text.to_string(),
        _ => return Err(TypeExprError::Unrecognized),
    };

    let mut ptr_depth: u8 = 0;
    while let Some((TypeToken::Star, _)) = iter.peek() {
        iter.next();
        ptr_depth = ptr_depth
            .checked_add(1)
            .ok_or(TypeExprError::MalformedPointer)?;
    }

    let mut array_len: u32 = 0;
    if let Some((TypeToken::BracketOpen, _)) = iter.peek() {
        iter.next();
        let len = match iter.next() {
            Some((TypeToken::Number, digits)) => digits
                .parse::<u32>()
                .map_err(|_| TypeExprError::MalformedArray)?,
            _ => return Err(TypeExprError::MalformedArray),
        };
        match iter.next() {
            Some((TypeToken::BracketClose, _)) => array_len = len,
            _ => return Err(TypeExprError::MalformedArray),
        }
    }

    match iter.next() {
        None => Ok(TypeSpec {
            base,
            ptr_depth,
            array_len,
        }),
        // `BASE[4]*` and friends: the star cannot be a pointer layer here.
        Some((TypeToken::Star, _)) => Err(TypeExprError::MalformedPointer),
        Some(_) => Err(TypeExprError::MalformedArray),
    }
}
