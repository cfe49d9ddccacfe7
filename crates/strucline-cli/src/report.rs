//! Rendering of invalid lines and overlap hints.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use strucline_core::Member;
use strucline_engine::InvalidReason;
use strucline_engine::tokenizer::Line;

/// Span of the field an invalid reason points at; whole line when the
/// reason has no single field (or the field was never typed).
pub fn reason_span(raw: &str, line: &Line, reason: &InvalidReason) -> Range<usize> {
    let field_span = match reason {
        InvalidReason::MalformedOffset(_) | InvalidReason::OffsetOutOfRange(_) => {
            line.offset.as_ref().map(|f| f.span.clone())
        }
        InvalidReason::UnknownType(_)
        | InvalidReason::ZeroSizedType(_)
        | InvalidReason::MalformedArray(_)
        | InvalidReason::MalformedPointer(_) => line.type_expr.as_ref().map(|f| f.span.clone()),
        InvalidReason::InvalidMemberName(_) => line.member_name.as_ref().map(|f| f.span.clone()),
        InvalidReason::TooManyFields => line
            .surplus
            .first()
            .zip(line.surplus.last())
            .map(|(first, last)| first.span.start..last.span.end),
        // Something is missing; point past the end of what was typed.
        InvalidReason::MissingStructName | InvalidReason::MissingOffset => {
            Some(raw.trim_end().len()..raw.trim_end().len())
        }
    };
    field_span.unwrap_or(0..raw.len())
}

/// Render an invalid line with a caret under the offending field.
pub fn render_invalid(raw: &str, line: &Line, reason: &InvalidReason, colored: bool) -> String {
    let message = reason.to_string();
    if raw.trim().is_empty() {
        return format!("error: {message}");
    }

    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let span = clamp_span(reason_span(raw, line, reason), raw.len());
    let snippet = Snippet::source(raw)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(span).label(&message));
    let report = [Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report).to_string()
}

/// Widen empty spans to one character so the caret is visible.
fn clamp_span(span: Range<usize>, limit: usize) -> Range<usize> {
    if span.start == span.end {
        span.start..(span.start + 1).min(limit.max(1))
    } else {
        span
    }
}

/// Tooltip-style lines for overlapped members: `00000010    name`.
pub fn overlap_hint(collisions: &[Member]) -> String {
    collisions
        .iter()
        .map(|m| format!("{:08X}    {}", m.offset, m.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use strucline_engine::tokenizer::tokenize;

    #[test]
    fn malformed_offset_points_at_the_offset_field() {
        let raw = "Packet zz _QWORD";
        let line = tokenize(raw);
        let reason = InvalidReason::MalformedOffset("zz".to_string());
        assert_eq!(reason_span(raw, &line, &reason), 7..9);
    }

    #[test]
    fn unknown_type_points_at_the_type_field() {
        let raw = "Packet 10 mystery_t";
        let line = tokenize(raw);
        let reason = InvalidReason::UnknownType("mystery_t".to_string());
        assert_eq!(reason_span(raw, &line, &reason), 10..19);
    }

    #[test]
    fn missing_offset_points_past_the_typed_text() {
        let raw = "Packet";
        let line = tokenize(raw);
        assert_eq!(
            reason_span(raw, &line, &InvalidReason::MissingOffset),
            6..6
        );
    }

    #[test]
    fn surplus_fields_span_from_first_to_last() {
        let raw = "S 0 _BYTE a b c";
        let line = tokenize(raw);
        assert_eq!(
            reason_span(raw, &line, &InvalidReason::TooManyFields),
            12..15
        );
    }

    #[test]
    fn render_survives_an_empty_line() {
        let line = tokenize("");
        let out = render_invalid("", &line, &InvalidReason::MissingStructName, false);
        assert_eq!(out, "error: missing struct name");
    }

    #[test]
    fn overlap_hint_format() {
        let members = vec![Member {
            name: "x".to_string(),
            spec: strucline_core::TypeSpec::scalar("_BYTE"),
            offset: 0x10,
            size: 4,
        }];
        assert_eq!(overlap_hint(&members), "00000010    x");
    }
}
