//! Human-readable error rendering
//!
//! Renders a [`ParseError`] against the source it came from:
//!
//! ```text
//! error: Expected an operator, found value `2`
//!   | 1 2
//!   |   ^
//! ```

use crate::error::ParseError;
use crate::token::Span;

/// Characters of context kept on each side of the marked token.
const CONTEXT_CHARS: usize = 32;

/// Render `error` with the offending source line and a caret marker.
///
/// Errors without a span point just past the end of the source. Long lines
/// are cut to a window around the span, with `...` marking the cuts.
pub fn render(error: &ParseError, source: &str) -> String {
    let span = error
        .span()
        .unwrap_or_else(|| Span::new(source.len(), source.len()));

    let line_start = source[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[span.start..]
        .find('\n')
        .map_or(source.len(), |i| span.start + i);
    let marked_end = span.end.min(line_end);

    let (before, cut_before) = keep_tail(&source[line_start..span.start], CONTEXT_CHARS);
    let (marked, cut_marked) = keep_head(&source[span.start..marked_end], CONTEXT_CHARS);
    let (after, cut_after) = if cut_marked {
        ("", true)
    } else {
        keep_head(&source[marked_end..line_end], CONTEXT_CHARS)
    };

    let prefix = if cut_before { "..." } else { "" };
    let suffix = if cut_after { "..." } else { "" };
    let indent = prefix.len() + before.chars().count();
    let width = marked.chars().count().max(1);

    format!(
        "error: {}\n  | {}{}{}{}{}\n  | {}{}",
        error,
        prefix,
        before,
        marked,
        after,
        suffix,
        " ".repeat(indent),
        "^".repeat(width)
    )
}

/// Last `n` characters of `s`, and whether anything was cut.
fn keep_tail(s: &str, n: usize) -> (&str, bool) {
    match s.char_indices().rev().nth(n) {
        Some((i, c)) => (&s[i + c.len_utf8()..], true),
        None => (s, false),
    }
}

/// First `n` characters of `s`, and whether anything was cut.
fn keep_head(s: &str, n: usize) -> (&str, bool) {
    match s.char_indices().nth(n) {
        Some((i, _)) => (&s[..i], true),
        None => (s, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::interpret;

    fn rendered(source: &str) -> String {
        render(&interpret(source).unwrap_err(), source)
    }

    #[test]
    fn test_render_points_at_token() {
        assert_eq!(
            rendered("1 2"),
            "error: Expected an operator, found value `2`\n  | 1 2\n  |   ^"
        );
    }

    #[test]
    fn test_render_wide_token() {
        assert_eq!(
            rendered("10 + abc"),
            "error: Malformed token: `abc` is neither an integer nor a known operator\n  | 10 + abc\n  |      ^^^"
        );
    }

    #[test]
    fn test_render_end_of_input() {
        assert_eq!(
            rendered("1 +"),
            "error: Expected a value after `+`, found end of input\n  | 1 +\n  |    ^"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(rendered(""), "error: Empty expression\n  | \n  | ^");
    }

    #[test]
    fn test_render_long_line_is_windowed() {
        let source = format!("{}1 2{}", "1 + ".repeat(1000), " + 1".repeat(1000));
        let out = rendered(&source);
        let mut lines = out.lines();

        assert_eq!(lines.next(), Some("error: Expected an operator, found value `2`"));
        let echoed = lines.next().unwrap();
        let carets = lines.next().unwrap();
        assert!(echoed.len() < 100);
        assert!(echoed.starts_with("  | ..."));
        assert!(echoed.ends_with("..."));
        assert_eq!(&echoed[carets.find('^').unwrap()..][..1], "2");
    }

    #[test]
    fn test_render_long_token_is_cut() {
        let source = format!("1 + {}", "x".repeat(500));
        let out = rendered(&source);
        let carets = out.lines().nth(2).unwrap();
        assert_eq!(carets.matches('^').count(), CONTEXT_CHARS);
        assert!(out.lines().nth(1).unwrap().ends_with("x..."));
    }

    #[test]
    fn test_render_multiline_source() {
        assert_eq!(
            rendered("1 +\n2 3"),
            "error: Expected an operator, found value `3`\n  | 2 3\n  |   ^"
        );
    }
}
