//! Shared-indentation stripping for multiline string literals.
//!
//! The whitespace prefix of the line holding the closing `"""` sets the
//! baseline: every content line must start with that exact prefix, which
//! is then removed. Blank lines pass regardless of their (lack of)
//! indentation. A non-blank line that does not start with the prefix
//! records an [`InsufficientIndentation`] error and recovers by stripping
//! whatever prefix it does share.
//!
//! [`InsufficientIndentation`]: crate::LexErrorKind::InsufficientIndentation

use crate::{LexError, Span};

/// A dedented slice of literal content, with its absolute source offset
/// so escape errors inside it can point at real source bytes.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Piece<'a> {
    pub text: &'a str,
    pub offset: u32,
}

/// Split `content` into lines and strip `prefix` from each.
///
/// `base` is the source offset of `content`. When `first_at_line_start`
/// is false the first line is left alone: a `StringMiddle`/`StringTail`
/// fragment resumes mid-line after an interpolation, so only the lines
/// after its first newline are subject to the indentation rule.
pub(crate) fn dedent_lines<'a>(
    content: &'a str,
    base: u32,
    prefix: &str,
    first_at_line_start: bool,
    errors: &mut Vec<LexError>,
) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut line_off = 0usize;
    let mut first = true;
    for line in content.split_inclusive('\n') {
        let at_line_start = !first || first_at_line_start;
        first = false;
        if !at_line_start || prefix.is_empty() {
            pieces.push(Piece {
                text: line,
                offset: abs(base, line_off),
            });
            line_off += line.len();
            continue;
        }

        let body = line.trim_end_matches(['\n', '\r']);
        if let Some(stripped) = line.strip_prefix(prefix) {
            pieces.push(Piece {
                text: stripped,
                offset: abs(base, line_off + prefix.len()),
            });
        } else if body.bytes().all(|b| b == b' ' || b == b'\t') {
            // Blank line: keep the line break, drop the partial indent.
            pieces.push(Piece {
                text: &line[body.len()..],
                offset: abs(base, line_off + body.len()),
            });
        } else {
            let ws_len = body.len() - body.trim_start_matches([' ', '\t']).len();
            errors.push(LexError::insufficient_indentation(Span::new(
                abs(base, line_off),
                abs(base, line_off + ws_len),
            )));
            let shared = line
                .bytes()
                .zip(prefix.bytes())
                .take_while(|(a, b)| a == b)
                .count();
            pieces.push(Piece {
                text: &line[shared..],
                offset: abs(base, line_off + shared),
            });
        }
        line_off += line.len();
    }
    pieces
}

fn abs(base: u32, offset: usize) -> u32 {
    base + u32::try_from(offset).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexErrorKind;
    use pretty_assertions::assert_eq;

    fn dedent(content: &str, prefix: &str) -> (String, Vec<LexError>) {
        let mut errors = Vec::new();
        let pieces = dedent_lines(content, 0, prefix, true, &mut errors);
        let joined = pieces.iter().map(|p| p.text).collect();
        (joined, errors)
    }

    #[test]
    fn strips_shared_prefix() {
        let (out, errors) = dedent("  hi\n  there\n", "  ");
        assert_eq!(out, "hi\nthere\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_prefix_is_identity() {
        let (out, errors) = dedent("a\n  b\n", "");
        assert_eq!(out, "a\n  b\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_lines_pass_with_less_indentation() {
        let (out, errors) = dedent("    a\n\n \n    b\n", "    ");
        assert_eq!(out, "a\n\n\nb\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn short_line_reports_error_and_recovers() {
        let (out, errors) = dedent("    a\n  b\n", "    ");
        assert_eq!(out, "a\nb\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexErrorKind::InsufficientIndentation);
        // Second line starts at offset 6, with two spaces of indent.
        assert_eq!(errors[0].span, Span::new(6, 8));
    }

    #[test]
    fn tab_space_mismatch_is_an_error() {
        let (_, errors) = dedent("\tx\n", "  ");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn mid_line_fragment_keeps_first_piece() {
        let mut errors = Vec::new();
        let pieces = dedent_lines(" tail\n  end", 50, "  ", false, &mut errors);
        assert_eq!(pieces[0].text, " tail\n");
        assert_eq!(pieces[0].offset, 50);
        assert_eq!(pieces[1].text, "end");
        assert_eq!(pieces[1].offset, 58);
        assert!(errors.is_empty());
    }

    #[test]
    fn offsets_follow_stripping() {
        let mut errors = Vec::new();
        let pieces = dedent_lines("  a\n  b", 10, "  ", true, &mut errors);
        assert_eq!(pieces[0].offset, 12);
        assert_eq!(pieces[1].offset, 16);
    }
}
