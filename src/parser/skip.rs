//! Whitespace and comment skipping between tokens.

use crate::grammar::CommentBrackets;

/// A block comment opened at `opened_at` was never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnterminatedComment {
    pub opened_at: usize,
}

/// Skips whitespace and comments from `pos`, returning the offset of the next significant
/// character (or the end of input).
///
/// Comment delimiters are tried in declaration order. An unterminated block comment stops the
/// scan at its opener.
pub(crate) fn skip_insignificant(
    source: &str,
    mut pos: usize,
    comments: &[CommentBrackets],
) -> Result<usize, UnterminatedComment> {
    loop {
        pos = skip_whitespace(source, pos);
        let rest = &source[pos..];

        let Some(comment) = comments.iter().find(|c| rest.starts_with(c.start())) else {
            return Ok(pos);
        };
        let body = pos + comment.start().len();

        pos = match comment.end() {
            Some(end) => match source[body..].find(end) {
                Some(offset) => body + offset + end.len(),
                None => return Err(UnterminatedComment { opened_at: pos }),
            },
            None => source[body..]
                .find('\n')
                .map_or(source.len(), |offset| body + offset + 1),
        };
    }
}

fn skip_whitespace(source: &str, pos: usize) -> usize {
    source[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(source.len(), |offset| pos + offset)
}
