//! Comment delimiters recognized between tokens.

use serde::Deserialize;

use crate::errors::SententialError;

/// A comment delimiter pair.
///
/// A block comment has both delimiters; a line comment has only a start and runs to the end
/// of the line (or the end of input). Delimiters are matched literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawBrackets")]
pub struct CommentBrackets {
    start: String,
    end: Option<String>,
}

impl CommentBrackets {
    pub fn block(
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, SententialError> {
        Self::new(start.into(), Some(end.into()))
    }

    pub fn line(start: impl Into<String>) -> Result<Self, SententialError> {
        Self::new(start.into(), None)
    }

    fn new(start: String, end: Option<String>) -> Result<Self, SententialError> {
        if start.is_empty() || end.as_deref().is_some_and(str::is_empty) {
            return Err(SententialError::EmptyCommentDelimiter);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn is_block_comment(&self) -> bool {
        self.end.is_some()
    }
}

#[derive(Deserialize)]
struct RawBrackets {
    start: String,
    #[serde(default)]
    end: Option<String>,
}

impl TryFrom<RawBrackets> for CommentBrackets {
    type Error = SententialError;

    fn try_from(raw: RawBrackets) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}
