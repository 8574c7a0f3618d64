//! Shared data model for numcast
//!
//! Array types, the error taxonomy, and source-location plumbing used for
//! error reporting on textual input.

/// Byte range of a token in textual input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte offsets to line/column positions
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }
}

/// Ordered, immutable sequence of numeric string tokens
///
/// Each token is expected to denote a base-10 integer literal with an
/// optional leading sign. The sequence is fixed once constructed; no
/// mutation API is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringNumericArray {
    tokens: Vec<String>,
}

impl StringNumericArray {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Demonstration fixture: the tokens `["1", "2", "3"]`
    ///
    /// Allocates a fresh instance per call; there is no process-wide
    /// shared sample.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_tokens(["1", "2", "3"])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }
}

/// Ordered sequence of signed 64-bit integers
///
/// Produced by conversion; same length and order as the source token
/// sequence, owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerArray {
    values: Vec<i64>,
}

impl IntegerArray {
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

/// Conversion failure, all-or-nothing: the first offending token wins
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("ERR_MALFORMED: token {token:?} at index {index} is not a base-10 integer literal")]
    Malformed { token: String, index: usize },

    #[error("ERR_RANGE: token {token:?} at index {index} is outside the signed 64-bit range")]
    OutOfRange { token: String, index: usize },

    #[error("numcast:{filename}:{line}:{column}: ERR_INPUT: unexpected input {text:?}")]
    UnexpectedInput {
        text: String,
        filename: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    #[must_use]
    pub fn malformed(token: &str, index: usize) -> Self {
        Self::Malformed {
            token: token.to_string(),
            index,
        }
    }

    #[must_use]
    pub fn out_of_range(token: &str, index: usize) -> Self {
        Self::OutOfRange {
            token: token.to_string(),
            index,
        }
    }

    #[must_use]
    pub fn unexpected_input(text: String, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::UnexpectedInput {
            text,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    /// Index of the offending token, when the failure names one
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Malformed { index, .. } | Self::OutOfRange { index, .. } => Some(*index),
            Self::UnexpectedInput { .. } => None,
        }
    }

    /// Text of the offending token
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Malformed { token, .. } | Self::OutOfRange { token, .. } => Some(token),
            Self::UnexpectedInput { .. } => None,
        }
    }
}
