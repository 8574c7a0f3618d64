//! Element-wise conversion of numeric string tokens into 64-bit integers
//!
//! The pure [`convert`] operation over an in-memory token array, plus a
//! [`Converter`] that feeds it from raw text through the lexer.

use numcast_array::{IntegerArray, ParseError, Position, SourceMap, StringNumericArray};
use numcast_lexer::{Lexer, SpannedToken, Token};
use std::num::IntErrorKind;

/// Convert an ordered token sequence into an integer sequence
///
/// All-or-nothing: the result has the same length and order as `input`,
/// element `i` being the parsed value of token `i`, or the whole call fails
/// on the first offending token. The input is not consumed or mutated.
///
/// # Errors
///
/// Returns `ParseError` if any token is not a base-10 integer literal or
/// does not fit in an `i64`
pub fn convert(input: &StringNumericArray) -> Result<IntegerArray, ParseError> {
    let mut values = Vec::with_capacity(input.len());
    for (index, token) in input.iter().enumerate() {
        values.push(parse_token(token, index)?);
    }
    Ok(IntegerArray::from_values(values))
}

/// Parse a single token, classifying the failure cause
///
/// Range overflow is reported separately from a malformed literal; the
/// literal grammar is `i64`'s own (optional leading sign, digits only).
fn parse_token(token: &str, index: usize) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::out_of_range(token, index)
        }
        _ => ParseError::malformed(token, index),
    })
}

/// Text-input front end for [`convert`]
///
/// Tokenizes raw text (whitespace, comma, and newline separated), rejects
/// anything that is not an integer literal with file/line/column context,
/// and holds the resulting token array for conversion.
pub struct Converter {
    input: String,
    source_map: SourceMap,
    filename: String,
    tokens: Vec<SpannedToken>,
    array: StringNumericArray,
}

impl Converter {
    /// Create a converter for the given input text
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if there are lexical errors in the input
    pub fn new(input: &str) -> Result<Self, ParseError> {
        Self::new_with_filename(input, "<input>")
    }

    /// Create a converter for the given input text with a filename
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if there are lexical errors in the input
    pub fn new_with_filename(input: &str, filename: &str) -> Result<Self, ParseError> {
        let source_map = SourceMap::new(input);

        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();

        // Check for lexer errors
        for token in &tokens {
            if token.token == Token::Error {
                return Err(ParseError::unexpected_input(
                    token.text.clone(),
                    token.span,
                    &source_map,
                    filename,
                ));
            }
        }

        // Separators delimit tokens and are otherwise ignored
        let array = StringNumericArray::from_tokens(
            tokens
                .iter()
                .filter(|token| token.token == Token::Integer)
                .map(|token| token.text.clone()),
        );

        Ok(Self {
            input: input.to_string(),
            source_map,
            filename: filename.to_string(),
            tokens,
            array,
        })
    }

    /// Convert the lexed tokens into an integer array
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if any token is outside the signed 64-bit range
    pub fn convert(&self) -> Result<IntegerArray, ParseError> {
        convert(&self.array)
    }

    /// Get the token array lexed from the input
    #[must_use]
    pub const fn array(&self) -> &StringNumericArray {
        &self.array
    }

    /// Line/column position of the token at `index`, if it exists
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<Position> {
        self.tokens
            .iter()
            .filter(|token| token.token == Token::Integer)
            .nth(index)
            .map(|token| self.source_map.position(token.span.start))
    }

    /// Get access to the source map for error reporting
    #[must_use]
    pub const fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Get access to the filename
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get access to the original input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get access to the tokens (useful for debugging)
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }
}
