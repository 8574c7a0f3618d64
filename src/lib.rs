//! Numcast - numeric string token arrays to 64-bit integer arrays
//!
//! Facade crate re-exporting the public surface of the workspace members.
//!
//! ```
//! use numcast::{convert, StringNumericArray};
//!
//! let values = convert(&StringNumericArray::sample()).unwrap();
//! assert_eq!(values.as_slice(), &[1, 2, 3]);
//! ```

pub use numcast_array::{
    IntegerArray, ParseError, Position, SourceMap, Span, StringNumericArray,
};
pub use numcast_convert::{Converter, convert};
pub use numcast_lexer::{Lexer, SpannedToken, Token};
