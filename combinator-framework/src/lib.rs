//! Combinator Framework
//!
//! Small parsers composed into recursive-descent parsers for text or bytes.
//! Alternatives backtrack by restarting from a saved position, and failures
//! report the furthest point any attempt reached together with everything
//! that was expected there.
//!
//! ```
//! use combinator_framework::{literal, parse, regex};
//!
//! let number = regex("[0-9]+").unwrap().map(|s| s.parse::<i64>().unwrap());
//! let sum = number.clone().skip(literal("+")).and(number).map(|(a, b)| a + b);
//! assert_eq!(parse(&sum, "2+3"), Ok(5));
//!
//! let err = parse(&sum, "2+").unwrap_err();
//! assert_eq!(err.to_string(), "parse error at line 1 column 3: expected /[0-9]+/");
//! ```

pub mod binary;
pub mod combinators;
pub mod driver;
pub mod error;
pub mod expected;
pub mod node;
pub mod parser;
#[cfg(feature = "regex")]
pub mod pattern;
pub mod primitives;
pub mod repeat;
pub mod result;

pub use combinators::{all, choice, lazy, Sequence};
pub use common_framework::{BytePosition, Bytes, Input, Location, Position, Text};
pub use driver::{parse, try_parse, ParseFailure};
pub use error::GrammarError;
pub use expected::Expected;
pub use node::ParseNode;
pub use parser::Parser;
#[cfg(feature = "regex")]
pub use pattern::{regex, regex_with_flags};
pub use primitives::{eof, fail, literal, location, ok, EOF};
pub use repeat::Bounds;
pub use result::ParseResult;
