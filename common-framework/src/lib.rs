//! Common Framework
//!
//! Shared building blocks for the combinator framework: positions and the
//! text/byte inputs parsers read from.

pub mod input;
pub mod position;

pub use input::{Bytes, Input, Text};
pub use position::{BytePosition, Location, Position};
