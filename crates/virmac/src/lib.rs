//! Hardware (MAC) address value type for virtual network interfaces
//!
//! This library provides the 6-byte address value, its strict textual
//! parser and canonical formatter, a loose textual comparator used when
//! matching addresses written by other tools, and generation of addresses
//! from a caller-supplied prefix.

pub mod error;
pub mod mac;
pub mod prefix;
pub mod text;

pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use mac::MacAddress;
pub use prefix::MacPrefix;
pub use text::compare_text;
