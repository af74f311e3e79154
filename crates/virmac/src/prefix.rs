use crate::error::ParseError;
use crate::text::parse_groups;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of an address prefix in bytes
pub const PREFIX_LEN: usize = 3;

/// High-order three octets used when generating an address.
///
/// The value is opaque: no multicast or locally-administered bit conventions
/// are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacPrefix([u8; PREFIX_LEN]);

impl MacPrefix {
    /// 52:54:00, conventionally used for QEMU/KVM guest interfaces
    pub const QEMU: MacPrefix = MacPrefix([0x52, 0x54, 0x00]);

    pub const fn new(bytes: [u8; PREFIX_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; PREFIX_LEN] {
        &self.0
    }

    /// Parse a prefix such as `"52:54:00"` (three groups of 1-2 hex digits)
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_groups::<PREFIX_LEN>(s)
            .map(Self)
            .map_err(|kind| ParseError::new(s, kind))
    }
}

impl Default for MacPrefix {
    fn default() -> Self {
        Self::QEMU
    }
}

impl fmt::Display for MacPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}:{:02X}:{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for MacPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MacPrefix {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MacPrefix> for String {
    fn from(prefix: MacPrefix) -> String {
        prefix.to_string()
    }
}

impl From<[u8; PREFIX_LEN]> for MacPrefix {
    fn from(bytes: [u8; PREFIX_LEN]) -> Self {
        Self(bytes)
    }
}
