//! Textual handling of grouped-hex addresses
//!
//! Two unrelated views of the same text live here:
//!
//! * [`compare_text`] is a permissive character-stream comparator. It has no
//!   notion of groups or group count and never rejects input, so two strings
//!   may compare equal even when one of them is not a well-formed address.
//! * [`parse_groups`] is the strict grammar used by the parsers of
//!   [`MacAddress`](crate::MacAddress) and [`MacPrefix`](crate::MacPrefix).
//!
//! The two are not interchangeable: equality under `compare_text` says
//! nothing about whether either side parses.

use crate::error::ParseErrorKind;
use std::cmp::Ordering;

/// Compare two address strings, ignoring case and redundant leading zeros.
///
/// Both strings are walked in lock-step. Before each step a `'0'` is skipped
/// as long as the next character is also a hex digit, so `"0A"`, `"00a"` and
/// `"A"` all read the same. The result is the ordering of the first pair of
/// case-folded characters that differ, or `Equal` when both strings end at
/// the same time.
///
/// The zero skipping is not aware of group boundaries: it applies anywhere
/// in a hex run, which makes `"100"` and `"10"` compare equal.
///
/// ```
/// use std::cmp::Ordering;
/// use virmac::compare_text;
///
/// assert_eq!(compare_text("0:1E:FC:E:3a:CB", "00:1e:fc:0e:3A:cb"), Ordering::Equal);
/// assert_eq!(compare_text("52:54:00:00:00:01", "52:54:00:00:00:02"), Ordering::Less);
/// ```
pub fn compare_text(p: &str, q: &str) -> Ordering {
    let (p, q) = (p.as_bytes(), q.as_bytes());
    let (mut i, mut j) = (0, 0);

    loop {
        i = skip_leading_zeros(p, i);
        j = skip_leading_zeros(q, j);

        let c = byte_at(p, i).to_ascii_lowercase();
        let d = byte_at(q, j).to_ascii_lowercase();

        if c == 0 || d == 0 || c != d {
            return c.cmp(&d);
        }

        i += 1;
        j += 1;
    }
}

/// Past the end of the slice reads as a NUL terminator
fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

fn skip_leading_zeros(s: &[u8], mut i: usize) -> usize {
    while byte_at(s, i) == b'0' && byte_at(s, i + 1).is_ascii_hexdigit() {
        i += 1;
    }
    i
}

/// Parse exactly `N` colon-separated groups of one or two hex digits.
///
/// Each group is the longest run of hex digits at the current position. A
/// run of three or more digits is rejected, which also rules out any value
/// above `0xFF`. Nothing may follow the last group.
pub(crate) fn parse_groups<const N: usize>(s: &str) -> Result<[u8; N], ParseErrorKind> {
    let bytes = s.as_bytes();
    let mut octets = [0u8; N];
    let mut pos = 0;

    for (group, octet) in octets.iter_mut().enumerate() {
        if group > 0 {
            match bytes.get(pos) {
                Some(b':') => pos += 1,
                Some(_) => return Err(ParseErrorKind::MissingSeparator { group: group - 1 }),
                None => return Err(ParseErrorKind::TooFewGroups { found: group }),
            }
        }

        match bytes.get(pos) {
            None => return Err(ParseErrorKind::TooFewGroups { found: group }),
            Some(b) if !b.is_ascii_hexdigit() => {
                return Err(ParseErrorKind::InvalidDigit { group })
            }
            Some(_) => {}
        }

        let len = bytes[pos..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        *octet = parse_hex_run(&s[pos..pos + len], group)?;
        pos += len;
    }

    if pos != bytes.len() {
        return Err(ParseErrorKind::TrailingData);
    }

    Ok(octets)
}

fn parse_hex_run(run: &str, group: usize) -> Result<u8, ParseErrorKind> {
    let len = run.len();
    if !(1..=2).contains(&len) {
        return Err(ParseErrorKind::GroupLength { group, len });
    }
    u8::from_str_radix(run, 16).map_err(|_| ParseErrorKind::GroupLength { group, len })
}
