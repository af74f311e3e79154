use crate::error::{Error, ParseError};
use crate::prefix::MacPrefix;
use crate::text::parse_groups;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Length of the raw binary form
pub const MAC_LEN: usize = 6;

/// MAC address representation
///
/// Ordering and equality are byte-exact over the six octets, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; MAC_LEN]);

impl MacAddress {
    /// Length of the canonical text form (`XX:XX:XX:XX:XX:XX`)
    pub const STRING_LEN: usize = 17;

    /// 00:00:00:00:00:00
    pub const ZERO: MacAddress = MacAddress([0; MAC_LEN]);

    /// FF:FF:FF:FF:FF:FF
    pub const BROADCAST: MacAddress = MacAddress([0xFF; MAC_LEN]);

    /// Create a new MAC address from a byte array
    pub const fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    /// Create a MAC address from a slice of exactly 6 bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; MAC_LEN] = slice.try_into().map_err(|_| Error::InvalidLength {
            expected: MAC_LEN,
            actual: slice.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying byte array
    pub const fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }

    /// Overwrite all six octets with those of `src`
    pub fn set(&mut self, src: &MacAddress) {
        *self = *src;
    }

    /// Overwrite all six octets from a raw buffer
    pub fn set_raw(&mut self, bytes: [u8; MAC_LEN]) {
        self.0 = bytes;
    }

    /// Copy the six octets into a raw buffer
    pub fn get_raw(&self, dst: &mut [u8; MAC_LEN]) {
        *dst = self.0;
    }

    /// Byte-exact lexicographic comparison
    pub fn compare_binary(&self, other: &MacAddress) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Byte-exact comparison against a raw buffer
    pub fn compare_raw(&self, raw: &[u8; MAC_LEN]) -> Ordering {
        self.0.cmp(raw)
    }

    /// Parse a MAC address from its grouped-hex form.
    ///
    /// Six groups of one or two hex digits in either case, separated by
    /// `':'`, e.g. `"0:1E:FC:E:3a:CB"`. Leading or trailing characters of any
    /// kind are rejected.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match parse_groups::<MAC_LEN>(s) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(kind) => {
                debug!("Rejected MAC address {:?}: {}", s, kind);
                Err(ParseError::new(s, kind))
            }
        }
    }

    /// Generate an address from `prefix` and three random octets drawn from `rng`
    pub fn generate<R: Rng + ?Sized>(prefix: MacPrefix, rng: &mut R) -> Self {
        let [a, b, c] = *prefix.as_bytes();
        let mac = Self([a, b, c, rng.gen(), rng.gen(), rng.gen()]);
        trace!("Generated MAC address {} from prefix {}", mac, prefix);
        mac
    }

    /// Generate an address from `prefix` using the thread-local RNG
    pub fn generate_random(prefix: MacPrefix) -> Self {
        Self::generate(prefix, &mut rand::thread_rng())
    }

    /// The first three octets, treated as an opaque prefix
    pub const fn prefix(&self) -> MacPrefix {
        MacPrefix::new([self.0[0], self.0[1], self.0[2]])
    }

    /// The low order bit of the first octet is the multicast bit
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    pub const fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }
}

impl fmt::Display for MacAddress {
    /// Canonical form: XX:XX:XX:XX:XX:XX
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> String {
        mac.to_string()
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl From<[u8; MAC_LEN]> for MacAddress {
    fn from(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<MacAddress> for [u8; MAC_LEN] {
    fn from(mac: MacAddress) -> [u8; MAC_LEN] {
        mac.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use rand::rngs::mock::StepRng;
    use rand::RngCore;

    /// Produces the same byte forever
    struct FixedRng(u8);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            u32::from_ne_bytes([self.0; 4])
        }

        fn next_u64(&mut self) -> u64 {
            u64::from_ne_bytes([self.0; 8])
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_mac_from_bytes() {
        let mac = MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(mac.as_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_mac_from_slice() {
        let slice = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
        let mac = MacAddress::from_slice(&slice).unwrap();
        assert_eq!(mac.as_bytes(), &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    }

    #[test]
    fn test_mac_from_slice_wrong_length() {
        assert_eq!(
            MacAddress::from_slice(&[0x11, 0x22, 0x33]),
            Err(Error::InvalidLength {
                expected: 6,
                actual: 3
            })
        );
        let long = [0u8; 8];
        assert_eq!(
            MacAddress::try_from(&long[..]),
            Err(Error::InvalidLength {
                expected: 6,
                actual: 8
            })
        );
    }

    #[test]
    fn test_mac_set() {
        let src = MacAddress::new([1, 2, 3, 4, 5, 6]);
        let mut dst = MacAddress::ZERO;
        dst.set(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_mac_raw_accessors() {
        let mut mac = MacAddress::ZERO;
        mac.set_raw([0x52, 0x54, 0x00, 0xAB, 0xCD, 0xEF]);

        let mut raw = [0u8; 6];
        mac.get_raw(&mut raw);
        assert_eq!(raw, [0x52, 0x54, 0x00, 0xAB, 0xCD, 0xEF]);
        assert_eq!(<[u8; 6]>::from(mac), raw);
    }

    #[test]
    fn test_mac_compare_binary() {
        let low = MacAddress::new([0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        let mid = MacAddress::new([0x01, 0x00, 0x00, 0x00, 0x00, 0x00]);
        let high = MacAddress::new([0x01, 0x00, 0x00, 0x00, 0x00, 0x01]);

        assert_eq!(low.compare_binary(&low), Ordering::Equal);
        assert_eq!(low.compare_binary(&mid), Ordering::Less);
        assert_eq!(mid.compare_binary(&low), Ordering::Greater);
        assert_eq!(mid.compare_binary(&high), Ordering::Less);
        assert_eq!(low.compare_binary(&high), Ordering::Less);
        assert!(low < mid && mid < high);
    }

    #[test]
    fn test_mac_compare_raw() {
        let mac = MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(
            mac.compare_raw(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]),
            Ordering::Equal
        );
        assert_eq!(
            mac.compare_raw(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0x00]),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mac_to_string() {
        let mac = MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(mac.to_string(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_mac_to_string_zero_padded() {
        let mac = MacAddress::new([0x00, 0x1E, 0xFC, 0x0E, 0x3A, 0xCB]);
        let text = mac.to_string();
        assert_eq!(text, "00:1E:FC:0E:3A:CB");
        assert_eq!(text.len(), MacAddress::STRING_LEN);
    }

    #[test]
    fn test_mac_from_string() {
        let mac = MacAddress::parse("AA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(mac.as_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_mac_from_string_lowercase() {
        let mac: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(mac.as_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_mac_from_string_short_groups() {
        let mac = MacAddress::parse("0:1E:FC:E:3a:CB").unwrap();
        assert_eq!(mac.as_bytes(), &[0x00, 0x1E, 0xFC, 0x0E, 0x3A, 0xCB]);
        assert_eq!(mac.to_string(), "00:1E:FC:0E:3A:CB");
    }

    #[test]
    fn test_mac_from_string_invalid() {
        assert!(MacAddress::parse("1:2:3:4:5").is_err());
        assert!(MacAddress::parse("1:2:3:4:5:6:7").is_err());
        assert!(MacAddress::parse("GG:00:00:00:00:00").is_err());
        assert!(MacAddress::parse("100:00:00:00:00:00").is_err());
        assert!(MacAddress::parse("AABBCCDDEEFF").is_err());
        assert!(MacAddress::parse("").is_err());
    }

    #[test]
    fn test_mac_parse_error_keeps_input() {
        let err = MacAddress::parse("1:2:3:4:5").unwrap_err();
        assert_eq!(err.input(), "1:2:3:4:5");
        assert_eq!(err.kind(), ParseErrorKind::TooFewGroups { found: 5 });
    }

    #[test]
    fn test_mac_format_parse_round_trip() {
        let samples = [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            [0x52, 0x54, 0x00, 0x0A, 0xB0, 0x01],
        ];
        for bytes in samples {
            let mac = MacAddress::new(bytes);
            assert_eq!(MacAddress::parse(&mac.to_string()), Ok(mac));
        }
    }

    #[test]
    fn test_mac_multicast() {
        assert!(MacAddress::new([0x01, 0, 0, 0, 0, 0]).is_multicast());
        assert!(!MacAddress::new([0x02, 0, 0, 0, 0, 0]).is_multicast());
        assert!(MacAddress::BROADCAST.is_multicast());
        assert!(MacAddress::ZERO.is_unicast());
    }

    #[test]
    fn test_mac_unicast_is_complement_of_multicast() {
        for first in 0..=u8::MAX {
            let mac = MacAddress::new([first, 0, 0, 0, 0, 0]);
            assert_eq!(mac.is_unicast(), !mac.is_multicast());
            assert_eq!(mac.is_multicast(), first & 1 == 1);
        }
    }

    #[test]
    fn test_mac_generate_keeps_prefix() {
        let prefix = MacPrefix::new([0x52, 0x54, 0x00]);
        for byte in [0x00, 0x7F, 0xFF] {
            let mac = MacAddress::generate(prefix, &mut FixedRng(byte));
            assert_eq!(mac.as_bytes(), &[0x52, 0x54, 0x00, byte, byte, byte]);
        }
    }

    #[test]
    fn test_mac_generate_draws_three_bytes() {
        let mut rng = StepRng::new(1, 1);
        let mac = MacAddress::generate(MacPrefix::QEMU, &mut rng);
        assert_eq!(mac.to_string(), "52:54:00:01:02:03");
    }

    #[test]
    fn test_mac_generate_random() {
        let prefix = MacPrefix::new([0x02, 0x00, 0x00]);
        let mac = MacAddress::generate_random(prefix);
        assert_eq!(mac.prefix(), prefix);
    }

    #[test]
    fn test_mac_prefix() {
        let mac = MacAddress::new([0x52, 0x54, 0x00, 0x12, 0x34, 0x56]);
        assert_eq!(mac.prefix(), MacPrefix::QEMU);
    }

    #[test]
    fn test_mac_serde() {
        let mac = MacAddress::new([0x52, 0x54, 0x00, 0x12, 0x34, 0x56]);
        let yaml = serde_yaml::to_string(&mac).unwrap();
        assert!(yaml.contains("52:54:00:12:34:56"));
        assert_eq!(serde_yaml::from_str::<MacAddress>(&yaml).unwrap(), mac);

        let parsed: MacAddress = serde_yaml::from_str("\"52:54:0:12:34:56\"").unwrap();
        assert_eq!(parsed, mac);

        assert!(serde_yaml::from_str::<MacAddress>("\"52:54:00\"").is_err());
    }
}
