//! Store-assigned contact identifier.
//!
//! Identifiers follow the document-store object id layout: 12 bytes rendered
//! as 24 hex characters.
//!
//! | bytes  | content                                   |
//! |--------|-------------------------------------------|
//! | 0..4   | seconds since the Unix epoch, big-endian  |
//! | 4..9   | per-process random value                  |
//! | 9..12  | wrapping counter, big-endian              |

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

use time::OffsetDateTime;

/// Number of raw bytes in an identifier.
pub const CONTACT_ID_LEN: usize = 12;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random::<[u8; 5]>);
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));

/// Error returned when a string is not a valid 24-digit hex identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid contact id '{input}': expected {expected} hex characters")]
pub struct InvalidContactId {
    pub input: String,
    pub expected: usize,
}

/// Opaque, immutable identifier of a stored contact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId([u8; CONTACT_ID_LEN]);

impl ContactId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        let secs = OffsetDateTime::now_utc().unix_timestamp();
        let secs = u32::try_from(secs).unwrap_or_default();
        let count = COUNTER.fetch_add(1, Ordering::SeqCst) & COUNTER_MASK;
        Self::from_parts(secs, *PROCESS_UNIQUE, count)
    }

    fn from_parts(secs: u32, process: [u8; 5], count: u32) -> Self {
        let mut bytes = [0u8; CONTACT_ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&process);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Build an identifier from its raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; CONTACT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse an identifier from its hex representation (either case).
    ///
    /// # Errors
    /// Returns [`InvalidContactId`] unless `s` is exactly 24 hex digits.
    pub fn parse_hex(s: &str) -> Result<Self, InvalidContactId> {
        let invalid = || InvalidContactId {
            input: s.to_owned(),
            expected: CONTACT_ID_LEN * 2,
        };
        if s.len() != CONTACT_ID_LEN * 2 {
            return Err(invalid());
        }
        let mut bytes = [0u8; CONTACT_ID_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }

    /// Lowercase hex representation.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Seconds since the Unix epoch encoded in the identifier prefix.
    #[must_use]
    pub fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl FromStr for ContactId {
    type Err = InvalidContactId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactId({})", self.to_hex())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<ContactId> = (0..10_000).map(|_| ContactId::generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn hex_is_24_lowercase_chars() {
        let id = ContactId::generate();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(id.to_string(), hex);
    }

    #[test]
    fn parse_accepts_either_case() {
        let lower: ContactId = "65a1b2c3d4e5f60718293a4b".parse().unwrap();
        let upper: ContactId = "65A1B2C3D4E5F60718293A4B".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper.to_hex(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn parse_rejects_wrong_length_and_non_hex() {
        for bad in [
            "",
            "abc",
            "65a1b2c3d4e5f60718293a4",
            "65a1b2c3d4e5f60718293a4bb",
            "zza1b2c3d4e5f60718293a4b",
        ] {
            let err = ContactId::parse_hex(bad).unwrap_err();
            assert_eq!(err.input, bad);
            assert_eq!(err.expected, 24);
        }
    }

    #[test]
    fn layout_places_timestamp_and_counter() {
        let id = ContactId::from_parts(0x0102_0304, [9, 9, 9, 9, 9], 0x00AA_BBCC);
        assert_eq!(id.to_hex(), "010203040909090909aabbcc");
        assert_eq!(id.timestamp_secs(), 0x0102_0304);
    }

    #[test]
    fn timestamp_prefix_tracks_current_time() {
        let before = OffsetDateTime::now_utc().unix_timestamp();
        let id = ContactId::generate();
        let after = OffsetDateTime::now_utc().unix_timestamp();
        let ts = i64::from(id.timestamp_secs());
        assert!(ts >= before && ts <= after);
    }
}
