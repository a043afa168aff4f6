//! SHA-256 fingerprints of file metadata

use sha2::{Digest, Sha256};

use super::canonical::canonical_string;
use super::types::{FileMetadata, FileToken, HashLength};

/// SHA-256 of a canonical string
pub fn digest(canonical: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hasher.finalize().into()
}

/// Derive the short token for `meta`.
///
/// The first `length` characters of the lowercase hex digest. A SHA-256 hex
/// string has 64 characters, so any valid [`HashLength`] fits.
pub fn fingerprint(meta: &FileMetadata, length: HashLength) -> FileToken {
    let mut full = hex::encode(digest(&canonical_string(meta)));
    full.truncate(length.get());
    FileToken::from_hex(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileMetadata {
        FileMetadata::new(5_001_234, "holiday.mp4", 73_400_320, "video/mp4")
    }

    #[test]
    fn test_digest_known_value() {
        // SHA-256("abc")
        assert_eq!(
            hex::encode(digest("abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic() {
        let length = HashLength::default();
        let first = fingerprint(&sample(), length);
        for _ in 0..10 {
            assert_eq!(fingerprint(&sample(), length), first);
        }
    }

    #[test]
    fn test_matches_manual_derivation() {
        let meta = sample();
        let expected = hex::encode(digest(&canonical_string(&meta)));
        let token = fingerprint(&meta, HashLength::new(32));
        assert_eq!(token.as_str(), &expected[..32]);
    }

    #[test]
    fn test_every_field_changes_token() {
        let length = HashLength::new(16);
        let base = fingerprint(&sample(), length);

        let mut renamed = sample();
        renamed.file_name = "holiday.mp5".to_string();
        let mut resized = sample();
        resized.file_size += 1;
        let mut retyped = sample();
        retyped.mime_type = "video/webm".to_string();
        let mut reidentified = sample();
        reidentified.file_id += 1;

        for changed in [renamed, resized, retyped, reidentified] {
            assert_ne!(fingerprint(&changed, length), base);
        }
    }

    #[test]
    fn test_token_length_and_alphabet() {
        for requested in [1, 5, 6, 20, 32, 33] {
            let length = HashLength::new(requested);
            let token = fingerprint(&sample(), length);
            assert_eq!(token.as_str().len(), length.get());
            assert!(token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_empty_metadata_is_valid() {
        let token = fingerprint(&FileMetadata::new(0, "", 0, ""), HashLength::default());
        assert_eq!(token.as_str().len(), 6);
    }
}
