//! Canonical encoding of file metadata
//!
//! Layout: `{len(name)}:{name}|{size}|{len(mime)}:{mime}|{id}`.
//! Text fields carry their UTF-8 byte length, numeric fields are plain
//! decimal, so no two distinct tuples share an encoding.

use super::types::FileMetadata;

/// Build the hash input for `meta`
pub fn canonical_string(meta: &FileMetadata) -> String {
    format!(
        "{}:{}|{}|{}:{}|{}",
        meta.file_name.len(),
        meta.file_name,
        meta.file_size,
        meta.mime_type.len(),
        meta.mime_type,
        meta.file_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let meta = FileMetadata::new(42, "movie.mkv", 1000, "video/x-matroska");
        assert_eq!(
            canonical_string(&meta),
            "9:movie.mkv|1000|16:video/x-matroska|42"
        );
    }

    #[test]
    fn test_empty_fields_are_encoded() {
        let meta = FileMetadata::new(0, "", 0, "");
        assert_eq!(canonical_string(&meta), "0:|0|0:|0");
    }

    #[test]
    fn test_delimiter_in_name_does_not_collide() {
        // Shifting text between name and mime must not produce the same string
        let a = FileMetadata::new(1, "a|1|b", 1, "c");
        let b = FileMetadata::new(1, "a", 1, "b|1|c");
        assert_ne!(canonical_string(&a), canonical_string(&b));
    }

    #[test]
    fn test_length_counts_bytes() {
        let meta = FileMetadata::new(3, "é", 1, "x");
        assert!(canonical_string(&meta).starts_with("2:é|"));
    }
}
