//! Types shared by the link issuing pipeline

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Shortest token the issuer will emit
pub const MIN_HASH_LENGTH: usize = 5;

/// Longest token the issuer will emit
pub const MAX_HASH_LENGTH: usize = 32;

/// Length used when the configured value is out of range
pub const DEFAULT_HASH_LENGTH: usize = 6;

// ============================================================================
// Metadata
// ============================================================================

/// Metadata of a forwarded file, as reported by the forwarding side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Upstream file identifier (may be reused over time)
    pub file_id: i64,

    /// Display name, possibly empty
    #[serde(default)]
    pub file_name: String,

    /// Size in bytes
    pub file_size: u64,

    /// MIME type, possibly empty
    #[serde(default)]
    pub mime_type: String,
}

impl FileMetadata {
    pub fn new(
        file_id: i64,
        file_name: impl Into<String>,
        file_size: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_id,
            file_name: file_name.into(),
            file_size,
            mime_type: mime_type.into(),
        }
    }
}

// ============================================================================
// Hash Length
// ============================================================================

/// Number of hex characters kept from the digest.
///
/// Always within [`MIN_HASH_LENGTH`, `MAX_HASH_LENGTH`]. Out-of-range input
/// falls back to [`DEFAULT_HASH_LENGTH`] instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashLength(usize);

impl HashLength {
    pub fn new(requested: i64) -> Self {
        let in_range = (MIN_HASH_LENGTH as i64..=MAX_HASH_LENGTH as i64).contains(&requested);
        if in_range {
            Self(requested as usize)
        } else {
            tracing::debug!(
                requested = requested,
                effective = DEFAULT_HASH_LENGTH,
                "Hash length out of range, using default"
            );
            Self(DEFAULT_HASH_LENGTH)
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for HashLength {
    fn default() -> Self {
        Self(DEFAULT_HASH_LENGTH)
    }
}

// ============================================================================
// Token & Link
// ============================================================================

/// Short lowercase-hex token derived from [`FileMetadata`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileToken(String);

impl FileToken {
    pub(crate) fn from_hex(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A link handed back to the caller for one forwarded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedLink {
    pub message_id: i64,
    pub token: FileToken,
    pub url: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// Link issuing errors
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Worker base URL is empty")]
    EmptyBaseUrl,

    #[error("Invalid worker base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),
}
