//! Inbound event types

use serde::{Deserialize, Serialize};

use crate::links::{FileMetadata, IssuedLink};

/// A file forwarded to the log channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEvent {
    pub file_id: i64,

    #[serde(default)]
    pub file_name: String,

    pub file_size: u64,

    #[serde(default)]
    pub mime_type: String,

    /// Id of the forwarded message, assigned by the log channel
    pub message_id: i64,
}

impl FileEvent {
    pub fn metadata(&self) -> FileMetadata {
        FileMetadata {
            file_id: self.file_id,
            file_name: self.file_name.clone(),
            file_size: self.file_size,
            mime_type: self.mime_type.clone(),
        }
    }
}

/// Coarse media category derived from the MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
    Audio,
    Document,
    Archive,
    Text,
    Executable,
    Other,
}

/// Result of processing one [`FileEvent`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    pub link: IssuedLink,

    /// Name shown to the user; generated when the file has none
    pub display_name: String,

    pub media_kind: MediaKind,

    /// Human readable size, e.g. `1.50 MB`
    pub formatted_size: String,

    /// Whether the usage counters were updated
    pub stats_recorded: bool,
}
