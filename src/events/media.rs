//! Media classification and display helpers

use crate::links::digest;

use super::types::MediaKind;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Classify a MIME type
pub fn media_kind(mime_type: &str) -> MediaKind {
    let mime = mime_type.to_lowercase();
    if mime.contains("video") {
        MediaKind::Video
    } else if mime.contains("image") {
        MediaKind::Image
    } else if mime.contains("audio") {
        MediaKind::Audio
    } else if mime.contains("pdf") {
        MediaKind::Document
    } else if mime.contains("zip") || mime.contains("rar") {
        MediaKind::Archive
    } else if mime.contains("text") {
        MediaKind::Text
    } else if mime.contains("x-msdos-program") || mime.contains("octet-stream") {
        MediaKind::Executable
    } else {
        MediaKind::Other
    }
}

/// Videos, images and `application/*` files are accepted for linking
pub fn is_supported(mime_type: &str) -> bool {
    let mime = mime_type.to_lowercase();
    mime.starts_with("video/") || mime.starts_with("image/") || mime.starts_with("application/")
}

/// Name shown for a file; nameless files get `{12 hex chars}_file`
pub fn display_name(file_id: i64, file_name: &str) -> String {
    if !file_name.is_empty() {
        return file_name.to_string();
    }
    let hash = hex::encode(digest(&file_id.to_string()));
    format!("{}_file", &hash[..12])
}

/// Human readable size with 1024-based units
pub fn format_file_size(bytes: u64) -> String {
    let bytes_f = bytes as f64;
    if bytes >= GB {
        format!("{:.2} GB", bytes_f / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes_f / MB as f64)
    } else {
        format!("{:.2} KB", bytes_f / KB as f64)
    }
}
