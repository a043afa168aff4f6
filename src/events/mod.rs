//! Inbound file events
//!
//! The forwarding side reports each forwarded file as a [`FileEvent`]; the
//! processor turns it into a link and a usage record.

pub mod media;
pub mod processor;
pub mod types;

pub use media::{display_name, format_file_size, is_supported, media_kind};
pub use processor::FileEventProcessor;
pub use types::*;
