//! Link issuing
//!
//! Links have the form `{base}/{message_id}/{token}`. Only the message id
//! and token vary; the resolver looks the file up by message id and uses
//! the token to reject tampered links.

use std::fmt;

use super::fingerprint::fingerprint;
use super::types::{FileMetadata, FileToken, HashLength, IssuedLink, LinkError};

// ============================================================================
// Base URL
// ============================================================================

/// Validated worker base address without trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validate and normalize a base address
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LinkError::EmptyBaseUrl);
        }

        let normalized = trimmed.trim_end_matches('/');
        let rest = normalized
            .strip_prefix("https://")
            .or_else(|| normalized.strip_prefix("http://"))
            .ok_or_else(|| LinkError::InvalidBaseUrl(raw.to_string()))?;

        let host = rest.split('/').next().unwrap_or("");
        if host.is_empty() || rest.contains(['?', '#']) || rest.contains(char::is_whitespace) {
            return Err(LinkError::InvalidBaseUrl(raw.to_string()));
        }

        Ok(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Link Issuer
// ============================================================================

/// Issues and verifies file links
#[derive(Debug, Clone)]
pub struct LinkIssuer {
    base_url: BaseUrl,
    hash_length: HashLength,
}

impl LinkIssuer {
    pub fn new(base_url: BaseUrl, hash_length: HashLength) -> Self {
        Self {
            base_url,
            hash_length,
        }
    }

    /// Token for `meta` under this issuer's hash length
    pub fn token_for(&self, meta: &FileMetadata) -> FileToken {
        fingerprint(meta, self.hash_length)
    }

    /// Issue the link for a file forwarded as `message_id`
    pub fn issue(&self, message_id: i64, meta: &FileMetadata) -> Result<IssuedLink, LinkError> {
        let token = self.token_for(meta);
        let url = self.url_for(message_id, &token)?;

        tracing::debug!(
            message_id = message_id,
            file_id = meta.file_id,
            token = %token,
            "Issued file link"
        );

        Ok(IssuedLink {
            message_id,
            token,
            url,
        })
    }

    /// Join the base address, message id and token
    pub fn url_for(&self, message_id: i64, token: &FileToken) -> Result<String, LinkError> {
        let message_segment = message_id.to_string();
        check_path_segment(&message_segment)?;
        check_path_segment(token.as_str())?;

        Ok(format!(
            "{}/{}/{}",
            self.base_url, message_segment, token
        ))
    }

    /// Whether `candidate` is the token this issuer derives for `meta`
    pub fn verify(&self, meta: &FileMetadata, candidate: &str) -> bool {
        self.token_for(meta).as_str() == candidate
    }
}

/// Path segments are joined verbatim, so they must not carry delimiters
fn check_path_segment(segment: &str) -> Result<(), LinkError> {
    let invalid = segment.is_empty()
        || segment
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%' | '\\') || c.is_whitespace() || c.is_control());

    if invalid {
        return Err(LinkError::InvalidPathSegment(segment.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> LinkIssuer {
        LinkIssuer::new(
            BaseUrl::parse("https://host.example/api/").unwrap(),
            HashLength::default(),
        )
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let base = BaseUrl::parse("https://host.example/api/").unwrap();
        assert_eq!(base.as_str(), "https://host.example/api");

        let base = BaseUrl::parse("  http://worker.dev//  ").unwrap();
        assert_eq!(base.as_str(), "http://worker.dev");
    }

    #[test]
    fn test_base_url_rejects_empty() {
        assert!(matches!(BaseUrl::parse(""), Err(LinkError::EmptyBaseUrl)));
        assert!(matches!(BaseUrl::parse("   "), Err(LinkError::EmptyBaseUrl)));
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        for raw in [
            "host.example",
            "ftp://host.example",
            "https://",
            "https:///path",
            "https://host.example/?q=1",
            "https://host.example/#frag",
            "https://host example",
        ] {
            assert!(
                matches!(BaseUrl::parse(raw), Err(LinkError::InvalidBaseUrl(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let token = FileToken::from_hex("a1b2c3".to_string());
        let url = issuer().url_for(42, &token).unwrap();

        assert_eq!(url, "https://host.example/api/42/a1b2c3");
        assert!(!url["https://".len()..].contains("//"));
    }

    #[test]
    fn test_url_for_rejects_delimiters() {
        for bad in ["a/b", "a?b", "a#b", "a b", ""] {
            let token = FileToken::from_hex(bad.to_string());
            assert!(matches!(
                issuer().url_for(1, &token),
                Err(LinkError::InvalidPathSegment(_))
            ));
        }
    }

    #[test]
    fn test_issue_embeds_only_message_id_and_token() {
        let meta = FileMetadata::new(99, "secret name.mkv", 2048, "video/x-matroska");
        let link = issuer().issue(1234, &meta).unwrap();

        assert_eq!(link.message_id, 1234);
        assert_eq!(
            link.url,
            format!("https://host.example/api/1234/{}", link.token)
        );
        assert!(!link.url.contains("secret"));
        let path = link.url.trim_start_matches("https://host.example/api/");
        assert_eq!(path.split('/').count(), 2);
    }

    #[test]
    fn test_verify() {
        let issuer = issuer();
        let meta = FileMetadata::new(7, "a.pdf", 10, "application/pdf");
        let link = issuer.issue(1, &meta).unwrap();

        assert!(issuer.verify(&meta, link.token.as_str()));

        let mut tampered = meta.clone();
        tampered.file_size = 11;
        assert!(!issuer.verify(&tampered, link.token.as_str()));
        assert!(!issuer.verify(&meta, "000000"));
    }
}
