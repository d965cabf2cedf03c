//! Signed container byte format: `content || MARKER || signature`.

use crate::error::Error;

/// Delimiter separating document content from the raw signature bytes.
///
/// The content is assumed not to contain this sequence; splitting always
/// happens at the first occurrence.
pub const MARKER: &[u8] = b"\n%%__PADES__%%\n";

/// Append the marker and raw signature bytes to the document content.
pub fn embed(content: &[u8], signature: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + MARKER.len() + signature.len());
    out.extend_from_slice(content);
    out.extend_from_slice(MARKER);
    out.extend_from_slice(signature);
    out
}

/// Split a container into `(content, signature)` at the first marker.
///
/// # Errors
///
/// Returns [`Error::MalformedContainer`] if the marker is absent.
pub fn split(container: &[u8]) -> Result<(&[u8], &[u8]), Error> {
    let pos = find_marker(container).ok_or(Error::MalformedContainer)?;
    let content = &container[..pos];
    let signature = &container[pos + MARKER.len()..];
    Ok((content, signature))
}

fn find_marker(haystack: &[u8]) -> Option<usize> {
    if haystack.len() < MARKER.len() {
        return None;
    }
    haystack.windows(MARKER.len()).position(|w| w == MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_split_round_trip() {
        let container = embed(b"document body", b"\x01\x02\x03");
        let (content, signature) = split(&container).unwrap();
        assert_eq!(content, b"document body");
        assert_eq!(signature, b"\x01\x02\x03");
    }

    #[test]
    fn test_split_missing_marker() {
        let err = split(b"not a container").unwrap_err();
        assert!(matches!(err, Error::MalformedContainer));
    }

    #[test]
    fn test_split_at_first_marker() {
        // A second marker inside the signature bytes stays on the signature side.
        let mut signature = b"sig-prefix".to_vec();
        signature.extend_from_slice(MARKER);
        signature.extend_from_slice(b"sig-suffix");

        let container = embed(b"content", &signature);
        let (content, sig) = split(&container).unwrap();
        assert_eq!(content, b"content");
        assert_eq!(sig, signature.as_slice());
    }

    #[test]
    fn test_empty_content_and_signature() {
        let container = embed(b"", b"");
        assert_eq!(container, MARKER);
        let (content, signature) = split(&container).unwrap();
        assert!(content.is_empty());
        assert!(signature.is_empty());
    }

    #[test]
    fn test_short_input() {
        assert!(split(b"").is_err());
        assert!(split(b"\n%%").is_err());
    }
}
