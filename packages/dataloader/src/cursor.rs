//! Opaque pagination cursors
//!
//! A cursor names the node a page ends on plus, for nested lists, the parent
//! the list hangs off. The wire token is URL-safe base64 (no padding) over a
//! small JSON object. Clients must treat it as opaque.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pagination::Scope;

/// Upper bound on accepted token length, checked before decoding
pub const MAX_CURSOR_TOKEN_LEN: usize = 4096;

/// Decoded position in a paginated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cursor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
}

impl Cursor {
    /// Cursor into a top-level list
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            parent_type: None,
        }
    }

    /// Cursor into the list identified by `scope`
    pub fn scoped(id: impl Into<String>, scope: &Scope) -> Self {
        Self {
            id: id.into(),
            parent_id: scope.parent_id.clone(),
            parent_type: scope.parent_type.clone(),
        }
    }

    /// The list this cursor was minted for
    pub fn scope(&self) -> Scope {
        Scope {
            parent_id: self.parent_id.clone(),
            parent_type: self.parent_type.clone(),
        }
    }

    /// Serialize to an opaque token; equal cursors always yield equal tokens
    pub fn encode(&self) -> String {
        // Serializing a struct of strings cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Parse a token produced by [`Cursor::encode`]
    pub fn decode(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::invalid_cursor("cursor is empty"));
        }
        if token.len() > MAX_CURSOR_TOKEN_LEN {
            return Err(Error::invalid_cursor(format!(
                "cursor exceeds {MAX_CURSOR_TOKEN_LEN} characters"
            )));
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| Error::invalid_cursor(format!("malformed encoding: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::invalid_cursor(format!("malformed structure: {e}")))
    }
}

/// Encode a cursor for `id`, optionally scoped to a parent list
pub fn encode_cursor(id: &str, parent_id: Option<&str>, parent_type: Option<&str>) -> String {
    Cursor {
        id: id.to_string(),
        parent_id: parent_id.map(str::to_string),
        parent_type: parent_type.map(str::to_string),
    }
    .encode()
}

/// Decode a cursor token, failing with [`Error::InvalidCursor`]
pub fn decode_cursor(token: &str) -> Result<Cursor> {
    Cursor::decode(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[test]
    fn test_roundtrip_scoped() {
        let token = encode_cursor("book-5", Some("author-2"), Some("Author"));
        let cursor = decode_cursor(&token).unwrap();
        assert_eq!(cursor.id, "book-5");
        assert_eq!(cursor.parent_id.as_deref(), Some("author-2"));
        assert_eq!(cursor.parent_type.as_deref(), Some("Author"));
    }

    #[test]
    fn test_roundtrip_keeps_empty_parent() {
        let token = encode_cursor("a", Some(""), None);
        assert_eq!(decode_cursor(&token).unwrap().parent_id.as_deref(), Some(""));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(
            encode_cursor("item-1", Some("p"), Some("T")),
            encode_cursor("item-1", Some("p"), Some("T"))
        );
        assert_ne!(encode_cursor("item-1", None, None), encode_cursor("item-1", Some("p"), None));
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode_cursor("??>>??~~", Some("//++"), None);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_unscoped_wire_format_omits_parent() {
        let bytes = URL_SAFE_NO_PAD.decode(encode_cursor("x", None, None)).unwrap();
        assert_eq!(bytes, br#"{"id":"x"}"#);
    }

    #[rstest]
    #[case::empty("")]
    #[case::not_base64("!!not base64!!")]
    #[case::not_json("bm90IGpzb24")]
    #[case::missing_id("eyJwYXJlbnRJZCI6ImEifQ")]
    #[case::unknown_field("eyJpZCI6ImEiLCJvZmZzZXQiOjR9")]
    #[case::wrong_type("eyJpZCI6NX0")]
    fn test_decode_rejects_malformed(#[case] token: &str) {
        assert_matches!(decode_cursor(token), Err(Error::InvalidCursor(_)));
    }

    #[test]
    fn test_decode_rejects_oversized_token() {
        let token = "A".repeat(MAX_CURSOR_TOKEN_LEN + 1);
        assert_matches!(decode_cursor(&token), Err(Error::InvalidCursor(msg)) if msg.contains("exceeds"));
    }

    #[test]
    fn test_scope_roundtrip() {
        let scope = Scope::nested("author-1", "Author");
        let cursor = Cursor::scoped("book-1", &scope);
        assert_eq!(Cursor::decode(&cursor.encode()).unwrap().scope(), scope);
        assert_eq!(Cursor::new("book-1").scope(), Scope::root());
    }
}
