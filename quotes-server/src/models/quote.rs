//! Quote records
//!
//! The wire name of the quote body is `quote`; in Rust it is `text` so that
//! `quote.text` reads naturally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationError};

/// Identifier of a stored quote. Matches the `INTEGER` primary key.
pub type QuoteId = i32;

/// A stored quote. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a new quote.
///
/// Missing fields decode as empty strings so that they are rejected by
/// validation rather than by the JSON decoder. Any `id` or `created_at` in
/// the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "quote")]
    pub text: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Check that both author and text are non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("author", &self.author)?;
        require_non_empty("quote", &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn quote_serializes_text_as_quote() {
        let quote = Quote {
            id: 1,
            author: "Confucius".into(),
            text: "Life is simple".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["author"], "Confucius");
        assert_eq!(value["quote"], "Life is simple");
        assert_eq!(value["created_at"], "2024-05-01T12:00:00Z");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn new_quote_ignores_client_ids() {
        let parsed: NewQuote =
            serde_json::from_str(r#"{"id": 42, "author": "Plato", "quote": "Know thyself"}"#)
                .unwrap();
        assert_eq!(parsed, NewQuote::new("Plato", "Know thyself"));
    }

    #[test]
    fn missing_fields_fail_validation_not_decoding() {
        let parsed: NewQuote = serde_json::from_str("{}").unwrap();
        assert_eq!(
            parsed.validate(),
            Err(ValidationError::Empty { field: "author" })
        );

        let parsed: NewQuote = serde_json::from_str(r#"{"author": "Plato"}"#).unwrap();
        assert_eq!(
            parsed.validate(),
            Err(ValidationError::Empty { field: "quote" })
        );
    }
}
