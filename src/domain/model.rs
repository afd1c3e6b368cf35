use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, TrackerError};

/// Normalized public account identifier.
///
/// Construction is the only place handle validation happens: surrounding
/// whitespace is trimmed and leading `@` characters are stripped. Whatever
/// remains must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle(String);

impl Handle {
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().trim_start_matches('@').trim();
        if normalized.is_empty() {
            return Err(TrackerError::ValidationError {
                message: "Please enter an account username".to_string(),
            });
        }
        Ok(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of text fragments scanned as a single string.
/// Fragment order never changes the mention count, only how plausible a
/// synthesized corpus reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCorpus {
    fragments: Vec<String>,
}

impl TextCorpus {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|f| f.trim().is_empty())
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn joined_text(&self) -> String {
        self.fragments.join(" ")
    }
}

/// Result of one content acquisition attempt. Never both content and a
/// failure; `Empty` means the retrieval worked but nothing qualified.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Content(TextCorpus),
    Empty,
    NetworkFailure(String),
}

/// The externally visible outcome of a counting request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionReport {
    pub handle: String,
    pub count: usize,
    pub message: String,
    pub estimated_items: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace_and_at_prefix() {
        assert_eq!(Handle::parse("  @testuser  ").unwrap().as_str(), "testuser");
        assert_eq!(Handle::parse("@@nested").unwrap().as_str(), "nested");
        assert_eq!(Handle::parse("plain").unwrap().as_str(), "plain");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(Handle::parse("").is_err());
        assert!(Handle::parse("   ").is_err());
        assert!(Handle::parse("@").is_err());
        assert!(Handle::parse(" @ ").is_err());
    }

    #[test]
    fn corpus_joins_fragments_with_spaces() {
        let corpus = TextCorpus::new(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(corpus.joined_text(), "one two");
        assert_eq!(corpus.fragment_count(), 2);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn corpus_of_blank_fragments_is_empty() {
        assert!(TextCorpus::default().is_empty());
        assert!(TextCorpus::new(vec!["   ".to_string()]).is_empty());
    }
}
