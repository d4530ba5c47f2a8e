//! Normalized view over a tool-set's symbol tables.
//!
//! The generated vocabulary stores literal names still wrapped in quotes
//! and leaves gaps for tokens without a literal or symbolic form. The pack
//! normalizes that into the lookups the grammar walk and the token
//! classifier need, and fails fast when the tool-set does not expose a
//! vocabulary at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::toolset::{ConfigurationError, Toolset, Vocabulary};

/// Matches identifier-shaped token text (keywords, as opposed to symbolic
/// operators).
pub static KEYWORD_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_]+$").expect("keyword shape regex"));

/// Read-only metadata view over one tool-set.
pub struct VocabularyPack<'a> {
    vocabulary: &'a dyn Vocabulary,
    rule_names: &'a [String],
}

impl<'a> VocabularyPack<'a> {
    /// Build the pack, failing with [`ConfigurationError::MissingVocabulary`]
    /// when the tool-set does not expose vocabulary introspection.
    pub fn new(toolset: &'a dyn Toolset) -> Result<Self, ConfigurationError> {
        let vocabulary = toolset
            .vocabulary()
            .ok_or(ConfigurationError::MissingVocabulary)?;
        Ok(Self {
            vocabulary,
            rule_names: toolset.rule_names(),
        })
    }

    /// Raw literal name for a token index, still quoted (e.g. `':='`).
    pub fn literal_name(&self, index: usize) -> Option<&str> {
        self.vocabulary.literal_name(index)
    }

    /// Literal text for a token index with the surrounding quotes stripped.
    pub fn literal_text(&self, index: usize) -> Option<String> {
        self.vocabulary
            .literal_name(index)
            .map(|name| name.trim_matches('\'').to_string())
    }

    /// Symbolic name for a token index (e.g. `ASSIGN`).
    pub fn symbolic_name(&self, index: usize) -> Option<&str> {
        self.vocabulary.symbolic_name(index)
    }

    /// Parser rule names in declaration order.
    pub fn rule_names(&self) -> &[String] {
        self.rule_names
    }

    /// Highest valid token index.
    pub fn max_token_index(&self) -> usize {
        self.vocabulary.max_token_index()
    }

    /// Reverse lookup: token index for a symbolic name. Indices are
    /// 1-based.
    pub fn index_of_symbol(&self, name: &str) -> Option<usize> {
        (1..=self.vocabulary.max_token_index())
            .find(|&index| self.vocabulary.symbolic_name(index) == Some(name))
    }

    /// Literal text for an ALL-CAPS token name, when the vocabulary maps
    /// that symbol to a fixed literal. Abstract tokens (identifiers,
    /// numbers) have no literal and yield `None`.
    pub fn literal_for_symbol(&self, name: &str) -> Option<String> {
        self.index_of_symbol(name)
            .and_then(|index| self.literal_text(index))
    }
}
