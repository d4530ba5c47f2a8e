//! Suggestion engine.
//!
//! Merges three candidate sources into one deduplicated completion list:
//! identifier-like tokens scraped from the document, externally supplied
//! variable descriptors, and grammar-driven candidates (either the host's
//! custom range-aware function or the generic grammar walk).
//!
//! Every request is a pure function of its inputs plus the immutable
//! grammar graph; nothing here mutates shared state, and providing
//! suggestions never fails regardless of document content.

pub mod variables;

pub use variables::{VariableDescriptor, VariableRole, VariableType};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::GraphCache;
use crate::grammar::GrammarGraph;
use crate::toolset::{ConfigurationError, Toolset};
use crate::tools::{SuggestionPolicy, Tools};
use crate::vocabulary::VocabularyPack;

/// Quoted string literals, stripped before scraping so string contents are
/// never offered as identifiers.
static STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*""#).expect("string literal regex"));

/// Any run of characters that cannot be part of an identifier.
static NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z_]+").expect("identifier split regex"));

/// Category tag the host editor uses for icon/styling. Not used for
/// ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Keyword,
    Operator,
    Variable,
    Snippet,
}

/// The span of document text a candidate replaces. Line and columns follow
/// the editor convention (1-based line, columns bounding the current
/// word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WordSpan {
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

/// One completion entry. Created fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionItem {
    pub label: String,
    pub insert_text: String,
    pub kind: SuggestionKind,
    /// Replacement span; `None` means pure insertion at the cursor.
    pub span: Option<WordSpan>,
}

/// Extract the distinct identifier-like tokens from document text.
///
/// String literal contents are stripped first; the rest is split on
/// non-identifier runs. Order of first appearance is preserved.
pub fn scrape_identifiers(text: &str) -> Vec<String> {
    let without_strings = STRING_LITERAL.replace_all(text, " ");
    let mut seen = HashSet::new();
    NON_IDENTIFIER
        .split(&without_strings)
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.to_string()))
        .map(str::to_string)
        .collect()
}

/// Completion entry point for one tool-set and one variable list.
///
/// Construction builds (or fetches from the shared cache) the grammar
/// graph and checks the vocabulary contract, so a wrongly wired tool-set
/// fails here, once, instead of on every keystroke. [`provide`] itself is
/// infallible.
///
/// [`provide`]: SuggestionsProvider::provide
pub struct SuggestionsProvider<'a, T: Toolset> {
    tools: &'a Tools<T>,
    vocabulary: VocabularyPack<'a>,
    graph: Arc<GrammarGraph>,
    variables: Vec<VariableDescriptor>,
}

impl<'a, T: Toolset> SuggestionsProvider<'a, T> {
    pub fn new(
        tools: &'a Tools<T>,
        variables: Vec<VariableDescriptor>,
        cache: &GraphCache,
    ) -> Result<Self, ConfigurationError> {
        let vocabulary = VocabularyPack::new(&tools.toolset)?;
        let graph = cache.get_or_build(&tools.grammar)?;
        Ok(Self {
            tools,
            vocabulary,
            graph,
            variables,
        })
    }

    /// Compute the merged suggestion list for the current cursor context.
    ///
    /// `text_before_cursor` is the document text up to the cursor; `word`
    /// is the span of the partial word under it. Output order: scraped
    /// identifiers, external variables, grammar-driven candidates, each
    /// group keeping its internal order.
    pub fn provide(&self, text_before_cursor: &str, word: WordSpan) -> Vec<SuggestionItem> {
        let grammar_side = self.grammar_side(&word);

        let grammar_labels: HashSet<String> = grammar_side
            .iter()
            .map(|item| item.label.to_lowercase())
            .collect();

        // Grammar keywords must not double as "recently typed identifier"
        // suggestions, compared case-insensitively.
        let scraped = scrape_identifiers(text_before_cursor)
            .into_iter()
            .filter(|token| !grammar_labels.contains(&token.to_lowercase()))
            .map(|token| SuggestionItem {
                label: token.clone(),
                insert_text: token,
                kind: SuggestionKind::Variable,
                span: None,
            });

        // External variables are always included, never deduplicated
        // against scraped text.
        let externals = self.variables.iter().map(|variable| SuggestionItem {
            label: variable.label.clone(),
            insert_text: variable.name.clone(),
            kind: SuggestionKind::Variable,
            span: Some(word),
        });

        scraped.chain(externals).chain(grammar_side).collect()
    }

    /// Grammar-driven candidates, honoring the custom-function policy.
    fn grammar_side(&self, word: &WordSpan) -> Vec<SuggestionItem> {
        let custom = self
            .tools
            .custom_suggestions
            .as_ref()
            .map(|provider| provider(word))
            .unwrap_or_default();

        match self.tools.policy {
            // Fallback chain: a non-empty custom result wins entirely.
            SuggestionPolicy::PreferCustom if !custom.is_empty() => custom,
            SuggestionPolicy::PreferCustom => self.graph.suggestions(&self.vocabulary),
            SuggestionPolicy::Merge => {
                let mut merged = custom;
                let mut labels: HashSet<String> =
                    merged.iter().map(|item| item.label.clone()).collect();
                for item in self.graph.suggestions(&self.vocabulary) {
                    if labels.insert(item.label.clone()) {
                        merged.push(item);
                    }
                }
                merged
            }
        }
    }
}
