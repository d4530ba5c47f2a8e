//! Capability contract for generated lexer/parser bundles.
//!
//! A tool-set is the bundle a parser-generator toolchain emits for one
//! grammar: a lexer, a parser, their shared symbol vocabulary, and an
//! invocable entry rule. The bundle's concrete shape varies per language
//! version, so the core is generic over these traits rather than any
//! particular generated type.

use thiserror::Error;

use crate::grammar::GrammarError;

/// Errors that indicate a wrongly wired tool-set.
///
/// These are programmer errors surfaced at construction time, not runtime
/// conditions: the host should fail loudly instead of retrying per
/// keystroke.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("tool-set does not expose a token vocabulary")]
    MissingVocabulary,

    #[error("malformed grammar text: {0}")]
    Grammar(#[from] GrammarError),
}

/// Static symbol-table metadata exposed by a generated lexer/parser pair.
///
/// Token indices are 1-based, per the generated-vocabulary convention, and
/// consistent across the lexer and parser structures for a given grammar.
pub trait Vocabulary {
    /// Quoted literal text for a token index (e.g. `':='`), if the token
    /// has one.
    fn literal_name(&self, index: usize) -> Option<&str>;

    /// Identifier-style name for a token index (e.g. `ASSIGN`), if the
    /// token has one.
    fn symbolic_name(&self, index: usize) -> Option<&str>;

    /// Highest valid token index.
    fn max_token_index(&self) -> usize;
}

/// Receiver for syntax errors reported while the entry rule runs.
pub trait SyntaxErrorListener {
    fn syntax_error(
        &mut self,
        line: u32,
        column: u32,
        offending_text: Option<&str>,
        message: &str,
    );
}

/// The fixed capability interface every concrete grammar package implements.
pub trait Toolset {
    /// The token vocabulary, or `None` when the bundle does not meet the
    /// introspection contract (turned into a [`ConfigurationError`] by the
    /// vocabulary adapter).
    fn vocabulary(&self) -> Option<&dyn Vocabulary>;

    /// Parser rule names, index-aligned with the parser's internal rule
    /// numbering.
    fn rule_names(&self) -> &[String];

    /// Lexer rule names; their count bounds the token indices the
    /// classifier walks.
    fn lexer_rule_names(&self) -> &[String];

    /// Invoke the entry rule over `input`, reporting every syntax error to
    /// `listener`. Implementations must not panic on malformed input.
    fn parse(&self, input: &str, listener: &mut dyn SyntaxErrorListener);
}
