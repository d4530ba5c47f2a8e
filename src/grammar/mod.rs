//! Grammar graph builder.
//!
//! Parses the generator-toolchain grammar text (`rule : alt | alt ;`) into
//! an immutable graph of rules and alternatives, and answers the question
//! the suggestion engine cares about: which terminals are syntactically
//! valid as the next token from the start rule.
//!
//! The grammar string is a trusted host asset. Scanning is therefore
//! lenient about dead rules and unresolved references, and strict only
//! about balance: an unbalanced group or unterminated literal fails the
//! build, never yielding a half-built graph.
//!
//! # Example
//!
//! ```ignore
//! let graph = grammar::build("start : 'a' | 'b' ;")?;
//! let items = graph.suggestions(&vocabulary_pack);
//! assert_eq!(items[0].label, "a");
//! ```

pub mod graph;
mod scanner;

pub use graph::{Alternative, GrammarGraph, Rule, Symbol};

use thiserror::Error;

/// Errors raised while building the grammar graph.
///
/// These indicate malformed grammar text, which is a configuration error
/// on the host's side, not a user-input condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("unbalanced group in rule `{rule}`")]
    UnbalancedGroup { rule: String },

    #[error("unterminated literal in rule `{rule}`")]
    UnterminatedLiteral { rule: String },
}

/// Build the grammar graph for a grammar string.
///
/// Empty text builds an empty graph (and later an empty suggestion list),
/// not an error.
pub fn build(source: &str) -> Result<GrammarGraph, GrammarError> {
    let definitions = scanner::scan(source)?;
    Ok(GrammarGraph::from_definitions(definitions))
}
