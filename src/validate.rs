//! Syntax validation over the generated parser's error hook.
//!
//! Runs the tool-set's entry rule and downgrades every parse failure into
//! a positioned issue the host renders as an inline marker. Validation
//! never raises for any document content: an empty list means the input
//! conforms to the grammar.

use serde::Serialize;

use crate::toolset::{SyntaxErrorListener, Toolset};

/// One positioned syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxIssue {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub message: String,
}

/// Collects listener callbacks into [`SyntaxIssue`]s.
#[derive(Debug, Default)]
struct CollectingListener {
    issues: Vec<SyntaxIssue>,
}

impl SyntaxErrorListener for CollectingListener {
    fn syntax_error(
        &mut self,
        line: u32,
        column: u32,
        offending_text: Option<&str>,
        message: &str,
    ) {
        // The issue spans the offending token when its text is known,
        // otherwise a single column.
        let end_column = match offending_text {
            Some(text) if !text.is_empty() => column + text.chars().count() as u32,
            _ => column + 1,
        };
        self.issues.push(SyntaxIssue {
            start_line: line,
            start_column: column,
            end_line: line,
            end_column,
            message: message.to_string(),
        });
    }
}

/// Parse `input` with the tool-set's entry rule and return every syntax
/// error found, in report order.
pub fn validate<T: Toolset>(toolset: &T, input: &str) -> Vec<SyntaxIssue> {
    let mut listener = CollectingListener::default();
    toolset.parse(input, &mut listener);
    listener.issues
}
