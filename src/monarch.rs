//! Lexical token categories for syntax highlighting.
//!
//! Derives the token-category lists the editor's tokenizer consumes from
//! the lexer's vocabulary: identifier-shaped literals become keywords,
//! symbolic-named literals become specials, the rest operators. The
//! classifier is inert with respect to suggestions; it only feeds color
//! rules.

use serde::{Deserialize, Serialize};

use crate::toolset::{ConfigurationError, Toolset};
use crate::vocabulary::{VocabularyPack, KEYWORD_SHAPE};

/// Token-category lists in the shape the editor tokenizer consumes.
///
/// Hosts may pre-populate any of the lists; derived tokens are appended,
/// never replacing what the host supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonarchCategories {
    pub keywords: Vec<String>,
    pub operators: Vec<String>,
    pub specials: Vec<String>,
    pub variables: Vec<String>,
    pub attributes: Vec<String>,
    pub dimensions: Vec<String>,
    pub primary_measures: Vec<String>,
}

/// Classify every literal token of the lexer vocabulary into `base`.
///
/// Walks the 1-based token indices up to the lexer rule count; tokens
/// without a literal name (abstract tokens) contribute nothing.
pub fn derive_categories<T: Toolset>(
    toolset: &T,
    base: MonarchCategories,
) -> Result<MonarchCategories, ConfigurationError> {
    let pack = VocabularyPack::new(toolset)?;
    let mut categories = base;

    for index in 1..=toolset.lexer_rule_names().len() {
        let Some(text) = pack.literal_text(index) else {
            continue;
        };
        if KEYWORD_SHAPE.is_match(&text) {
            categories.keywords.push(text);
        } else if pack.symbolic_name(index).is_some() {
            categories.specials.push(text);
        } else {
            categories.operators.push(text);
        }
    }

    Ok(categories)
}
