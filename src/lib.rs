//! # vtl-kit
//!
//! Grammar-driven language services for editors embedding a generated
//! lexer/parser pair: completion, syntax validation, and lexical token
//! classification.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Generated tool-set (lexer/parser bundle)          │
//! │          abstracted behind the Toolset traits            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [vocabulary adapter]
//! ┌─────────────────────────────────────────────────────────┐
//! │        VocabularyPack (normalized symbol tables)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [grammar builder, cached]
//! ┌─────────────────────────────────────────────────────────┐
//! │       GrammarGraph (rules / alternatives / symbols)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [per cursor-context request]
//! ┌─────────────────────────────────────────────────────────┐
//! │   SuggestionsProvider (scraped ids + variables + walk)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation (`validate`) and token classification (`monarch`) hang off
//! the same tool-set contract but do not touch the suggestion path.
//!
//! Everything is synchronous and pure: the grammar graph is immutable
//! after construction, completion requests are idempotent, and the only
//! shared state is the optional [`cache::GraphCache`].

pub mod cache;
pub mod grammar;
pub mod monarch;
pub mod registry;
pub mod suggest;
pub mod tools;
pub mod toolset;
pub mod validate;
pub mod vocabulary;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::cache::GraphCache;
    pub use crate::grammar::{GrammarError, GrammarGraph};
    pub use crate::monarch::{derive_categories, MonarchCategories};
    pub use crate::registry::ProviderRegistry;
    pub use crate::suggest::{
        scrape_identifiers, SuggestionItem, SuggestionKind, SuggestionsProvider,
        VariableDescriptor, VariableRole, VariableType, WordSpan,
    };
    pub use crate::tools::{SuggestionPolicy, Tools};
    pub use crate::toolset::{ConfigurationError, SyntaxErrorListener, Toolset, Vocabulary};
    pub use crate::validate::{validate, SyntaxIssue};
    pub use crate::vocabulary::VocabularyPack;
}

// Also export the everyday types at the crate root.
pub use cache::GraphCache;
pub use grammar::{GrammarError, GrammarGraph};
pub use suggest::{SuggestionItem, SuggestionKind, SuggestionsProvider, WordSpan};
pub use tools::{SuggestionPolicy, Tools};
pub use toolset::{ConfigurationError, Toolset};
pub use validate::{validate, SyntaxIssue};
pub use vocabulary::VocabularyPack;
