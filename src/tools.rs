//! Per-language tool bundle.
//!
//! The host constructs one `Tools` value per grammar package: the language
//! id, the grammar text, the generated tool-set, and the optional hooks
//! (custom range-aware suggestions, base token categories). Everything the
//! other modules consume flows through this bundle.

use crate::monarch::MonarchCategories;
use crate::suggest::{SuggestionItem, WordSpan};
use crate::toolset::Toolset;

/// Host-supplied range-aware suggestion function.
pub type CustomSuggestions = Box<dyn Fn(&WordSpan) -> Vec<SuggestionItem> + Send + Sync>;

/// How custom suggestions interact with the grammar walk.
///
/// The traced behavior of the original component is full override when the
/// custom function returns anything; that stays the default, with
/// [`Merge`] available pending product confirmation.
///
/// [`Merge`]: SuggestionPolicy::Merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionPolicy {
    /// A non-empty custom result replaces the grammar walk entirely.
    #[default]
    PreferCustom,
    /// Custom results first, then grammar-walk results not already present
    /// by label.
    Merge,
}

/// Everything the language services need for one tool-set.
pub struct Tools<T: Toolset> {
    /// Language id, used by the registry to keep registration idempotent.
    pub id: String,
    /// Grammar text for this tool-set; also the graph-cache key.
    pub grammar: String,
    pub toolset: T,
    pub custom_suggestions: Option<CustomSuggestions>,
    pub policy: SuggestionPolicy,
    /// Host-provided partial token categories the classifier merges into.
    pub monarch_base: Option<MonarchCategories>,
}

impl<T: Toolset> Tools<T> {
    pub fn new(id: impl Into<String>, grammar: impl Into<String>, toolset: T) -> Self {
        Self {
            id: id.into(),
            grammar: grammar.into(),
            toolset,
            custom_suggestions: None,
            policy: SuggestionPolicy::default(),
            monarch_base: None,
        }
    }

    pub fn with_custom_suggestions(mut self, provider: CustomSuggestions) -> Self {
        self.custom_suggestions = Some(provider);
        self
    }

    pub fn with_policy(mut self, policy: SuggestionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_monarch_base(mut self, base: MonarchCategories) -> Self {
        self.monarch_base = Some(base);
        self
    }
}
