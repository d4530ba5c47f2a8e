//! Idempotent language/theme registration bookkeeping.
//!
//! The host widget errors on double registration of a language or theme
//! id, so registration must happen at most once per id. Rather than
//! ambient global state, a single registry instance owns the
//! already-registered sets with an explicit reset lifecycle.

use std::collections::HashSet;

/// Tracks which language and theme ids have been registered.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    languages: HashSet<String>,
    themes: HashSet<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a language id. Returns `true` when the id was not yet
    /// registered and the caller should perform the actual registration.
    pub fn register_language(&mut self, id: &str) -> bool {
        self.languages.insert(id.to_string())
    }

    /// Record a theme id. Same contract as [`register_language`].
    ///
    /// [`register_language`]: ProviderRegistry::register_language
    pub fn register_theme(&mut self, id: &str) -> bool {
        self.themes.insert(id.to_string())
    }

    pub fn is_language_registered(&self, id: &str) -> bool {
        self.languages.contains(id)
    }

    pub fn is_theme_registered(&self, id: &str) -> bool {
        self.themes.contains(id)
    }

    /// Forget everything, e.g. when the host widget is disposed.
    pub fn reset(&mut self) {
        self.languages.clear();
        self.themes.clear();
    }
}
