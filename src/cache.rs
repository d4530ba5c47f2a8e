//! Shared grammar-graph cache.
//!
//! The grammar is static per tool-set, so rebuilding the graph on every
//! completion request is wasted work. The cache is keyed by the exact
//! grammar-text value (not tool-set identity): two tool-sets with the same
//! grammar share a graph, and a changed grammar string is simply a new
//! key. Graphs are built fully before being published, and are read-only
//! afterwards, so concurrent completion requests share entries without
//! locking.

use std::sync::Arc;

use dashmap::DashMap;

use crate::grammar::{self, GrammarGraph};

/// Cache of built grammar graphs keyed by grammar text.
#[derive(Debug, Default)]
pub struct GraphCache {
    graphs: DashMap<String, Arc<GrammarGraph>>,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the graph for `grammar_text`, building it on first use.
    pub fn get_or_build(
        &self,
        grammar_text: &str,
    ) -> Result<Arc<GrammarGraph>, grammar::GrammarError> {
        if let Some(graph) = self.graphs.get(grammar_text) {
            return Ok(Arc::clone(&graph));
        }
        // Construct fully before publishing; a failed build caches
        // nothing, so a misconfigured grammar keeps failing loudly.
        let graph = Arc::new(grammar::build(grammar_text)?);
        self.graphs
            .insert(grammar_text.to_string(), Arc::clone(&graph));
        Ok(graph)
    }

    /// Drop the cached graph for one grammar string.
    pub fn invalidate(&self, grammar_text: &str) {
        self.graphs.remove(grammar_text);
    }

    pub fn clear(&self) {
        self.graphs.clear();
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
