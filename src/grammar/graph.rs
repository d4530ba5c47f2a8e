//! Rule/alternative graph and the "valid next token" walk.

use std::collections::{HashMap, HashSet};

use crate::suggest::{SuggestionItem, SuggestionKind};
use crate::vocabulary::{VocabularyPack, KEYWORD_SHAPE};

use super::scanner::RuleDefinition;

/// One element of an alternative's expected sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// Quoted terminal, quotes stripped (`'and'` → `and`).
    Literal(String),
    /// ALL-CAPS reference to a lexer token (`ASSIGN`).
    TokenRef(String),
    /// Lower/mixed-case reference to another rule (`expr`).
    RuleRef(String),
    /// Parenthesized alternation; each branch is its own symbol sequence.
    Group(Vec<Vec<Symbol>>),
}

/// A choice branch within a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub symbols: Vec<Symbol>,
}

/// A grammar production with its alternatives in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    pub alternatives: Vec<Alternative>,
}

/// Immutable graph of grammar rules.
///
/// Built once per grammar string and never mutated afterwards; the start
/// rule is the first declared rule. Unreachable rules may exist (dead
/// grammar) but never produce suggestions.
#[derive(Debug, Clone)]
pub struct GrammarGraph {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl GrammarGraph {
    pub(crate) fn from_definitions(definitions: Vec<RuleDefinition>) -> Self {
        let rules: Vec<Rule> = definitions
            .into_iter()
            .map(|def| Rule {
                name: def.name,
                alternatives: def
                    .alternatives
                    .into_iter()
                    .map(|symbols| Alternative { symbols })
                    .collect(),
            })
            .collect();

        // First declaration wins on duplicate names, matching declaration
        // order everywhere else.
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            index.entry(rule.name.clone()).or_insert(position);
        }

        Self { rules, index }
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look a rule up by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&position| &self.rules[position])
    }

    /// The designated start rule: the first declared rule, if any.
    pub fn start_rule(&self) -> Option<&Rule> {
        self.rules.first()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every terminal reachable as the next token from the start rule.
    ///
    /// Walks each alternative's first symbol, recursing through rule
    /// references with a per-walk visited set so indirectly left-recursive
    /// grammars terminate. Candidates are deduplicated by label
    /// (case-sensitive) and kept in declaration order: rule order, then
    /// alternative order, then branch order.
    pub fn suggestions(&self, vocabulary: &VocabularyPack<'_>) -> Vec<SuggestionItem> {
        let mut items = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        if let Some(start) = self.start_rule() {
            let mut visited: HashSet<&str> = HashSet::new();
            visited.insert(start.name.as_str());
            self.collect_first(start, vocabulary, &mut visited, &mut seen, &mut items);
        }

        items
    }

    /// Collect first-token candidates of `rule` into `items`.
    fn collect_first<'g>(
        &'g self,
        rule: &'g Rule,
        vocabulary: &VocabularyPack<'_>,
        visited: &mut HashSet<&'g str>,
        seen: &mut HashSet<String>,
        items: &mut Vec<SuggestionItem>,
    ) {
        for alternative in &rule.alternatives {
            if let Some(symbol) = alternative.symbols.first() {
                self.collect_symbol(symbol, vocabulary, visited, seen, items);
            }
        }
    }

    fn collect_symbol<'g>(
        &'g self,
        symbol: &'g Symbol,
        vocabulary: &VocabularyPack<'_>,
        visited: &mut HashSet<&'g str>,
        seen: &mut HashSet<String>,
        items: &mut Vec<SuggestionItem>,
    ) {
        match symbol {
            Symbol::Literal(text) => push_terminal(text, seen, items),
            Symbol::TokenRef(name) => {
                // A token declared in the same grammar carries its literal
                // in its own rule body; otherwise fall back to the
                // vocabulary. Abstract tokens resolve to neither and are
                // skipped: a symbolic name is not valid insert text.
                if let Some(rule) = self.rule(name) {
                    if visited.insert(rule.name.as_str()) {
                        self.collect_first(rule, vocabulary, visited, seen, items);
                    }
                } else if let Some(text) = vocabulary.literal_for_symbol(name) {
                    push_terminal(&text, seen, items);
                }
            }
            Symbol::RuleRef(name) => {
                // Unresolved references are dead ends, skipped silently.
                if let Some(rule) = self.rule(name) {
                    if visited.insert(rule.name.as_str()) {
                        self.collect_first(rule, vocabulary, visited, seen, items);
                    }
                }
            }
            Symbol::Group(branches) => {
                for branch in branches {
                    if let Some(first) = branch.first() {
                        self.collect_symbol(first, vocabulary, visited, seen, items);
                    }
                }
            }
        }
    }
}

fn push_terminal(text: &str, seen: &mut HashSet<String>, items: &mut Vec<SuggestionItem>) {
    if text.is_empty() || !seen.insert(text.to_string()) {
        return;
    }
    let kind = if KEYWORD_SHAPE.is_match(text) {
        SuggestionKind::Keyword
    } else {
        SuggestionKind::Operator
    };
    items.push(SuggestionItem {
        label: text.to_string(),
        insert_text: text.to_string(),
        kind,
        span: None,
    });
}
