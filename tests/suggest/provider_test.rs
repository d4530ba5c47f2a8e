//! Integration tests for the merged suggestion pipeline.

#[path = "../fixtures/toolset.rs"]
mod fixture;

use fixture::AssignmentToolset;
use vtl_kit::monarch::{self, MonarchCategories};
use vtl_kit::prelude::*;

const KEYWORD_GRAMMAR: &str = "start : 'AND' expr | 'OR' expr | ':=' expr ;";

fn word() -> WordSpan {
    WordSpan {
        line: 1,
        start_column: 4,
        end_column: 7,
    }
}

fn keyword_tools() -> Tools<AssignmentToolset> {
    Tools::new("vtl", KEYWORD_GRAMMAR, AssignmentToolset::new())
}

fn variable(name: &str, label: &str) -> VariableDescriptor {
    VariableDescriptor {
        name: name.to_string(),
        label: label.to_string(),
        var_type: VariableType::Integer,
        role: VariableRole::Measure,
    }
}

#[test]
fn test_merged_order_scraped_then_variables_then_grammar() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, vec![variable("age", "age")], &cache).unwrap();

    let items = provider.provide("ds := foo", word());
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["ds", "foo", "age", "AND", "OR", ":="]);
}

#[test]
fn test_scraped_identifiers_are_deduplicated() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, Vec::new(), &cache).unwrap();

    let items = provider.provide("foo foo bar", word());
    let scraped: Vec<&str> = items
        .iter()
        .filter(|item| item.kind == SuggestionKind::Variable)
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(scraped, vec!["foo", "bar"]);
}

#[test]
fn test_grammar_keywords_filter_scraped_text_case_insensitively() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, Vec::new(), &cache).unwrap();

    // `and` matches the grammar keyword `AND` and must not double as a
    // recently-typed identifier.
    let items = provider.provide("x and y", word());
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["x", "y", "AND", "OR", ":="]);
}

#[test]
fn test_external_variables_always_present_exactly_once() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider =
        SuggestionsProvider::new(&tools, vec![variable("age", "age")], &cache).unwrap();

    // The document already mentions `age`; the descriptor still appears,
    // and the scraped occurrence is a separate candidate by design.
    let items = provider.provide("age := 1", word());
    let externals: Vec<_> = items
        .iter()
        .filter(|item| item.span == Some(word()))
        .collect();
    assert_eq!(externals.len(), 1);
    assert_eq!(externals[0].label, "age");
    assert_eq!(externals[0].insert_text, "age");
}

#[test]
fn test_variable_insert_text_uses_name_not_label() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(
        &tools,
        vec![variable("obs_value", "Observation value")],
        &cache,
    )
    .unwrap();

    let items = provider.provide("", word());
    let external = items
        .iter()
        .find(|item| item.label == "Observation value")
        .unwrap();
    assert_eq!(external.insert_text, "obs_value");
}

#[test]
fn test_custom_suggestions_override_grammar_walk() {
    let custom: Vec<SuggestionItem> = vec![SuggestionItem {
        label: "between".to_string(),
        insert_text: "between".to_string(),
        kind: SuggestionKind::Snippet,
        span: None,
    }];
    let tools = keyword_tools()
        .with_custom_suggestions(Box::new(move |_range| custom.clone()));
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, Vec::new(), &cache).unwrap();

    let items = provider.provide("", word());
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["between"]);
}

#[test]
fn test_empty_custom_result_falls_back_to_grammar_walk() {
    let tools = keyword_tools().with_custom_suggestions(Box::new(|_range| Vec::new()));
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, Vec::new(), &cache).unwrap();

    let items = provider.provide("", word());
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["AND", "OR", ":="]);
}

#[test]
fn test_merge_policy_appends_grammar_walk() {
    let tools = keyword_tools()
        .with_custom_suggestions(Box::new(|_range| {
            vec![SuggestionItem {
                label: "AND".to_string(),
                insert_text: "AND".to_string(),
                kind: SuggestionKind::Keyword,
                span: None,
            }]
        }))
        .with_policy(SuggestionPolicy::Merge);
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, Vec::new(), &cache).unwrap();

    let items = provider.provide("", word());
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    // Custom first, then the walk minus the duplicate label.
    assert_eq!(labels, vec!["AND", "OR", ":="]);
}

#[test]
fn test_identical_requests_yield_identical_output() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, vec![variable("age", "age")], &cache).unwrap();

    let first = provider.provide("ds := foo", word());
    let second = provider.provide("ds := foo", word());
    assert_eq!(first, second);
}

#[test]
fn test_string_contents_never_become_candidates() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, Vec::new(), &cache).unwrap();

    let items = provider.provide(r#"ds := "hidden secret" + tail"#, word());
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert!(!labels.contains(&"hidden"));
    assert!(!labels.contains(&"secret"));
    assert!(labels.contains(&"tail"));
}

#[test]
fn test_malformed_grammar_fails_provider_construction() {
    let tools = Tools::new("vtl", "start : 'a' (", AssignmentToolset::new());
    let cache = GraphCache::new();
    let err = SuggestionsProvider::new(&tools, Vec::new(), &cache)
        .err()
        .expect("construction should fail");
    assert!(matches!(err, ConfigurationError::Grammar(_)));
}

#[test]
fn test_monarch_classification_over_the_fixture_vocabulary() {
    let toolset = AssignmentToolset::new();
    let categories = monarch::derive_categories(&toolset, MonarchCategories::default()).unwrap();
    // The fixture has no identifier-shaped literals; symbolic-named
    // literals land in specials, the rest in operators.
    assert!(categories.keywords.is_empty());
    assert_eq!(categories.specials, vec![":=", "+", "-"]);
    assert_eq!(categories.operators, vec!["(", ")"]);
}

#[test]
fn test_suggestion_labels_snapshot() {
    let tools = keyword_tools();
    let cache = GraphCache::new();
    let provider = SuggestionsProvider::new(&tools, vec![variable("age", "age")], &cache).unwrap();

    let items = provider.provide("ds := foo", word());
    let labels: Vec<String> = items.into_iter().map(|item| item.label).collect();
    insta::assert_snapshot!(labels.join(", "), @"ds, foo, age, AND, OR, :=");
}
