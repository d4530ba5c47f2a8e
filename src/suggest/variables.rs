//! Externally supplied variable descriptors.
//!
//! Hosts feed the suggestion engine variable lists, either built in memory
//! or fetched from endpoints. The fetch itself is host glue; this module
//! owns the wire shape those endpoints produce and the merge step that
//! flattens several lists into one.

use serde::{Deserialize, Serialize};

/// Semantic type tag carried by a variable descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    String,
    Integer,
    Number,
    Boolean,
}

/// Role a variable plays in the data structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableRole {
    Identifier,
    Measure,
    Dimension,
    Attribute,
}

/// One externally supplied variable. Read-only input to the suggestion
/// engine; never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDescriptor {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    pub role: VariableRole,
}

/// Decode a JSON variable list in the endpoint wire shape.
pub fn parse_variables(json: &str) -> Result<Vec<VariableDescriptor>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Flatten several variable lists into one, deduplicating by `name`.
/// The first occurrence wins; order is otherwise preserved.
pub fn merge_variables(lists: Vec<Vec<VariableDescriptor>>) -> Vec<VariableDescriptor> {
    let mut seen = std::collections::HashSet::new();
    let mut merged = Vec::new();
    for list in lists {
        for variable in list {
            if seen.insert(variable.name.clone()) {
                merged.push(variable);
            }
        }
    }
    merged
}
