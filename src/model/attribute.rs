use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Code = String;

/// One attribute family as published by the attribute metadata source,
/// e.g. "Category" with values `cat_1`, `cat_1_1`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeGroupMeta {
    pub code: Code,
    pub name: String,
    #[serde(default)]
    pub values: Vec<AttributeValueMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValueMeta {
    pub code: Code,
    pub name: String,
}

/// Lookup entry for a single attribute group
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeGroupEntry {
    /// Display name of the group ("Category", "Color")
    pub name: String,
    /// Value code -> display name
    pub items: HashMap<Code, String>,
}

/// Group code -> entry, built fresh for every listing request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeIndex {
    groups: HashMap<Code, AttributeGroupEntry>,
}

impl AttributeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group entry, replacing any previous entry with the same code
    pub fn insert(&mut self, code: Code, entry: AttributeGroupEntry) -> Option<AttributeGroupEntry> {
        self.groups.insert(code, entry)
    }

    pub fn group(&self, code: &str) -> Option<&AttributeGroupEntry> {
        self.groups.get(code)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
