use indexmap::IndexMap;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::model::Code;

/// Product identifier as it appears upstream. Any JSON number or string
/// is accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{}", id),
            ProductId::Signed(id) => write!(f, "{}", id),
            ProductId::Float(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

/// Upstream attribute maps; PHP style feeds encode an empty map as `[]`
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeMap {
    Map(IndexMap<Code, String>),
    List(Vec<Value>),
}

fn deserialize_attributes<'de, D>(deserializer: D) -> Result<IndexMap<Code, String>, D::Error>
where
    D: Deserializer<'de>,
{
    match AttributeMap::deserialize(deserializer)? {
        AttributeMap::Map(map) => Ok(map),
        AttributeMap::List(list) if list.is_empty() => Ok(IndexMap::new()),
        AttributeMap::List(_) => Err(de::Error::custom(
            "expected a map of attribute group codes, got a non-empty list",
        )),
    }
}

/// Product as published by the product source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: ProductId,
    pub name: String,
    /// Group code -> comma separated value codes, in upstream key order
    #[serde(default, deserialize_with = "deserialize_attributes")]
    pub attributes: IndexMap<Code, String>,
    /// Any other upstream fields, passed through to the response as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One human readable attribute occurrence. A product carries one entry per
/// value code, so several entries may share a `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAttribute {
    pub name: String,
    pub value: String,
}

impl ResolvedAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Product as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub attributes: Vec<ResolvedAttribute>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawProduct {
    /// Swap the raw attribute map for its resolved form
    pub fn into_product(self, attributes: Vec<ResolvedAttribute>) -> Product {
        Product {
            id: self.id,
            name: self.name,
            attributes,
            extra: self.extra,
        }
    }
}
