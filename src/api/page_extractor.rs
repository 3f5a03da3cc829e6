use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::{BTreeMap, HashMap};

use crate::error::CatalogError;

/// Pagination parameters taken from the query string.
///
/// - page: optional, positive integer
/// - page_size: optional, positive integer
///
/// Empty values count as absent. Anything else is rejected before the
/// listing runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri).map_err(|e| {
            CatalogError::Validation {
                errors: BTreeMap::from([("query".to_string(), vec![e.body_text()])]),
            }
        })?;

        PageParams::from_query(&raw)
    }
}

impl PageParams {
    pub fn from_query(raw: &HashMap<String, String>) -> Result<Self, CatalogError> {
        let mut errors = BTreeMap::new();

        let mut field = |name: &str| match raw.get(name).map(|value| parse_positive(name, value)) {
            Some(Ok(value)) => value,
            Some(Err(message)) => {
                errors.insert(name.to_string(), vec![message]);
                None
            }
            None => None,
        };

        let page = field("page");
        let page_size = field("page_size");

        if !errors.is_empty() {
            return Err(CatalogError::Validation { errors });
        }

        Ok(Self { page, page_size })
    }
}

/// Parse a query value that must be a whole number >= 1.
///
/// Any numeric notation is accepted (`10`, `1.0`, `1e1`); values beyond
/// `usize::MAX` are capped. Fractions such as `2.5` are rejected.
fn parse_positive(name: &str, raw: &str) -> Result<Option<usize>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(value) = raw.parse::<u64>() {
        if value == 0 {
            return Err(format!("The {} field must be at least 1.", name));
        }
        return Ok(Some(usize::try_from(value).unwrap_or(usize::MAX)));
    }

    match raw.parse::<f64>() {
        Ok(value) if !value.is_finite() => Err(format!("The {} field must be a number.", name)),
        Ok(value) if value < 1.0 => Err(format!("The {} field must be at least 1.", name)),
        Ok(value) if value.fract() != 0.0 => {
            Err(format!("The {} field must be an integer.", name))
        }
        // Float to int casts saturate at usize::MAX
        Ok(value) => Ok(Some(value as usize)),
        Err(_) => Err(format!("The {} field must be a number.", name)),
    }
}
