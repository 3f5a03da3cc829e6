use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::ProductId;

/// Which upstream resource a fetch failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    AttributeMeta,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Products => f.write_str("products"),
            Resource::AttributeMeta => f.write_str("attribute metadata"),
        }
    }
}

/// A product references something the attribute metadata does not define
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("attribute group '{group}' is missing from attribute metadata")]
    UnknownGroup { group: String },

    #[error("attribute code '{code}' is missing from attribute metadata")]
    UnknownCode { code: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{resource} source unavailable: {reason}")]
    UpstreamUnavailable { resource: Resource, reason: String },

    #[error("{resource} source returned an unreadable payload: {reason}")]
    MalformedUpstream { resource: Resource, reason: String },

    #[error("failed to resolve attributes of product {product_id}: {source}")]
    AttributeResolution {
        product_id: ProductId,
        #[source]
        source: ResolveError,
    },

    #[error("the given data was invalid")]
    Validation {
        /// Field name -> messages
        errors: BTreeMap<String, Vec<String>>,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn unavailable(resource: Resource, reason: impl ToString) -> Self {
        CatalogError::UpstreamUnavailable {
            resource,
            reason: reason.to_string(),
        }
    }

    pub fn malformed(resource: Resource, reason: impl ToString) -> Self {
        CatalogError::MalformedUpstream {
            resource,
            reason: reason.to_string(),
        }
    }
}
