use std::collections::HashMap;

use crate::error::ResolveError;

pub const LEVEL_SEPARATOR: char = '_';
pub const PATH_SEPARATOR: &str = " > ";

/// Walks a hierarchical value code up through its parents and joins the
/// display names, e.g. `cat_1_1` -> "Bikes > Electric bikes".
///
/// Codes with fewer than two separators are a base case and resolve to
/// their own name only, so `cat_1` never looks up `cat`.
pub fn resolve_name(code: &str, items: &HashMap<String, String>) -> Result<String, ResolveError> {
    let name = items.get(code).ok_or_else(|| ResolveError::UnknownCode {
        code: code.to_string(),
    })?;

    if code.matches(LEVEL_SEPARATOR).count() < 2 {
        return Ok(name.clone());
    }

    let parent = parent_code(code).unwrap_or(code);
    let parent_path = resolve_name(parent, items)?;

    Ok(format!("{}{}{}", parent_path, PATH_SEPARATOR, name))
}

/// `cat_1_1` -> `cat_1`; `None` when there is no separator
pub fn parent_code(code: &str) -> Option<&str> {
    code.rfind(LEVEL_SEPARATOR).map(|idx| &code[..idx])
}
