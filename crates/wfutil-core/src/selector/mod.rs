//! Name selectors for listing objects by name.
//!
//! [`encode_name_selector`] turns a workflow name into `metadata.name=<name>` and proves
//! that [`decode_name_selector`] recovers the same name from the result.
mod grammar;
pub use grammar::{FieldSelector, Operator, Requirement, SelectorError, escape_value, unescape_value};

use tracing::trace;
use wfutil_model::SELECTOR_NAME_FIELD;

use crate::error::{CoreError, CoreResult};

const NAME_TAG: &str = "metadata.name=";

/// Build the canonical selector matching objects named `name`.
///
/// The selector is parsed and re-rendered through [`FieldSelector`], then decoded again.
/// A name that does not survive the round trip (it contains `,`, `=`, `\` or surrounding
/// whitespace) yields [`CoreError::Contract`]; callers must not continue with such a name.
pub fn encode_name_selector(name: &str) -> CoreResult<String> {
    let raw = format!("{SELECTOR_NAME_FIELD}={name}");
    let selector = FieldSelector::parse(&raw)
        .map_err(|e| CoreError::Contract(format!("cannot build selector for name '{name}': {e}")))?
        .to_string();

    let recovered = decode_name_selector(&selector);
    if recovered != name {
        return Err(CoreError::Contract(format!(
            "could not recover field selector from workflow name: expected '{name}' but got '{recovered}'"
        )));
    }
    trace!(%selector, "name selector encoded");
    Ok(selector)
}

/// Extract the name from a `metadata.name=<name>` clause.
///
/// Returns an empty string when the selector has no such clause.
/// The name ends at the next `,` and is trimmed of surrounding whitespace.
pub fn decode_name_selector(selector: &str) -> String {
    let Some(start) = selector.find(NAME_TAG) else {
        return String::new();
    };
    let suffix = &selector[start + NAME_TAG.len()..];
    let end = suffix.find(',').unwrap_or(suffix.len());
    suffix[..end].trim().to_string()
}
