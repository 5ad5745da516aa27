//! Custom link URL templates
//!
//! Templates are plain strings with three recognized placeholders. Any other
//! `{...}` sequence is left verbatim in the generated URL.

use regex::Regex;
use std::sync::OnceLock;

/// Replaced with `scheme://host` + API base path
pub const BASE_URL: &str = "{baseURL}";

/// Replaced with the configured resource name
pub const RESOURCE_NAME: &str = "{resourceName}";

/// Replaced with the resource identifier (empty without a resource)
pub const ID: &str = "{id}";

/// Substitute every occurrence of the known placeholders
///
/// ```
/// use hateoas::links::template::expand;
///
/// let url = expand("{baseURL}/{resourceName}/{id}/activate", "http://h/v1", "widgets", "7");
/// assert_eq!(url, "http://h/v1/widgets/7/activate");
/// ```
pub fn expand(template: &str, base_url: &str, resource_name: &str, id: &str) -> String {
    template
        .replace(BASE_URL, base_url)
        .replace(RESOURCE_NAME, resource_name)
        .replace(ID, id)
}

/// Names of `{placeholder}` sequences the engine does not substitute
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder regex is valid"));

    regex
        .captures_iter(template)
        .filter(|caps| !matches!(&caps[0], BASE_URL | RESOURCE_NAME | ID))
        .map(|caps| caps[1].to_string())
        .collect()
}
