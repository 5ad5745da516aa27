//! English pluralization used to derive resource names from type tags
//!
//! A resource registered as `"category"` without an explicit resource name
//! is exposed under `/categories`.

/// Converts singular resource tags to the plural segment used in URLs
pub struct Pluralizer;

/// Endings that take `-es` rather than `-s`
const SIBILANT_ENDINGS: [&str; 6] = ["s", "ss", "sh", "ch", "x", "z"];

/// Words ending in a consonant + `o` that still take a plain `-s`
const PLAIN_O_WORDS: [&str; 4] = ["photo", "piano", "halo", "memo"];

impl Pluralizer {
    /// Pluralize a lowercase English noun
    ///
    /// # Examples
    ///
    /// ```
    /// use hateoas::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::pluralize("transaction"), "transactions");
    /// assert_eq!(Pluralizer::pluralize("category"), "categories");
    /// assert_eq!(Pluralizer::pluralize("address"), "addresses");
    /// ```
    pub fn pluralize(singular: &str) -> String {
        if singular.is_empty() {
            return String::new();
        }

        if let Some(stem) = singular.strip_suffix('y') {
            if !stem.is_empty() && !ends_with_vowel(stem) {
                return format!("{stem}ies");
            }
            return format!("{singular}s");
        }

        if SIBILANT_ENDINGS.iter().any(|end| singular.ends_with(end)) {
            return format!("{singular}es");
        }

        if let Some(stem) = singular.strip_suffix("fe").filter(|s| !s.is_empty()) {
            return format!("{stem}ves");
        }

        if let Some(stem) = singular.strip_suffix('f').filter(|s| !s.is_empty()) {
            return format!("{stem}ves");
        }

        if let Some(stem) = singular.strip_suffix('o') {
            if !stem.is_empty() && !ends_with_vowel(stem) && !PLAIN_O_WORDS.contains(&singular) {
                return format!("{singular}es");
            }
        }

        format!("{singular}s")
    }
}

fn ends_with_vowel(s: &str) -> bool {
    s.chars()
        .last()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}
