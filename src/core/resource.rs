//! Resource abstraction and identifier extraction
//!
//! The link engine never depends on concrete resource types. A value takes
//! part in link generation through the [`Resource`] trait, which exposes two
//! optional capabilities:
//!
//! 1. an identifier accessor ([`Resource::identifier`]), implemented by typed
//!    domain objects (see [`impl_resource!`](crate::impl_resource));
//! 2. a plain-record view ([`Resource::as_record`]), implemented by JSON
//!    objects, from which a conventionally named `ID`/`Id`/`id` field is read.
//!
//! A resource exposing neither is opaque and yields an empty identifier.

use serde_json::{Map, Value};
use std::sync::Arc;

/// Field names consulted, in order, on plain records
pub const IDENTIFIER_FIELDS: [&str; 3] = ["ID", "Id", "id"];

/// A value links can be generated for
pub trait Resource {
    /// Identifier accessor, for types that know their own identifier
    fn identifier(&self) -> Option<String> {
        None
    }

    /// Plain-record view, for loosely typed resources
    fn as_record(&self) -> Option<&Map<String, Value>> {
        None
    }
}

/// Per-resource-type identifier extraction hook
///
/// When a [`ResourceConfig`](crate::config::ResourceConfig) declares one, it
/// replaces [`extract_identifier`] for that resource type.
pub type IdentifierExtractor = Arc<dyn Fn(&dyn Resource) -> String + Send + Sync>;

/// Extract an identifier using the generic policy
///
/// The accessor wins over the record view. Returns an empty string when no
/// identifier can be found.
///
/// ```
/// use hateoas::core::resource::extract_identifier;
/// use serde_json::json;
///
/// assert_eq!(extract_identifier(&json!({ "id": 42 })), "42");
/// assert_eq!(extract_identifier(&json!("opaque")), "");
/// ```
pub fn extract_identifier(resource: &dyn Resource) -> String {
    if let Some(id) = resource.identifier() {
        return id;
    }

    resource
        .as_record()
        .and_then(|record| {
            IDENTIFIER_FIELDS
                .iter()
                .find_map(|field| record.get(*field).and_then(scalar_to_string))
        })
        .unwrap_or_default()
}

/// Render a JSON scalar as an identifier string
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl Resource for Value {
    fn as_record(&self) -> Option<&Map<String, Value>> {
        self.as_object()
    }
}

impl Resource for Map<String, Value> {
    fn as_record(&self) -> Option<&Map<String, Value>> {
        Some(self)
    }
}

impl<T: Resource + ?Sized> Resource for &T {
    fn identifier(&self) -> Option<String> {
        (**self).identifier()
    }

    fn as_record(&self) -> Option<&Map<String, Value>> {
        (**self).as_record()
    }
}

impl<T: Resource + ?Sized> Resource for Box<T> {
    fn identifier(&self) -> Option<String> {
        (**self).identifier()
    }

    fn as_record(&self) -> Option<&Map<String, Value>> {
        (**self).as_record()
    }
}

impl<T: Resource + ?Sized> Resource for Arc<T> {
    fn identifier(&self) -> Option<String> {
        (**self).identifier()
    }

    fn as_record(&self) -> Option<&Map<String, Value>> {
        (**self).as_record()
    }
}

/// Implement [`Resource`] for a struct by reading one of its fields
///
/// The field must implement `Display`.
///
/// # Example
/// ```rust
/// use hateoas::impl_resource;
///
/// struct Transaction {
///     id: u64,
///     amount: i64,
/// }
///
/// impl_resource!(Transaction, id);
/// ```
#[macro_export]
macro_rules! impl_resource {
    ($type:ty, $field:ident) => {
        impl $crate::core::resource::Resource for $type {
            fn identifier(&self) -> Option<String> {
                Some(self.$field.to_string())
            }
        }
    };
}
