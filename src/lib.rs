//! # hateoas
//!
//! Configuration-driven hypermedia link generation for REST APIs.
//!
//! ## Features
//!
//! - **Resource registry**: one link policy per resource type, registered at
//!   startup and sealed into a lock-free, shareable [`LinkGenerator`](links::LinkGenerator)
//! - **Default relations**: `self`, `collection`, `create`, `show`, `update`, `delete`
//! - **Custom templates**: `{baseURL}/{resourceName}/{id}/activate` style links
//! - **Overrides**: replace any relation for a single response
//! - **Pagination aware**: page parameters only land on the relations that want them
//! - **Framework agnostic**: the request is seen through [`RequestContext`](core::RequestContext),
//!   with implementations for axum/http types
//! - **Graceful**: unknown resource types or unusable requests produce no
//!   links instead of errors
//!
//! ## Quick Start
//!
//! ```rust
//! use hateoas::prelude::*;
//! use serde_json::json;
//!
//! let mut registry = ResourceRegistry::new("/v1");
//! registry.register(
//!     "transaction",
//!     ResourceConfig::new("transactions")
//!         .with_default_links(["self", "collection", "create", "show", "update", "delete"])
//!         .with_custom_link("receipt", "{baseURL}/{resourceName}/{id}/receipt"),
//! );
//! let links = registry.seal();
//!
//! let ctx = RequestOrigin::new("https", "api.example.com");
//! let transaction = json!({ "id": "42", "amount": 1250 });
//!
//! let map = links.links_for("transaction", Some(&transaction), &ctx).build();
//! assert_eq!(map["self"], "https://api.example.com/v1/transactions/42");
//! assert_eq!(map["receipt"], "https://api.example.com/v1/transactions/42/receipt");
//! ```

pub mod config;
pub mod core;
pub mod links;
pub mod response;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, IdentifierExtractor, PageQuery, Pagination, Pluralizer, RequestContext,
        RequestOrigin, Resource, extract_identifier,
    };

    // === Config ===
    pub use crate::config::{HateoasConfig, ResourceConfig};

    // === Links ===
    pub use crate::links::{LinkBuilder, LinkGenerator, LinkKind, LinkMap, ResourceRegistry};

    // === Response ===
    pub use crate::response::{ApiResponse, Link, Links, MetaData, PageInfo, to_links};

    // === Macros ===
    pub use crate::impl_resource;
}
