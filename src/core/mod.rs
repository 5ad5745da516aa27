//! Core types shared by the link engine: resources, request contexts,
//! pagination and errors

pub mod context;
pub mod error;
pub mod pagination;
pub mod pluralize;
pub mod resource;

pub use context::{RequestContext, RequestOrigin};
pub use error::ConfigError;
pub use pagination::{PageQuery, Pagination};
pub use pluralize::Pluralizer;
pub use resource::{IdentifierExtractor, Resource, extract_identifier};
