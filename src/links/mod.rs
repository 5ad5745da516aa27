//! Link generation
//!
//! [`registry`] holds the per-resource link policies, [`builder`] assembles
//! the links for one call, [`defaults`] and [`template`] render individual
//! URLs.

pub mod builder;
pub mod defaults;
pub mod registry;
pub mod template;

use std::collections::BTreeMap;

/// Relation name -> URL
pub type LinkMap = BTreeMap<String, String>;

pub use builder::LinkBuilder;
pub use defaults::LinkKind;
pub use registry::{LinkGenerator, ResourceRegistry};
