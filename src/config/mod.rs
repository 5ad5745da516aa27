//! Link configuration: per-resource link policy and its YAML representation

use crate::core::ConfigError;
use crate::core::resource::{IdentifierExtractor, Resource, extract_identifier};
use crate::links::defaults::LinkKind;
use crate::links::registry::{LinkGenerator, ResourceRegistry};
use crate::links::template;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Relations that receive pagination parameters when none are configured
pub const DEFAULT_PAGINATION_LINKS: [&str; 2] = ["self", "collection"];

/// API base path used when a configuration file does not set one
pub const DEFAULT_API_BASE_PATH: &str = "/v1";

/// Link policy for one resource type
///
/// # Example
/// ```rust
/// use hateoas::config::ResourceConfig;
///
/// let config = ResourceConfig::new("transactions")
///     .with_default_links(["self", "collection", "create", "show"])
///     .with_custom_link("receipt", "{baseURL}/{resourceName}/{id}/receipt")
///     .with_pagination_links(["collection"]);
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Plural name used in URLs (e.g., "transactions"); derived from the tag when empty
    #[serde(default)]
    pub resource_name: String,

    /// Identifier extraction hook replacing the generic policy
    #[serde(skip)]
    pub identifier_extractor: Option<IdentifierExtractor>,

    /// Default relations to generate, in order
    #[serde(default)]
    pub default_link_types: Vec<String>,

    /// Relation name -> URL template with `{baseURL}`, `{resourceName}` and `{id}`
    #[serde(default)]
    pub custom_links: IndexMap<String, String>,

    /// Relations that receive query parameters
    #[serde(default)]
    pub pagination_links: Vec<String>,
}

impl ResourceConfig {
    /// Create a config exposing resources under `resource_name`
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            ..Self::default()
        }
    }

    /// Set the default relations to generate
    pub fn with_default_links<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_link_types = relations.into_iter().map(Into::into).collect();
        self
    }

    /// Add a custom link template
    pub fn with_custom_link(
        mut self,
        relation: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.custom_links.insert(relation.into(), template.into());
        self
    }

    /// Set the relations that receive pagination parameters
    pub fn with_pagination_links<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pagination_links = relations.into_iter().map(Into::into).collect();
        self
    }

    /// Install an identifier extraction hook
    pub fn with_identifier_extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&dyn Resource) -> String + Send + Sync + 'static,
    {
        self.identifier_extractor = Some(Arc::new(extractor));
        self
    }

    /// Resolve the identifier of `resource` for this resource type
    pub fn resolve_identifier(&self, resource: &dyn Resource) -> String {
        match &self.identifier_extractor {
            Some(extract) => extract(resource),
            None => extract_identifier(resource),
        }
    }

    /// Whether `relation` receives pagination parameters
    pub fn is_pagination_link(&self, relation: &str) -> bool {
        self.pagination_links.iter().any(|r| r == relation)
    }

    /// Check the config against the fixed link table and known placeholders
    ///
    /// Returns every problem found rather than stopping at the first one.
    pub fn problems(&self, resource_type: &str) -> Vec<ConfigError> {
        let unknown_links = self
            .default_link_types
            .iter()
            .filter(|rel| LinkKind::from_relation(rel).is_none())
            .map(|rel| ConfigError::UnknownLinkType {
                resource_type: resource_type.to_string(),
                relation: rel.clone(),
            });

        let unknown_placeholders = self.custom_links.iter().flat_map(|(rel, tpl)| {
            template::unknown_placeholders(tpl)
                .into_iter()
                .map(move |placeholder| ConfigError::UnknownPlaceholder {
                    resource_type: resource_type.to_string(),
                    relation: rel.clone(),
                    placeholder,
                })
        });

        unknown_links.chain(unknown_placeholders).collect()
    }

    /// Apply registration-time defaults
    pub(crate) fn normalize(&mut self, resource_type: &str) {
        if self.pagination_links.is_empty() {
            self.pagination_links = DEFAULT_PAGINATION_LINKS.map(String::from).to_vec();
        }
        if self.resource_name.is_empty() {
            self.resource_name = crate::core::Pluralizer::pluralize(resource_type);
        }
    }
}

impl fmt::Debug for ResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceConfig")
            .field("resource_name", &self.resource_name)
            .field(
                "identifier_extractor",
                &self.identifier_extractor.as_ref().map(|_| "<fn>"),
            )
            .field("default_link_types", &self.default_link_types)
            .field("custom_links", &self.custom_links)
            .field("pagination_links", &self.pagination_links)
            .finish()
    }
}

/// Complete configuration for the link engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HateoasConfig {
    /// Path appended to `scheme://host` (e.g., "/api/v1")
    #[serde(default = "default_api_base_path")]
    pub api_base_path: String,

    /// Resource type tag -> link policy
    #[serde(default)]
    pub resources: IndexMap<String, ResourceConfig>,
}

fn default_api_base_path() -> String {
    DEFAULT_API_BASE_PATH.to_string()
}

impl Default for HateoasConfig {
    fn default() -> Self {
        Self {
            api_base_path: default_api_base_path(),
            resources: IndexMap::new(),
        }
    }
}

impl HateoasConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Strict check of every resource
    ///
    /// Registration never fails on these problems (it only logs them); call
    /// this at startup to refuse a suspicious configuration instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .resources
            .iter()
            .flat_map(|(tag, config)| config.problems(tag))
            .next()
        {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Register every resource and seal the result
    pub fn into_generator(self) -> LinkGenerator {
        ResourceRegistry::from_config(self).seal()
    }

    /// Configuration mirroring the transaction API of the demo service
    pub fn default_config() -> Self {
        let mut resources = IndexMap::new();
        resources.insert(
            "transaction".to_string(),
            ResourceConfig::new("transactions")
                .with_default_links(["self", "collection", "create", "show", "update", "delete"])
                .with_pagination_links(DEFAULT_PAGINATION_LINKS),
        );
        resources.insert(
            "category".to_string(),
            ResourceConfig::new("categories").with_default_links(["self", "collection"]),
        );
        resources.insert(
            "user".to_string(),
            ResourceConfig::new("users")
                .with_default_links(["self", "collection", "create", "update", "delete"])
                .with_custom_link("profile", "{baseURL}/profiles/{id}")
                .with_custom_link("avatar", "{baseURL}/{resourceName}/{id}/avatar"),
        );

        Self {
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            resources,
        }
    }
}
