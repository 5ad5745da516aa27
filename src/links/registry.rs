//! Resource registry for link generation
//!
//! The registry has a two-phase lifecycle. During startup a
//! [`ResourceRegistry`] is populated with `register` calls on an owned value.
//! [`ResourceRegistry::seal`] then turns it into a [`LinkGenerator`], an
//! immutable handle that can be cloned into every request handler and read
//! concurrently without locks. The generator has no registration API, so the
//! write phase cannot be reopened.

use crate::config::{HateoasConfig, ResourceConfig};
use crate::core::context::RequestContext;
use crate::core::resource::Resource;
use crate::links::LinkMap;
use crate::links::builder::LinkBuilder;
use std::collections::HashMap;
use std::sync::Arc;

/// Write-phase registry: resource type tag -> link policy
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    api_base_path: String,
    configs: HashMap<String, ResourceConfig>,
}

impl ResourceRegistry {
    /// Create an empty registry for APIs served under `api_base_path`
    pub fn new(api_base_path: impl Into<String>) -> Self {
        Self {
            api_base_path: api_base_path.into(),
            configs: HashMap::new(),
        }
    }

    /// Build a registry from a loaded configuration
    pub fn from_config(config: HateoasConfig) -> Self {
        let mut registry = Self::new(config.api_base_path);
        for (tag, resource) in config.resources {
            registry.register(tag, resource);
        }
        registry
    }

    /// Register (or replace) the link policy for a resource type
    ///
    /// Never fails. An empty `pagination_links` becomes `["self", "collection"]`
    /// and an empty `resource_name` is derived from the tag. Unknown default
    /// link types and template placeholders are logged and tolerated.
    pub fn register(
        &mut self,
        resource_type: impl Into<String>,
        mut config: ResourceConfig,
    ) -> &mut Self {
        let resource_type = resource_type.into();
        config.normalize(&resource_type);

        for problem in config.problems(&resource_type) {
            tracing::warn!(resource_type = %resource_type, "{}", problem);
        }

        tracing::debug!(
            resource_type = %resource_type,
            resource_name = %config.resource_name,
            "Registered link configuration"
        );
        if self.configs.insert(resource_type.clone(), config).is_some() {
            tracing::debug!(resource_type = %resource_type, "Replaced previous link configuration");
        }

        self
    }

    /// Look up the policy for a resource type
    pub fn lookup(&self, resource_type: &str) -> Option<&ResourceConfig> {
        self.configs.get(resource_type)
    }

    /// Number of registered resource types
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// End the write phase
    pub fn seal(self) -> LinkGenerator {
        tracing::info!(
            resources = self.configs.len(),
            api_base_path = %self.api_base_path,
            "Link registry sealed"
        );
        LinkGenerator {
            inner: Arc::new(SealedRegistry {
                api_base_path: self.api_base_path,
                configs: self.configs,
            }),
        }
    }
}

#[derive(Debug)]
struct SealedRegistry {
    api_base_path: String,
    configs: HashMap<String, ResourceConfig>,
}

/// Read-phase handle producing links for registered resource types
///
/// Cloning is cheap; every clone shares the same sealed registry.
#[derive(Debug, Clone)]
pub struct LinkGenerator {
    inner: Arc<SealedRegistry>,
}

impl LinkGenerator {
    /// API base path appended to every origin
    pub fn api_base_path(&self) -> &str {
        &self.inner.api_base_path
    }

    /// Look up the policy for a resource type
    pub fn lookup(&self, resource_type: &str) -> Option<&ResourceConfig> {
        self.inner.configs.get(resource_type)
    }

    /// Whether a resource type is registered
    pub fn contains(&self, resource_type: &str) -> bool {
        self.inner.configs.contains_key(resource_type)
    }

    /// All registered resource types, sorted
    pub fn resource_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.inner.configs.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// `scheme://host` + API base path, if the context can be adapted
    pub fn base_url(&self, ctx: &dyn RequestContext) -> Option<String> {
        ctx.origin()
            .map(|origin| format!("{origin}{}", self.inner.api_base_path))
    }

    /// Start building links for `resource_type`
    ///
    /// Pass `None` as the resource for collection-level links.
    pub fn links_for<'a>(
        &'a self,
        resource_type: &str,
        resource: Option<&'a dyn Resource>,
        ctx: &dyn RequestContext,
    ) -> LinkBuilder<'a> {
        LinkBuilder::new(self, resource_type, resource, self.base_url(ctx))
    }

    /// Links for a page of a collection
    ///
    /// `page` and `page_size` are appended to the resource type's pagination links.
    pub fn collection_links(
        &self,
        resource_type: &str,
        ctx: &dyn RequestContext,
        page: usize,
        page_size: usize,
    ) -> LinkMap {
        self.links_for(resource_type, None, ctx)
            .with_query_param("page", page.to_string())
            .with_query_param("page_size", page_size.to_string())
            .build()
    }

    /// Links for a single resource
    pub fn resource_links(
        &self,
        resource_type: &str,
        resource: &dyn Resource,
        ctx: &dyn RequestContext,
    ) -> LinkMap {
        self.links_for(resource_type, Some(resource), ctx).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RequestOrigin;

    fn widget_config() -> ResourceConfig {
        ResourceConfig::new("widgets").with_default_links(["self", "collection", "create"])
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ResourceRegistry::new("/v1");
        assert!(registry.is_empty());
        assert!(registry.lookup("widget").is_none());
    }

    #[test]
    fn test_register_normalizes_pagination_links() {
        let mut registry = ResourceRegistry::new("/v1");
        registry.register("widget", widget_config());

        let config = registry.lookup("widget").unwrap();
        assert_eq!(config.pagination_links, vec!["self", "collection"]);
    }

    #[test]
    fn test_register_duplicate_replaces() {
        let mut registry = ResourceRegistry::new("/v1");
        registry
            .register("widget", widget_config())
            .register("widget", ResourceConfig::new("gadgets"));

        assert_eq!(registry.len(), 1);
        let config = registry.lookup("widget").unwrap();
        assert_eq!(config.resource_name, "gadgets");
        assert!(config.default_link_types.is_empty());
    }

    #[test]
    fn test_register_tolerates_unknown_link_types() {
        let mut registry = ResourceRegistry::new("/v1");
        registry.register(
            "widget",
            ResourceConfig::new("widgets").with_default_links(["self", "archive"]),
        );

        assert_eq!(registry.lookup("widget").unwrap().default_link_types.len(), 2);
    }

    #[test]
    fn test_seal_preserves_configs() {
        let mut registry = ResourceRegistry::new("/api/v1");
        registry
            .register("widget", widget_config())
            .register("gadget", ResourceConfig::default());

        let generator = registry.seal();
        assert_eq!(generator.api_base_path(), "/api/v1");
        assert_eq!(generator.resource_types(), vec!["gadget", "widget"]);
        assert!(generator.contains("widget"));
        assert_eq!(generator.lookup("gadget").unwrap().resource_name, "gadgets");
    }

    #[test]
    fn test_from_config() {
        let generator = HateoasConfig::default_config().into_generator();
        assert_eq!(generator.resource_types(), vec!["category", "transaction", "user"]);
    }

    #[test]
    fn test_base_url() {
        let generator = ResourceRegistry::new("/v1").seal();

        let ctx = RequestOrigin::new("https", "api.test");
        assert_eq!(
            generator.base_url(&ctx).as_deref(),
            Some("https://api.test/v1")
        );

        let unadaptable = RequestOrigin {
            scheme: "https".to_string(),
            host: None,
        };
        assert_eq!(generator.base_url(&unadaptable), None);
    }

    #[test]
    fn test_generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<LinkGenerator>();
    }
}
