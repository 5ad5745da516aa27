//! Per-request link assembly
//!
//! A [`LinkBuilder`] is created by [`LinkGenerator::links_for`], configured
//! through chained calls and consumed by [`LinkBuilder::build`]. It is owned
//! by a single caller, so two chains never observe each other's state.
//!
//! Assembly order (later steps win):
//!
//! 1. default link functions listed in `default_link_types`
//! 2. custom link templates
//! 3. explicit overrides
//!
//! Query parameters are appended last, only to pagination relations whose
//! URL has no query component yet.

use crate::config::ResourceConfig;
use crate::core::pagination::Pagination;
use crate::core::resource::Resource;
use crate::links::LinkMap;
use crate::links::defaults::LinkKind;
use crate::links::registry::LinkGenerator;
use crate::links::template;
use std::collections::BTreeMap;

/// Accumulates the relation -> URL map for one resource type
pub struct LinkBuilder<'a> {
    generator: &'a LinkGenerator,
    resource_type: String,
    resource: Option<&'a dyn Resource>,
    base_url: Option<String>,
    links: LinkMap,
    overrides: BTreeMap<String, String>,
    query_params: BTreeMap<String, String>,
}

impl<'a> LinkBuilder<'a> {
    pub(crate) fn new(
        generator: &'a LinkGenerator,
        resource_type: &str,
        resource: Option<&'a dyn Resource>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            generator,
            resource_type: resource_type.to_string(),
            resource,
            base_url,
            links: LinkMap::new(),
            overrides: BTreeMap::new(),
            query_params: BTreeMap::new(),
        }
    }

    /// Add query parameters for the pagination relations
    ///
    /// Later values replace earlier ones for the same key.
    pub fn with_query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a single query parameter
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Add `page` and `page_size` for the given pagination
    pub fn with_pagination(self, pagination: &Pagination) -> Self {
        self.with_query_params(pagination.query_params())
    }

    /// Replace (or add) the URL of one relation
    pub fn override_link(mut self, relation: impl Into<String>, url: impl Into<String>) -> Self {
        self.overrides.insert(relation.into(), url.into());
        self
    }

    /// Base URL computed from the request context, if it could be adapted
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Assemble the links
    ///
    /// Returns an empty map when the request context could not be adapted or
    /// the resource type is not registered.
    pub fn build(mut self) -> LinkMap {
        let Some(base_url) = self.base_url.take() else {
            tracing::debug!(
                resource_type = %self.resource_type,
                "Request context has no usable scheme/host, skipping links"
            );
            return self.links;
        };

        let generator = self.generator;
        let Some(config) = generator.lookup(&self.resource_type) else {
            tracing::debug!(
                resource_type = %self.resource_type,
                "No link configuration registered, skipping links"
            );
            return self.links;
        };

        let identifier = self.resource.map(|r| config.resolve_identifier(r));

        self.apply_defaults(config, &base_url, identifier.as_deref());
        self.apply_custom_links(config, &base_url, identifier.as_deref().unwrap_or_default());
        self.links.append(&mut self.overrides);
        self.apply_query_params(config);

        self.links
    }

    fn apply_defaults(
        &mut self,
        config: &ResourceConfig,
        base_url: &str,
        identifier: Option<&str>,
    ) {
        for relation in &config.default_link_types {
            let url = LinkKind::from_relation(relation)
                .and_then(|kind| kind.render(base_url, &config.resource_name, identifier));
            if let Some(url) = url {
                self.links.insert(relation.clone(), url);
            }
        }
    }

    fn apply_custom_links(&mut self, config: &ResourceConfig, base_url: &str, identifier: &str) {
        for (relation, pattern) in &config.custom_links {
            let url = template::expand(pattern, base_url, &config.resource_name, identifier);
            self.links.insert(relation.clone(), url);
        }
    }

    fn apply_query_params(&mut self, config: &ResourceConfig) {
        if self.query_params.is_empty() {
            return;
        }

        let query = encode_query(&self.query_params);
        for (relation, url) in self.links.iter_mut() {
            if config.is_pagination_link(relation) && !url.contains('?') {
                url.push_str(&query);
            }
        }
    }
}

/// Serialize parameters as `?k=v&k=v` in key order
fn encode_query(params: &BTreeMap<String, String>) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("?{encoded}")
}
