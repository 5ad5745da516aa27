//! Response envelope carrying data, links, metadata and page info
//!
//! Serialized shape:
//!
//! ```json
//! {
//!   "data": { ... },
//!   "_links": { "self": { "href": "https://api.example.com/v1/transactions/42" } },
//!   "meta": { "timestamp": "2026-01-01T00:00:00Z", "statusCode": 200 },
//!   "pageInfo": { "pageSize": 10, "pageNumber": 1, "totalItems": 42, "totalPages": 5 }
//! }
//! ```

use crate::core::context::RequestContext;
use crate::core::pagination::{self, Pagination};
use crate::core::resource::Resource;
use crate::links::{LinkGenerator, LinkMap};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
        }
    }
}

/// Relation name -> link, as serialized under `_links`
pub type Links = BTreeMap<String, Link>;

/// Convert a relation -> URL map into serializable links
pub fn to_links(links: &LinkMap) -> Links {
    links
        .iter()
        .map(|(rel, href)| (rel.clone(), Link::new(href.clone())))
        .collect()
}

/// Response metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub timestamp: DateTime<Utc>,
    pub status_code: u16,
}

/// Pagination details for collection responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_size: usize,
    pub page_number: usize,
    pub total_items: u64,
    pub total_pages: usize,
}

impl PageInfo {
    /// Page info with `total_pages = ceil(total_items / page_size)`
    pub fn new(page_size: usize, page_number: usize, total_items: u64) -> Self {
        Self {
            page_size,
            page_number,
            total_items,
            total_pages: pagination::total_pages(total_items, page_size),
        }
    }
}

impl From<&Pagination> for PageInfo {
    fn from(p: &Pagination) -> Self {
        Self::new(p.page_size, p.page, p.total_items)
    }
}

/// Generic API response with hypermedia links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(rename = "_links", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: Links,

    pub meta: MetaData,

    #[serde(rename = "pageInfo", default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

impl<T> ApiResponse<T> {
    /// Response with data and metadata stamped now
    pub fn new(data: T, status: StatusCode) -> Self {
        Self {
            data: Some(data),
            links: Links::new(),
            meta: MetaData {
                timestamp: Utc::now(),
                status_code: status.as_u16(),
            },
            page_info: None,
        }
    }

    /// Response for a single resource, with that resource's links
    pub fn single(
        generator: &LinkGenerator,
        resource_type: &str,
        resource: T,
        ctx: &dyn RequestContext,
        status: StatusCode,
    ) -> Self
    where
        T: Resource,
    {
        let links = generator.resource_links(resource_type, &resource, ctx);
        Self::new(resource, status).with_link_map(&links)
    }

    /// Response for one page of a collection
    ///
    /// Pagination links carry the page parameters; `pagination.total_items`
    /// drives the page info.
    pub fn collection(
        generator: &LinkGenerator,
        resource_type: &str,
        items: T,
        ctx: &dyn RequestContext,
        pagination: &Pagination,
        status: StatusCode,
    ) -> Self {
        let links = generator.collection_links(
            resource_type,
            ctx,
            pagination.page,
            pagination.page_size,
        );
        Self::new(items, status)
            .with_link_map(&links)
            .with_page_info(pagination.page_size, pagination.page, pagination.total_items)
    }

    /// Replace the links
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    /// Replace the links from a relation -> URL map
    pub fn with_link_map(self, links: &LinkMap) -> Self {
        self.with_links(to_links(links))
    }

    /// Attach page info
    pub fn with_page_info(
        mut self,
        page_size: usize,
        page_number: usize,
        total_items: u64,
    ) -> Self {
        self.page_info = Some(PageInfo::new(page_size, page_number, total_items));
        self
    }

    /// HTTP status recorded in the metadata
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.meta.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self)).into_response()
    }
}
