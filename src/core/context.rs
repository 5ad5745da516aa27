//! Request context adaptation
//!
//! Link generation needs exactly two facts from the surrounding web layer:
//! the URL scheme and the host the client used. [`RequestContext`] is the
//! single seam through which those are obtained, so any web framework can be
//! supported by implementing it.
//!
//! Implementations are provided for the `http` types re-exported by axum
//! ([`HeaderMap`], [`Parts`], [`Request`]) and for the owned
//! [`RequestOrigin`], which also works as an axum extractor.

use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request, Uri};
use std::convert::Infallible;

/// Header carrying the client-facing scheme when behind a proxy
pub const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Header carrying the client-facing host when behind a proxy
pub const FORWARDED_HOST: &str = "x-forwarded-host";

/// Scheme assumed when the request does not state one
pub const DEFAULT_SCHEME: &str = "http";

/// Source of the scheme and host used to build absolute link URLs
///
/// Returning `None` (or an empty string) from either method marks the
/// context as unadaptable; link generation then yields no links.
pub trait RequestContext {
    /// URL scheme, e.g. `"https"`
    fn scheme(&self) -> Option<&str>;

    /// Host with optional port, e.g. `"api.example.com:8443"`
    fn host(&self) -> Option<&str>;

    /// `scheme://host`, if both parts are available
    fn origin(&self) -> Option<String> {
        let scheme = self.scheme().filter(|s| !s.is_empty())?;
        let host = self.host().filter(|h| !h.is_empty())?;
        Some(format!("{scheme}://{host}"))
    }
}

impl<C: RequestContext + ?Sized> RequestContext for &C {
    fn scheme(&self) -> Option<&str> {
        (**self).scheme()
    }

    fn host(&self) -> Option<&str> {
        (**self).host()
    }
}

/// Owned scheme/host pair
///
/// Useful for non-HTTP callers, tests, and as an axum extractor:
///
/// ```rust,ignore
/// async fn list(origin: RequestOrigin, State(links): State<LinkGenerator>) -> impl IntoResponse {
///     let map = links.collection_links("transaction", &origin, 1, 10);
///     // ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: Option<String>,
}

impl RequestOrigin {
    /// Create an origin from a known scheme and host
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: Some(host.into()),
        }
    }

    /// Capture the origin of any request context
    pub fn from_context(ctx: &dyn RequestContext) -> Self {
        Self {
            scheme: ctx.scheme().unwrap_or(DEFAULT_SCHEME).to_string(),
            host: ctx.host().map(str::to_string),
        }
    }
}

impl RequestContext for RequestOrigin {
    fn scheme(&self) -> Option<&str> {
        Some(&self.scheme)
    }

    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

impl RequestContext for HeaderMap {
    fn scheme(&self) -> Option<&str> {
        Some(header_scheme(self).unwrap_or(DEFAULT_SCHEME))
    }

    fn host(&self) -> Option<&str> {
        header_host(self)
    }
}

impl RequestContext for Parts {
    fn scheme(&self) -> Option<&str> {
        Some(resolve_scheme(&self.uri, &self.headers))
    }

    fn host(&self) -> Option<&str> {
        resolve_host(&self.uri, &self.headers)
    }
}

impl<B> RequestContext for Request<B> {
    fn scheme(&self) -> Option<&str> {
        Some(resolve_scheme(self.uri(), self.headers()))
    }

    fn host(&self) -> Option<&str> {
        resolve_host(self.uri(), self.headers())
    }
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_context(&*parts))
    }
}

fn resolve_scheme<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> &'a str {
    uri.scheme_str()
        .or_else(|| header_scheme(headers))
        .unwrap_or(DEFAULT_SCHEME)
}

fn resolve_host<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> Option<&'a str> {
    header_host(headers).or_else(|| uri.authority().map(|a| a.as_str()))
}

fn header_scheme(headers: &HeaderMap) -> Option<&str> {
    header_value(headers, FORWARDED_PROTO)
}

fn header_host(headers: &HeaderMap) -> Option<&str> {
    header_value(headers, FORWARDED_HOST).or_else(|| header_value(headers, HOST.as_str()))
}

/// First comma-separated entry of a header, trimmed
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
