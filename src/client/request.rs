//! Request descriptors
//!
//! A [`RequestDescriptor`] is the declarative record of one intended HTTP call:
//! API version, method, route template, route values, query parameters and an
//! optional JSON body. Descriptors are built fresh for every call and handed
//! to a [`Dispatcher`](super::Dispatcher) unchanged.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::context::TeamContext;
use super::routes::Endpoint;
use crate::error::Result;

/// HTTP verb of an operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Ordered query parameters.
///
/// Absent values are never stored, so they never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn push(mut self, key: &str, value: impl Into<String>) -> Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Add a parameter only when a value is present.
    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v.to_string()),
            None => self,
        }
    }

    /// Add a comma-joined list. An absent or empty list is omitted.
    pub fn push_list<V: ToString>(self, key: &str, values: Option<&[V]>) -> Self {
        let joined = values.filter(|v| !v.is_empty()).map(|v| {
            v.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });
        self.push_opt(key, joined)
    }

    /// Add a timestamp as RFC 3339 UTC with millisecond precision.
    pub fn push_date(self, key: &str, value: Option<DateTime<Utc>>) -> Self {
        self.push_opt(
            key,
            value.map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to a query string (without the leading `?`).
    ///
    /// Keys keep a leading `$` verbatim; the server addresses `$timeframe`
    /// and friends literally.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_query_key(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_query_key(key: &str) -> String {
    match key.strip_prefix('$') {
        Some(rest) => format!("${}", urlencoding::encode(rest)),
        None => urlencoding::encode(key).into_owned(),
    }
}

/// Declarative record of one HTTP call before dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Operation name, for logging
    pub operation: &'static str,
    /// API version sent with the request
    pub api_version: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Route template containing `{placeholder}` tokens
    pub route_template: &'static str,
    /// Route values by placeholder name
    pub route_values: HashMap<&'static str, String>,
    /// Query parameters
    pub query: QueryParams,
    /// Request body, attached verbatim
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    /// Start a descriptor for an endpoint with its literal API version.
    pub fn new(endpoint: &Endpoint) -> Self {
        Self {
            operation: endpoint.name,
            api_version: endpoint.api_version.to_string(),
            method: endpoint.method,
            route_template: endpoint.route_template,
            route_values: HashMap::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Replace the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set a route value. Absent values leave the placeholder unset.
    pub fn route<V: Into<String>>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.route_values.insert(name, v.into());
        }
        self
    }

    /// Set `{project}` and `{team}` from a team context.
    pub fn team(self, ctx: &TeamContext) -> Self {
        let (project, team) = ctx.resolve();
        self.route("project", project).route("team", team)
    }

    /// Set the query parameters.
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a serializable body.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Expand the route template into a relative path.
    pub fn path(&self) -> String {
        expand_route(self.route_template, &self.route_values)
    }

    /// Relative path plus query string, if any.
    pub fn path_and_query(&self) -> String {
        let path = self.path();
        if self.query.is_empty() {
            path
        } else {
            format!("{}?{}", path, self.query.to_query_string())
        }
    }
}

/// Substitute `{placeholder}` tokens in a `/`-separated route template.
///
/// A segment whose placeholder has no value is dropped, so list operations can
/// share a template with their get-by-id counterpart. Substituted values are
/// percent-encoded as a single path segment.
pub fn expand_route(template: &str, values: &HashMap<&'static str, String>) -> String {
    template
        .split('/')
        .filter_map(|segment| expand_segment(segment, values))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn expand_segment(segment: &str, values: &HashMap<&'static str, String>) -> Option<String> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(start) = rest.find('{') {
        let end = rest[start..].find('}').map(|i| start + i)?;
        out.push_str(&rest[..start]);
        let name = &rest[start + 1..end];
        let value = values.get(name).filter(|v| !v.is_empty())?;
        out.push_str(&urlencoding::encode(value));
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    Some(out)
}
