//! Request types for the Zoho Inventory client.
//!
//! This module provides [`RequestSpec`], the description of one API call,
//! and the helpers that turn it into a URL and body: auth merging,
//! parameter encoding and base-URL joining.

use std::fmt;

use crate::config::{AccessToken, BaseUrl};

/// Name of the parameter carrying the access token on every request.
pub const AUTH_PARAM: &str = "authtoken";

/// HTTP methods used by the Zoho Inventory API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters for this method travel in the request body.
    ///
    /// Only POST sends a body; every other method encodes its parameters
    /// into the query string.
    #[must_use]
    pub const fn sends_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single API call before auth and encoding are applied.
///
/// `path` is the resource alias relative to the base URL (e.g. `/items/42`).
/// It may carry its own query string, as the purchase order endpoint does.
///
/// # Example
///
/// ```rust
/// use zoho_inventory::clients::{HttpMethod, RequestSpec};
///
/// let spec = RequestSpec::new(HttpMethod::Get, "/items/")
///     .param("search_text", "widget");
///
/// assert_eq!(spec.params, vec![("search_text".to_string(), "widget".to_string())]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The alias path appended to the base URL.
    pub path: String,
    /// Caller parameters, in the order they were added.
    pub params: Vec<(String, String)>,
}

impl RequestSpec {
    /// Creates a request with no parameters.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds several parameters.
    #[must_use]
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params.extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Applies auth and encoding, producing the URL and body to send.
    ///
    /// POST requests carry the merged parameters as a form-encoded body and
    /// leave the URL untouched. Every other method appends them to the URL
    /// and sends no body.
    #[must_use]
    pub fn prepare(&self, base_url: &BaseUrl, token: &AccessToken) -> PreparedRequest {
        let params = params_with_auth(token, &self.params);
        let url = join_url(base_url.as_ref(), &self.path);

        if self.http_method.sends_body() {
            return PreparedRequest {
                http_method: self.http_method,
                url,
                body: Some(encode_params(&params)),
            };
        }

        let url = if params.is_empty() {
            url
        } else {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{url}{separator}{}", encode_params(&params))
        };

        PreparedRequest {
            http_method: self.http_method,
            url,
            body: None,
        }
    }
}

/// A request ready for the transport.
///
/// Both `url` and `body` may contain the access token, so this type has no
/// `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The absolute URL, including the query string for non-POST requests.
    pub url: String,
    /// The form-encoded body for POST requests.
    pub body: Option<String>,
}

/// Merges the access token into a parameter list.
///
/// The token comes first under [`AUTH_PARAM`]; caller parameters follow in
/// their original order. A caller-supplied `authtoken` is dropped so the
/// configured token always wins.
#[must_use]
pub fn params_with_auth(token: &AccessToken, params: &[(String, String)]) -> Vec<(String, String)> {
    std::iter::once((AUTH_PARAM.to_string(), token.as_ref().to_string()))
        .chain(params.iter().filter(|(key, _)| key != AUTH_PARAM).cloned())
        .collect()
}

/// URL-encodes a parameter list as `key=value` pairs joined by `&`.
#[must_use]
pub fn encode_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Joins an alias onto the base URL with exactly one `/` between them.
///
/// ```rust
/// use zoho_inventory::clients::join_url;
///
/// assert_eq!(
///     join_url("https://inventory.zoho.com/api/v1", "//items/"),
///     "https://inventory.zoho.com/api/v1/items/"
/// );
/// ```
#[must_use]
pub fn join_url(base_url: &str, alias: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        alias.trim_start_matches('/')
    )
}
