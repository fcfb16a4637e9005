//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Zoho Inventory access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use zoho_inventory::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A Zoho organization id.
///
/// The id is carried for the caller's use; the client never adds it to
/// outgoing requests on its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Creates a new validated organization id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOrganizationId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyOrganizationId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for OrganizationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts a string or an unsigned integer, since settings files often store
/// the id as a number.
impl<'de> Deserialize<'de> for OrganizationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        };
        Self::new(id).map_err(de::Error::custom)
    }
}

/// A validated API base URL.
///
/// The URL must carry a scheme and a host. Trailing `/` characters are
/// trimmed so that resource paths can be joined onto it directly.
///
/// # Example
///
/// ```rust
/// use zoho_inventory::BaseUrl;
///
/// let url = BaseUrl::new("https://inventory.zoho.eu/api/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://inventory.zoho.eu/api/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "inventory.zoho.eu");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The public Zoho Inventory endpoint.
    pub const DEFAULT: &'static str = "https://inventory.zoho.com/api/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host,
    /// or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        // Paths are appended verbatim, so a query or fragment here would swallow them.
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let host_start = "https://".len();
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: "https".len(),
            host_start,
            host_end: host_start + "inventory.zoho.com".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
