//! Configuration types for the Zoho Inventory client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`InventoryConfig`]: The configuration struct holding all client settings
//! - [`InventoryConfigBuilder`]: A builder for constructing [`InventoryConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`OrganizationId`]: A validated organization id
//!
//! # Example
//!
//! ```rust
//! use zoho_inventory::{InventoryConfig, AccessToken, BaseUrl};
//!
//! let config = InventoryConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
//! ```
//!
//! # Loading Settings
//!
//! Settings loaded from elsewhere (a JSON file, a secrets store) go through
//! [`InventoryConfig::from_json`] or [`InventoryConfig::from_settings`]. Both
//! validate every value and reject fields the client does not know about,
//! as well as a field given under both its `snake_case` and `camelCase` names.
//!
//! ```rust
//! use zoho_inventory::InventoryConfig;
//!
//! let config = InventoryConfig::from_json(
//!     r#"{"accessToken": "my-token", "organizationId": "10234695"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.organization_id().unwrap().as_ref(), "10234695");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, OrganizationId};

use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for the Zoho Inventory client.
///
/// # Thread Safety
///
/// `InventoryConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct InventoryConfig {
    base_url: BaseUrl,
    access_token: AccessToken,
    organization_id: Option<OrganizationId>,
    user_agent_prefix: Option<String>,
}

impl InventoryConfig {
    /// Creates a new builder for constructing an `InventoryConfig`.
    #[must_use]
    pub fn builder() -> InventoryConfigBuilder {
        InventoryConfigBuilder::new()
    }

    /// Parses a JSON settings document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSettings`] if the document is not valid
    /// JSON or does not describe a valid configuration, see
    /// [`InventoryConfig::from_settings`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidSettings {
                reason: e.to_string(),
            })?;
        Self::from_settings(&settings)
    }

    /// Builds a configuration from a settings object.
    ///
    /// Keys may be given in `snake_case` or `camelCase`: `base_url`,
    /// `access_token`, `organization_id`, `user_agent_prefix`. `null` values
    /// are treated as absent. The organization id may be a string or an
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSettings`] when the settings are not an
    /// object, name an unknown key, give the same field twice under both
    /// spellings, or hold a value that fails validation. Returns
    /// [`ConfigError::MissingRequiredField`] when no access token is given.
    pub fn from_settings(settings: &serde_json::Value) -> Result<Self, ConfigError> {
        // Derived structs also accept sequences; settings must be keyed.
        if !settings.is_object() {
            return Err(ConfigError::InvalidSettings {
                reason: "expected a JSON object".to_string(),
            });
        }
        let settings =
            Settings::deserialize(settings).map_err(|e| ConfigError::InvalidSettings {
                reason: e.to_string(),
            })?;
        settings.into_config()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the organization id, if configured.
    #[must_use]
    pub const fn organization_id(&self) -> Option<&OrganizationId> {
        self.organization_id.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify InventoryConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InventoryConfig>();
};

/// The settings document accepted by [`InventoryConfig::from_settings`].
/// Each newtype validates its own value while deserializing.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Settings {
    #[serde(default, alias = "baseUrl")]
    base_url: Option<BaseUrl>,
    #[serde(default, alias = "accessToken")]
    access_token: Option<AccessToken>,
    #[serde(default, alias = "organizationId")]
    organization_id: Option<OrganizationId>,
    #[serde(default, alias = "userAgentPrefix")]
    user_agent_prefix: Option<String>,
}

impl Settings {
    fn into_config(self) -> Result<InventoryConfig, ConfigError> {
        InventoryConfigBuilder {
            base_url: self.base_url,
            access_token: self.access_token,
            organization_id: self.organization_id,
            user_agent_prefix: self.user_agent_prefix,
        }
        .build()
    }
}

/// Builder for constructing [`InventoryConfig`] instances.
///
/// The only required field is `access_token`.
///
/// # Defaults
///
/// - `base_url`: `https://inventory.zoho.com/api/v1`
/// - `organization_id`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use zoho_inventory::{InventoryConfig, AccessToken, BaseUrl, OrganizationId};
///
/// let config = InventoryConfig::builder()
///     .access_token(AccessToken::new("my-token").unwrap())
///     .base_url(BaseUrl::new("https://inventory.zoho.eu/api/v1").unwrap())
///     .organization_id(OrganizationId::new("10234695").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct InventoryConfigBuilder {
    base_url: Option<BaseUrl>,
    access_token: Option<AccessToken>,
    organization_id: Option<OrganizationId>,
    user_agent_prefix: Option<String>,
}

impl InventoryConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the organization id.
    #[must_use]
    pub fn organization_id(mut self, id: OrganizationId) -> Self {
        self.organization_id = Some(id);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`InventoryConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<InventoryConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(InventoryConfig {
            base_url: self.base_url.unwrap_or_default(),
            access_token,
            organization_id: self.organization_id,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
