//! Error types for the Zoho Inventory client.
//!
//! This module contains the configuration and validation errors raised while
//! building an [`InventoryConfig`](crate::InventoryConfig). Errors raised by
//! API calls live in [`clients`](crate::clients).
//!
//! # Example
//!
//! ```rust
//! use zoho_inventory::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant carries a message that tells the caller what to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Zoho Inventory auth token.")]
    EmptyAccessToken,

    /// Organization id cannot be empty when provided.
    #[error("Organization id cannot be empty. Omit it or provide a valid organization id.")]
    EmptyOrganizationId,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://inventory.zoho.com/api/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A settings document could not be read: bad JSON, an unknown or
    /// repeated field, or a value that failed validation.
    #[error("Invalid settings: {reason}")]
    InvalidSettings {
        /// Why the settings were rejected.
        reason: String,
    },
}
