//! HTTP client types for Zoho Inventory API communication.
//!
//! This module provides the layers that turn a method call into an HTTP
//! exchange and back.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`InventoryClient`]: One method per Zoho Inventory resource or action
//! - [`RequestSpec`]: A request before auth and encoding are applied
//! - [`HttpClient`]: The async transport
//! - [`ApiResponse`]: A decoded, successful response envelope
//! - [`InventoryError`]: Error type for all API calls, tagged by [`ErrorKind`]
//! - [`LastError`]: The failure record kept on each client
//!
//! # Pipeline
//!
//! Each call runs the same steps: build a [`RequestSpec`], merge the
//! `authtoken` parameter, encode it into the query string (GET, PUT,
//! DELETE) or body (POST), send it once, then decode the envelope. A
//! `code` of `0` is success; anything else is an [`InventoryError::Api`].
//!
//! # Example
//!
//! ```rust,ignore
//! use zoho_inventory::{AccessToken, InventoryClient, InventoryConfig};
//!
//! let config = InventoryConfig::builder()
//!     .access_token(AccessToken::new("your-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = InventoryClient::new(&config);
//! let response = client.get_organizations_info().await?;
//! println!("{}", response.as_value());
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod inventory;

pub use errors::{ErrorKind, InventoryError, LastError};
pub use http_client::{HttpClient, RawResponse, FORM_CONTENT_TYPE, SDK_VERSION};
pub use http_request::{
    encode_params, join_url, params_with_auth, HttpMethod, PreparedRequest, RequestSpec,
    AUTH_PARAM,
};
pub use http_response::{decode_envelope, ApiResponse};

pub use inventory::{InventoryClient, JSON_STRING_PARAM};
