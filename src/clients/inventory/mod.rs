//! Resource client for the Zoho Inventory API.
//!
//! This module provides [`InventoryClient`], which exposes one method per
//! remote resource or action (items, item groups, purchase orders,
//! organizations) on top of the [`HttpClient`](crate::clients::HttpClient)
//! transport.
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
//!
//! let items = client.search_item("bolt").await?;
//! let item = client.get_item(Some("4815000000044208")).await?;
//! ```
//!
//! # Request Encoding
//!
//! Every request carries the access token as the `authtoken` parameter.
//! POST requests send their parameters as a form-encoded body; GET, PUT
//! and DELETE requests send them in the query string. Create and update
//! payloads travel as a single `JSONString` parameter holding the JSON
//! serialization of the payload.
//!
//! # Failures
//!
//! Calls are made once, without retries. Every failure is returned to the
//! caller and also recorded on the client; see
//! [`InventoryClient::last_error`].

mod client;

pub use client::{InventoryClient, JSON_STRING_PARAM};
