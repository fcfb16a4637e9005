//! # Zoho Inventory API Rust Client
//!
//! A Rust client for the Zoho Inventory REST API, covering items, item
//! groups, purchase orders and organization info.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`InventoryConfig`] and [`InventoryConfigBuilder`]
//! - Validated newtypes for the access token, base URL and organization id
//! - Loading configuration from externally provided JSON settings
//! - An async [`InventoryClient`] with one method per remote resource or action
//! - Errors tagged by [`ErrorKind`], plus a last-error record on each client
//!
//! ## Quick Start
//!
//! ```rust
//! use zoho_inventory::{AccessToken, InventoryClient, InventoryConfig, OrganizationId};
//!
//! let config = InventoryConfig::builder()
//!     .access_token(AccessToken::new("your-auth-token").unwrap())
//!     .organization_id(OrganizationId::new("10234695").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = InventoryClient::new(&config);
//! assert_eq!(client.base_url().as_ref(), "https://inventory.zoho.com/api/v1");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! // List or search items
//! let all_items = client.get_items(None).await?;
//! let matches = client.search_item("bolt").await?;
//!
//! // Create an item, then update it
//! let created = client.create_item(&json!({"name": "Bolt M6", "rate": 0.15})).await?;
//! let item_id = created.as_value()["item"]["item_id"].as_str().unwrap().to_string();
//! client.update_item(&item_id, &json!({"rate": 0.18})).await?;
//!
//! // Purchase orders, keeping our own number
//! let po = client
//!     .create_purchase_order(&json!({"purchaseorder_number": "PO-0042"}), true)
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use zoho_inventory::{ErrorKind, InventoryError};
//!
//! match client.get_item(Some("4815000000044208")).await {
//!     Ok(response) => println!("{}", response.as_value()),
//!     Err(InventoryError::Api { code, message }) => println!("Zoho error {code}: {message}"),
//!     Err(e) => println!("Failed: {e}"),
//! }
//!
//! // The failure is also kept on the client
//! if let Some(last) = client.last_error() {
//!     assert_eq!(last.kind, ErrorKind::Api);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One round trip per call**: No retries, pagination or caching

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, InventoryConfig, InventoryConfigBuilder, OrganizationId};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiResponse, ErrorKind, HttpClient, HttpMethod, InventoryClient, InventoryError, LastError,
    RequestSpec,
};
