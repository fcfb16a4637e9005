//! Resource methods and the shared request pipeline.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::clients::errors::{InventoryError, LastError};
use crate::clients::http_request::{encode_params, params_with_auth};
use crate::clients::http_response::decode_envelope;
use crate::clients::{ApiResponse, HttpClient, HttpMethod, RequestSpec};
use crate::config::{AccessToken, BaseUrl, InventoryConfig, OrganizationId};

/// Parameter carrying the JSON payload of create and update calls.
pub const JSON_STRING_PARAM: &str = "JSONString";

/// Client for the Zoho Inventory REST API.
///
/// Each method performs exactly one HTTP round trip and resolves once the
/// response has been received and classified.
///
/// # Thread Safety
///
/// `InventoryClient` is `Send + Sync`. Calls may run concurrently, but they
/// share one last-error record: with overlapping calls on the same client,
/// [`last_error`](Self::last_error) reflects whichever failed last.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use zoho_inventory::{AccessToken, InventoryClient, InventoryConfig};
///
/// let config = InventoryConfig::builder()
///     .access_token(AccessToken::new("your-auth-token").unwrap())
///     .build()
///     .unwrap();
/// let client = InventoryClient::new(&config);
///
/// let created = client
///     .create_item(&json!({"name": "Bolt M6", "rate": 0.15}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct InventoryClient {
    /// The transport for all requests.
    http_client: HttpClient,
    /// Token injected as `authtoken` into every request.
    access_token: AccessToken,
    /// Carried for the caller; never sent automatically.
    organization_id: Option<OrganizationId>,
    /// The most recent recorded failure.
    last_error: Mutex<Option<LastError>>,
}

// Verify InventoryClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InventoryClient>();
};

impl InventoryClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created; see
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &InventoryConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            access_token: config.access_token().clone(),
            organization_id: config.organization_id().cloned(),
            last_error: Mutex::new(None),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.http_client.base_url()
    }

    /// Returns the access token currently in use.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Replaces the access token used for subsequent requests.
    pub fn set_access_token(&mut self, token: AccessToken) {
        tracing::debug!("Zoho Inventory client access token replaced");
        self.access_token = token;
    }

    /// Returns the organization id from the configuration, if any.
    #[must_use]
    pub const fn organization_id(&self) -> Option<&OrganizationId> {
        self.organization_id.as_ref()
    }

    /// Returns the most recent failure recorded by this client.
    ///
    /// Successful calls leave the record untouched.
    #[must_use]
    pub fn last_error(&self) -> Option<LastError> {
        self.last_error_slot().clone()
    }

    /// Clears the last-error record.
    pub fn clear_last_error(&self) {
        *self.last_error_slot() = None;
    }

    /// Merges the access token into `params`, as done for every request.
    #[must_use]
    pub fn params_with_auth(&self, params: &[(String, String)]) -> Vec<(String, String)> {
        params_with_auth(&self.access_token, params)
    }

    /// Merges the access token into `params` and URL-encodes the result.
    #[must_use]
    pub fn params_query(&self, params: &[(String, String)]) -> String {
        encode_params(&self.params_with_auth(params))
    }

    /// Fetches one item, or lists all items when `item_id` is `None`.
    ///
    /// Sends `GET /items/{item_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    pub async fn get_item(&self, item_id: Option<&str>) -> Result<ApiResponse, InventoryError> {
        let path = format!("/items/{}", path_segment(item_id.unwrap_or_default()));
        self.make_request(RequestSpec::new(HttpMethod::Get, path)).await
    }

    /// Searches items by text.
    ///
    /// Equivalent to [`get_items`](Self::get_items) with a `search_text` filter.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    pub async fn search_item(&self, search_text: &str) -> Result<ApiResponse, InventoryError> {
        let filter = HashMap::from([("search_text".to_string(), search_text.to_string())]);
        self.get_items(Some(filter)).await
    }

    /// Lists items, passing `filter` through as query parameters.
    ///
    /// Sends `GET /items/`. Paging is left to the caller through the
    /// API's own `page` and `per_page` filters.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut filter = HashMap::new();
    /// filter.insert("page".to_string(), "2".to_string());
    /// let response = client.get_items(Some(filter)).await?;
    /// ```
    pub async fn get_items(
        &self,
        filter: Option<HashMap<String, String>>,
    ) -> Result<ApiResponse, InventoryError> {
        let mut params: Vec<(String, String)> = filter.unwrap_or_default().into_iter().collect();
        params.sort();

        self.make_request(RequestSpec::new(HttpMethod::Get, "/items/").params(params)).await
    }

    /// Fetches the organizations visible to the access token.
    ///
    /// Sends `GET /organizations`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    pub async fn get_organizations_info(&self) -> Result<ApiResponse, InventoryError> {
        self.make_request(RequestSpec::new(HttpMethod::Get, "/organizations")).await
    }

    /// Fetches one item group.
    ///
    /// Sends `GET /itemgroups/{group_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    pub async fn get_item_group(&self, group_id: &str) -> Result<ApiResponse, InventoryError> {
        let path = format!("/itemgroups/{}", path_segment(group_id));
        self.make_request(RequestSpec::new(HttpMethod::Get, path)).await
    }

    /// Creates an item.
    ///
    /// Sends `POST /items` with `params` serialized into `JSONString`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Serialization`] if `params` cannot be
    /// serialized, otherwise [`InventoryError`] on transport, API, or
    /// decoding failure.
    pub async fn create_item<T>(&self, params: &T) -> Result<ApiResponse, InventoryError>
    where
        T: Serialize + ?Sized,
    {
        let spec = RequestSpec::new(HttpMethod::Post, "/items")
            .param(JSON_STRING_PARAM, serde_json::to_string(params)?);
        self.make_request(spec).await
    }

    /// Updates an item.
    ///
    /// Sends `PUT /items/{item_id}` with `updates` serialized into `JSONString`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Serialization`] if `updates` cannot be
    /// serialized, otherwise [`InventoryError`] on transport, API, or
    /// decoding failure.
    pub async fn update_item<T>(
        &self,
        item_id: &str,
        updates: &T,
    ) -> Result<ApiResponse, InventoryError>
    where
        T: Serialize + ?Sized,
    {
        let path = format!("/items/{}", path_segment(item_id));
        let spec = RequestSpec::new(HttpMethod::Put, path)
            .param(JSON_STRING_PARAM, serde_json::to_string(updates)?);
        self.make_request(spec).await
    }

    /// Deletes a purchase order.
    ///
    /// Sends `DELETE /purchaseorders/{purchase_order_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    pub async fn delete_purchase_order(
        &self,
        purchase_order_id: &str,
    ) -> Result<ApiResponse, InventoryError> {
        let path = format!("/purchaseorders/{}", path_segment(purchase_order_id));
        self.make_request(RequestSpec::new(HttpMethod::Delete, path)).await
    }

    /// Creates a purchase order.
    ///
    /// Sends `POST /purchaseorders?ignore_auto_number_generation={true|false}`
    /// with `params` serialized into `JSONString`. Pass `true` to keep a
    /// purchase order number supplied in `params` instead of letting Zoho
    /// generate one.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Serialization`] if `params` cannot be
    /// serialized, otherwise [`InventoryError`] on transport, API, or
    /// decoding failure.
    pub async fn create_purchase_order<T>(
        &self,
        params: &T,
        ignore_auto_number: bool,
    ) -> Result<ApiResponse, InventoryError>
    where
        T: Serialize + ?Sized,
    {
        let path = format!("/purchaseorders?ignore_auto_number_generation={ignore_auto_number}");
        let spec = RequestSpec::new(HttpMethod::Post, path)
            .param(JSON_STRING_PARAM, serde_json::to_string(params)?);
        self.make_request(spec).await
    }

    /// Fetches one purchase order.
    ///
    /// Sends `GET /purchaseorders/{purchase_order_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] on transport, API, or decoding failure.
    pub async fn get_purchase_order(
        &self,
        purchase_order_id: &str,
    ) -> Result<ApiResponse, InventoryError> {
        let path = format!("/purchaseorders/{}", path_segment(purchase_order_id));
        self.make_request(RequestSpec::new(HttpMethod::Get, path)).await
    }

    /// Internal helper to send a request and classify the response.
    async fn make_request(&self, spec: RequestSpec) -> Result<ApiResponse, InventoryError> {
        tracing::debug!(
            "Sending {} request to Zoho Inventory at {}",
            spec.http_method,
            spec.path
        );

        let prepared = spec.prepare(self.base_url(), &self.access_token);

        // A transport failure returns here, before any body is decoded.
        let raw = match self.http_client.send(&prepared).await {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(
                    "Zoho Inventory {} request to {} failed: {}",
                    spec.http_method,
                    spec.path,
                    error
                );
                self.record_error(&error);
                return Err(error);
            }
        };

        match decode_envelope(raw.status, &raw.body) {
            Ok(response) => {
                tracing::debug!(
                    "Zoho Inventory {} {} succeeded with HTTP {}",
                    spec.http_method,
                    spec.path,
                    raw.status
                );
                Ok(response)
            }
            Err(error) => {
                tracing::warn!(
                    "Zoho Inventory {} {} returned HTTP {}: {}",
                    spec.http_method,
                    spec.path,
                    raw.status,
                    error
                );
                self.record_error(&error);
                Err(error)
            }
        }
    }

    fn record_error(&self, error: &InventoryError) {
        if let Some(record) = error.to_last_error() {
            *self.last_error_slot() = Some(record);
        }
    }

    fn last_error_slot(&self) -> MutexGuard<'_, Option<LastError>> {
        // The record is a plain value, so a poisoned lock still holds a usable one.
        self.last_error.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Percent-encodes an id for use as a single path segment.
fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
