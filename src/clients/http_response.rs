//! Response types for the Zoho Inventory client.
//!
//! Every Zoho Inventory response is wrapped in an envelope carrying a numeric
//! `code` (0 on success) and, on failure, a `message`. This module decodes
//! that envelope into an [`ApiResponse`] or an
//! [`InventoryError`](crate::clients::InventoryError).

use serde_json::Value;

use crate::clients::errors::InventoryError;

/// A successful API response.
///
/// Holds the decoded body exactly as received, including the `code` and
/// `message` fields and any payload (`item`, `items`, `purchaseorder`, ...).
///
/// # Example
///
/// ```rust,ignore
/// let response = client.get_items(None).await?;
/// if let Some(items) = response.get("items").and_then(|v| v.as_array()) {
///     println!("{} items", items.len());
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    status: u16,
    code: i64,
    body: Value,
}

impl ApiResponse {
    /// Returns the HTTP status the response arrived with.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the envelope `code`. Always `0` for a successful response.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Returns the envelope `message`, if present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Returns a top-level field of the body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Returns the whole decoded body.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.body
    }

    /// Consumes the response, returning the decoded body.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.body
    }
}

/// Decodes a response body and classifies it as success or failure.
///
/// # Errors
///
/// Returns [`InventoryError::MalformedResponse`] when the body is not a JSON
/// object with an integer `code`, and [`InventoryError::Api`] when `code` is
/// non-zero.
pub fn decode_envelope(status: u16, text: &str) -> Result<ApiResponse, InventoryError> {
    let malformed = |message: String| InventoryError::MalformedResponse { status, message };

    let body: Value =
        serde_json::from_str(text).map_err(|e| malformed(format!("invalid JSON: {e}")))?;

    if !body.is_object() {
        return Err(malformed("expected a JSON object".to_string()));
    }

    let code = match body.get("code") {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| malformed(format!("'code' is not an integer: {value}")))?,
        None => return Err(malformed("missing 'code' field".to_string())),
    };

    if code != 0 {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(InventoryError::Api { code, message });
    }

    Ok(ApiResponse { status, code, body })
}
