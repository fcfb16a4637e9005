//! Error types for Zoho Inventory API calls.
//!
//! # Error Handling
//!
//! Every failed call yields an [`InventoryError`]. Its [`ErrorKind`] tells
//! the caller which layer failed without inspecting message text:
//!
//! - [`ErrorKind::Transport`]: the request never produced a readable response
//! - [`ErrorKind::Api`]: Zoho answered with a non-zero envelope `code`
//! - [`ErrorKind::MalformedResponse`]: Zoho answered with a body that is not
//!   a valid envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use zoho_inventory::{ErrorKind, InventoryError};
//!
//! match client.get_item(Some("4815000000044208")).await {
//!     Ok(response) => println!("Item: {}", response.as_value()["item"]),
//!     Err(InventoryError::Api { code, message }) => {
//!         println!("Zoho error {code}: {message}");
//!     }
//!     Err(e) if e.kind() == Some(ErrorKind::Transport) => {
//!         println!("Network problem: {e}");
//!     }
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Discriminant for the failures recorded by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection, DNS, TLS or body-read failure.
    Transport,
    /// The API reported a non-zero status code.
    Api,
    /// The response body was not a valid API envelope.
    MalformedResponse,
}

impl ErrorKind {
    /// Returns the kind name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Api => "api",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`InventoryClient`](crate::InventoryClient) operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The HTTP exchange itself failed.
    ///
    /// `code` is always `0`: the transport has no numeric error codes, and
    /// HTTP statuses are left to the response envelope.
    #[error("Transport error ({code}): {message}")]
    Transport {
        /// Always `0` for transport failures.
        code: i64,
        /// The transport's description of the failure.
        message: String,
    },

    /// The API answered with a non-zero `code`.
    #[error("Zoho error ({code}): {message}")]
    Api {
        /// The envelope `code`.
        code: i64,
        /// The envelope `message`, empty when the API sent none.
        message: String,
    },

    /// The API answered, but the body is not a JSON object with an integer `code`.
    #[error("Malformed response (HTTP {status}): {message}")]
    MalformedResponse {
        /// The HTTP status of the response.
        status: u16,
        /// What was wrong with the body.
        message: String,
    },

    /// The request payload could not be serialized. No request was sent.
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InventoryError {
    /// Returns the failure kind, or `None` for errors raised before any
    /// request was sent.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Transport { .. } => Some(ErrorKind::Transport),
            Self::Api { .. } => Some(ErrorKind::Api),
            Self::MalformedResponse { .. } => Some(ErrorKind::MalformedResponse),
            Self::Serialization(_) => None,
        }
    }

    /// Returns the numeric code carried by the error.
    ///
    /// For malformed responses this is the HTTP status.
    #[must_use]
    pub fn code(&self) -> i64 {
        match self {
            Self::Transport { code, .. } | Self::Api { code, .. } => *code,
            Self::MalformedResponse { status, .. } => i64::from(*status),
            Self::Serialization(_) => 0,
        }
    }

    /// Returns the message carried by the error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Transport { message, .. }
            | Self::Api { message, .. }
            | Self::MalformedResponse { message, .. } => message.clone(),
            Self::Serialization(e) => e.to_string(),
        }
    }

    /// Converts the error into a [`LastError`] record, if it is a recorded kind.
    #[must_use]
    pub fn to_last_error(&self) -> Option<LastError> {
        self.kind().map(|kind| LastError {
            kind,
            code: self.code(),
            message: self.message(),
        })
    }
}

impl From<reqwest::Error> for InventoryError {
    fn from(error: reqwest::Error) -> Self {
        // The URL carries the access token in its query string.
        let error = error.without_url();
        Self::Transport {
            code: 0,
            message: error.to_string(),
        }
    }
}

/// The most recent failure seen by a client.
///
/// Kept on the client for inspection after a failed call. See
/// [`InventoryClient::last_error`](crate::InventoryClient::last_error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastError {
    /// Which layer failed.
    pub kind: ErrorKind,
    /// The transport code, API code, or HTTP status.
    pub code: i64,
    /// The failure description.
    pub message: String,
}
