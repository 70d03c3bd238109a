//! Response types for the Invoice Pricing Engine API.
//!
//! This module defines the success envelope and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PricingError;
use crate::models::{PriceBreakdown, PriceQuote};

/// Success response for the `/price` endpoint.
///
/// Wraps a [`PriceQuote`] with per-request metadata assembled in the
/// handler so the quote itself stays a pure function of its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResponse {
    /// Unique identifier for this pricing call.
    pub pricing_id: Uuid,
    /// When the pricing was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that priced the invoice.
    pub engine_version: String,
    /// The ID of the invoice that was priced.
    pub invoice_id: String,
    /// The ID of the customer the invoice belongs to.
    pub customer_id: String,
    /// Component amounts that were assembled into the total.
    pub breakdown: PriceBreakdown,
    /// Final payable amount.
    pub total: Decimal,
    /// Advisory warnings, in emission order.
    pub warnings: Vec<String>,
    /// Server-side pricing duration in microseconds.
    pub duration_us: u64,
}

impl PricingResponse {
    /// Wraps a quote with request metadata.
    pub fn from_quote(quote: PriceQuote, duration_us: u64) -> Self {
        Self {
            pricing_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            invoice_id: quote.invoice_id,
            customer_id: quote.customer_id,
            breakdown: quote.breakdown,
            total: quote.total,
            warnings: quote.warnings,
            duration_us,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PricingError> for ApiErrorResponse {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PricingError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PricingError::InvalidInvoice { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    "The invoice failed one or more validation checks",
                ),
            },
        }
    }
}
