//! HTTP request handlers for the Invoice Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::price_invoice;
use crate::models::Invoice;

use super::request::PricingRequest;
use super::response::{ApiError, ApiErrorResponse, PricingResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/price", post(price_handler))
        .with_state(state)
}

/// Handler for POST /price endpoint.
///
/// Accepts a pricing request and returns the priced invoice.
async fn price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pricing request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let invoice: Invoice = request.invoice.into();

    // Perform the pricing
    let start_time = Instant::now();
    match price_invoice(&invoice, state.config().config()) {
        Ok(quote) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                invoice_id = %quote.invoice_id,
                items_count = invoice.items.len(),
                total = %quote.total,
                warnings_count = quote.warnings.len(),
                duration_us = duration.as_micros(),
                "Pricing completed successfully"
            );
            let response = PricingResponse::from_quote(quote, duration.as_micros() as u64);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                invoice_id = %invoice.invoice_id,
                error = %err,
                "Pricing failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
