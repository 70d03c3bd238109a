//! Error types for the Invoice Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading pricing rules or
//! pricing an invoice.

use thiserror::Error;

/// The main error type for the Invoice Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pricing_engine::error::PricingError;
///
/// let error = PricingError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PricingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The invoice failed one or more structural validation checks.
    ///
    /// The message lists every detected problem, joined by `"; "`. The
    /// invoice must be corrected and resubmitted; no partial total is
    /// produced.
    #[error("Invalid invoice: {message}")]
    InvalidInvoice {
        /// All validation problems, joined by `"; "`.
        message: String,
    },
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;
