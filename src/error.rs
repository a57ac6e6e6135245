//! Error types for summary email assembly

use thiserror::Error;

/// Errors that can occur while decoding inputs or assembling a summary email.
///
/// Rendering itself never fails; only the edges that accept external data do.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// Failed to decode a sender-details mapping
    #[error("Failed to decode sender details: {0}")]
    SenderDetails(String),

    /// Failed to decode a send request
    #[error("Failed to decode email request: {0}")]
    Request(String),

    /// Failed to decode branding configuration
    #[error("Failed to decode branding: {0}")]
    Branding(String),

    /// No usable recipient was supplied
    #[error("At least one recipient is required")]
    NoRecipients,

    /// Recipient address is not of the form local@domain.tld
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
}

/// Result type for summary email operations
pub type Result<T> = std::result::Result<T, ComposeError>;
