//! Error types for Urban Skate Track

use thiserror::Error;

use crate::donation::ValidationErrors;

/// Main error type for Urban Skate Track operations
#[derive(Error, Debug)]
pub enum SkateError {
    /// One or more donation fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Operation requires a connected wallet
    #[error("Wallet not connected")]
    WalletNotConnected,

    /// Simulated wallet connection failure
    #[error("Failed to connect wallet: {0}")]
    WalletConnection(String),

    /// Simulated payment failure (PIX charge or crypto transfer)
    #[error("Payment failed: {0}")]
    Payment(String),

    /// Simulated minting failure
    #[error("Failed to mint NFT: {0}")]
    Mint(String),

    /// QR code rendering failed
    #[error("QR code error: {0}")]
    QrEncoding(String),

    /// Operation not allowed in the current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Simulation config is out of range
    #[error("Invalid config: {0}")]
    Config(String),

    /// General I/O error (config loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationErrors> for SkateError {
    fn from(errors: ValidationErrors) -> Self {
        SkateError::Validation(errors)
    }
}

/// Result type alias using SkateError
pub type SkateResult<T> = Result<T, SkateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SkateError::Mint("network congested".to_string());
        assert_eq!(format!("{}", err), "Failed to mint NFT: network congested");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SkateError = io_err.into();
        assert!(matches!(err, SkateError::Io(_)));
    }
}
