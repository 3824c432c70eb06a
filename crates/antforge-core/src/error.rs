//! Error types for AntForge

use thiserror::Error;

/// Main error type for AntForge operations
#[derive(Debug, Error, PartialEq)]
pub enum AntForgeError {
    /// Values and weights describe a different number of items
    #[error("Invalid instance: {values} values but {weights} weights")]
    InvalidInstance { values: usize, weights: usize },

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for AntForge operations
pub type Result<T> = std::result::Result<T, AntForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_instance_message() {
        let err = AntForgeError::InvalidInstance {
            values: 3,
            weights: 2,
        };
        assert_eq!(err.to_string(), "Invalid instance: 3 values but 2 weights");
    }

    #[test]
    fn test_config_message() {
        let err = AntForgeError::Config("rho is NaN".to_string());
        assert_eq!(err.to_string(), "Configuration error: rho is NaN");
    }
}
