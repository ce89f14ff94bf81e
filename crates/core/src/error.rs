//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// `NotFound` and `InsufficientStock` render the same text: a failed sale
/// reads identically whatever the cause. Match on the variant to tell them
/// apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No fruit with that name is in stock.
    #[error("Not enough {name} or unknown fruit")]
    NotFound { name: String },

    /// The fruit exists but holds less than requested.
    #[error("Not enough {name} or unknown fruit")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },
}

impl DomainError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn insufficient_stock(name: impl Into<String>, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_failures_share_one_message() {
        let missing = DomainError::not_found("Kiwi");
        let short = DomainError::insufficient_stock("Kiwi", 3, 1);
        assert_ne!(missing, short);
        assert_eq!(missing.to_string(), "Not enough Kiwi or unknown fruit");
        assert_eq!(missing.to_string(), short.to_string());
    }
}
