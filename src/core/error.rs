//! Errors raised by snapshot transformations and container operations.

use thiserror::Error;

/// Errors that can occur while building or applying transformations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("Invalid key {key:?}: keys must be non-empty")]
    InvalidKey { key: String },

    #[error("Amount {amount} for key '{key}' is not a finite number")]
    NonNumericAmount { key: String, amount: f64 },

    #[error("Transform '{transform}' failed: {reason}")]
    TransformFailed { transform: String, reason: String },

    #[error("Key '{key}' is not present in the snapshot")]
    MissingKey { key: String },

    #[error("Key '{key}' does not hold an ability")]
    NotAnAbility { key: String },
}

impl StateError {
    /// Shorthand for a refused fallible transform.
    pub fn transform_failed(transform: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TransformFailed {
            transform: transform.into(),
            reason: reason.into(),
        }
    }
}

/// Validate a snapshot key supplied to a factory.
pub(crate) fn validate_key(key: String) -> Result<String, StateError> {
    if key.trim().is_empty() {
        return Err(StateError::InvalidKey { key });
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_rejected() {
        assert_eq!(
            validate_key("   ".to_string()),
            Err(StateError::InvalidKey {
                key: "   ".to_string()
            })
        );
        assert!(validate_key(String::new()).is_err());
    }

    #[test]
    fn non_empty_keys_pass_through_unchanged() {
        assert_eq!(validate_key(" soil".to_string()).unwrap(), " soil");
    }

    #[test]
    fn messages_name_the_offending_key() {
        let err = StateError::NotAnAbility {
            key: "soil".to_string(),
        };
        assert_eq!(err.to_string(), "Key 'soil' does not hold an ability");

        let err = StateError::transform_failed("wilt", "too dry");
        assert_eq!(err.to_string(), "Transform 'wilt' failed: too dry");
    }
}
