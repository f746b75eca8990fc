use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("model not fitted, call fit() first")]
    NotFitted,
    #[error("invalid hyperparameter `{name}`: {reason}")]
    InvalidHyperparameter { name: &'static str, reason: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ModelError {
    pub fn shape(message: impl Into<String>) -> Self {
        ModelError::ShapeMismatch(message.into())
    }

    pub fn hyperparameter(name: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidHyperparameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ModelError::shape("X has 5 rows but y has 4 entries");
        assert_eq!(err.to_string(), "shape mismatch: X has 5 rows but y has 4 entries");

        let err = ModelError::hyperparameter("learning_rate", "must be positive, got -1");
        assert!(err.to_string().contains("learning_rate"));

        assert!(ModelError::NotFitted.to_string().contains("fit()"));
    }
}
