use thiserror::Error;

/// Errors raised when user input fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Name is required")]
    EmptyName,
    #[error("Email is required")]
    EmptyEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(UserValidationError::EmptyName.to_string(), "Name is required");
        assert_eq!(
            UserValidationError::EmptyEmail.to_string(),
            "Email is required"
        );
    }
}
