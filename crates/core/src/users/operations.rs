//! Pure operations on user input.

use super::{NewUser, UserValidationError};

/// Validates a user before it is handed to a store.
///
/// Both the name and the email must contain something other than whitespace.
/// The name is checked first.
pub fn validate_new_user(user: &NewUser) -> Result<(), UserValidationError> {
    if user.name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    if user.email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_passes() {
        let user = NewUser::new("Bob", "b@x.com");

        assert_eq!(validate_new_user(&user), Ok(()));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let user = NewUser::new("", "e@x.com");

        assert_eq!(
            validate_new_user(&user),
            Err(UserValidationError::EmptyName)
        );
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let user = NewUser::new("n", "");

        assert_eq!(
            validate_new_user(&user),
            Err(UserValidationError::EmptyEmail)
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_rejected() {
        assert_eq!(
            validate_new_user(&NewUser::new("   ", "e@x.com")),
            Err(UserValidationError::EmptyName)
        );
        assert_eq!(
            validate_new_user(&NewUser::new("n", "\t\n")),
            Err(UserValidationError::EmptyEmail)
        );
    }

    #[test]
    fn test_both_empty_reports_name_first() {
        let user = NewUser::new("", "");

        assert_eq!(
            validate_new_user(&user),
            Err(UserValidationError::EmptyName)
        );
    }
}
