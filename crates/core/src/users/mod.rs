mod error;
mod operations;
mod types;

pub use error::UserValidationError;
pub use operations::validate_new_user;
pub use types::{NewUser, User};
