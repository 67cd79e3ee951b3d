mod error;
mod exit_codes;
mod traits;

pub use error::{RepositoryError, Result};
pub use exit_codes::repository_error_to_exit_code;
pub use traits::UserRepository;
