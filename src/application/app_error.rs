use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Email already on waitlist")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message sent to the client. Never includes the inner detail strings.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidEmail => "Invalid email address.",
            AppError::DuplicateEmail => "Email already on waitlist.",
            AppError::Database(_) => "Server error.",
            AppError::Internal(_) => "An unexpected error occurred.",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidEmail | AppError::DuplicateEmail)
    }
}

pub type AppResult<T> = Result<T, AppError>;
