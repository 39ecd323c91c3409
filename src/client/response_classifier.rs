use reqwest::StatusCode;

pub const NOT_FOUND_MESSAGE: &str = "Your searched information does not exists";
pub const INVALID_INPUT_MESSAGE: &str = "You have searched for an Invalid information";
pub const AUTH_FAILURE_MESSAGE: &str =
    "Application facing authentication error with service provider";
pub const UNAVAILABLE_MESSAGE: &str = "API is currently unavailable";
pub const INTERNAL_ERROR_MESSAGE: &str = "Application is facing internal issues. Please try later";

/// Failure categories surfaced to callers. Each kind carries one fixed, user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    AuthFailure,
    Unavailable,
    InternalError,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => NOT_FOUND_MESSAGE,
            ErrorKind::InvalidInput => INVALID_INPUT_MESSAGE,
            ErrorKind::AuthFailure => AUTH_FAILURE_MESSAGE,
            ErrorKind::Unavailable => UNAVAILABLE_MESSAGE,
            ErrorKind::InternalError => INTERNAL_ERROR_MESSAGE,
        }
    }
}

/// Maps an upstream response status onto an error kind.
///
/// Returns `None` for any 2xx status. The checks run 404, then 400, then 401;
/// every other status lands on `Unavailable`.
pub fn classify(status: StatusCode) -> Option<ErrorKind> {
    if status.is_success() {
        return None;
    }

    if status == StatusCode::NOT_FOUND {
        Some(ErrorKind::NotFound)
    } else if status == StatusCode::BAD_REQUEST {
        Some(ErrorKind::InvalidInput)
    } else if status == StatusCode::UNAUTHORIZED {
        Some(ErrorKind::AuthFailure)
    } else {
        Some(ErrorKind::Unavailable)
    }
}
