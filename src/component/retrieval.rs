use crate::client::zendesk_rest_client::ZendeskClientError;

/// Informational note attached to a successful page that holds no tickets.
pub const NO_TICKETS_FOUND: &str = "No tickets found";

/// Outcome of one retrieval call: either the data, or a user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalResult<T> {
    Success {
        data: T,
        notice: Option<&'static str>,
    },
    Failure {
        message: String,
    },
}

impl<T> RetrievalResult<T> {
    pub fn success(data: T) -> Self {
        RetrievalResult::Success { data, notice: None }
    }

    pub fn success_with_notice(data: T, notice: &'static str) -> Self {
        RetrievalResult::Success {
            data,
            notice: Some(notice),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        RetrievalResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RetrievalResult::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RetrievalResult::Success { data, .. } => Some(data),
            RetrievalResult::Failure { .. } => None,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RetrievalResult::Success { notice, .. } => *notice,
            RetrievalResult::Failure { .. } => None,
        }
    }

    /// The failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            RetrievalResult::Success { .. } => None,
            RetrievalResult::Failure { message } => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            RetrievalResult::Success { data, .. } => Ok(data),
            RetrievalResult::Failure { message } => Err(message),
        }
    }
}

/// Converts a client error into a failure carrying only the user-facing message.
///
/// Classified upstream errors keep their own message; everything else gets the
/// generic internal-issue message. The underlying cause goes to the log only.
pub fn handle_error<T>(error: &ZendeskClientError) -> RetrievalResult<T> {
    tracing::error!(error = %error, "Ticket retrieval failed");
    RetrievalResult::failure(error.kind().message())
}
