use thiserror::Error;

/// Errors produced by the payout workflow.
#[derive(Debug, Error)]
pub enum PayoutError {
    /// Caller input rejected before any reference was generated or any
    /// remote call was made.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider base URL or secret key not configured.
    #[error("Missing API configuration")]
    MissingConfig,

    /// The provider answered with a client or server error status.
    #[error("API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// The provider was unreachable or the request timed out.
    #[error("http error: {0}")]
    Http(String),

    /// The provider answered 2xx but the body was not what the workflow
    /// needs (not JSON, or missing the quote id).
    #[error("unexpected provider response: {0}")]
    BadResponse(String),
}

impl PayoutError {
    /// Stable label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PayoutError::InvalidRequest(_) => "invalid_request",
            PayoutError::MissingConfig => "missing_config",
            PayoutError::Upstream { .. } => "upstream",
            PayoutError::Http(_) => "http",
            PayoutError::BadResponse(_) => "bad_response",
        }
    }

    /// True for failures the caller can fix by correcting the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PayoutError::InvalidRequest(_))
    }
}

/// Terminal failure of one payout attempt.
///
/// `reference` is the correlation id generated for this attempt. It is
/// `None` only when validation rejected the input before a reference
/// existed; every later failure carries it so operators can match logs and
/// support tickets against the provider's records.
#[derive(Debug)]
pub struct PayoutFailure {
    pub reference: Option<String>,
    pub error: PayoutError,
}

impl std::fmt::Display for PayoutFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reference {
            Some(reference) => write!(f, "{} (reference {})", self.error, reference),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for PayoutFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
