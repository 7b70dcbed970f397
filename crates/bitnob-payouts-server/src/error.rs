use actix_web::{HttpResponse, ResponseError};
use payouts::{PayoutError, PayoutFailure};

/// Render malformed request bodies as the payout API's 400 shape instead of
/// actix's default error page.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = serde_json::json!({ "message": format!("Invalid request: {err}") });
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

/// HTTP rendering of a failed payout attempt.
///
/// Validation failures are the caller's fault and come back as 400 with no
/// `reference` key. Everything after reference generation is a 500 that
/// carries the reference so the caller can correlate a retry or a support
/// inquiry with this attempt.
#[derive(Debug)]
pub struct ApiError(pub PayoutFailure);

impl From<PayoutFailure> for ApiError {
    fn from(failure: PayoutFailure) -> Self {
        ApiError(failure)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let PayoutFailure { reference, error } = &self.0;
        match error {
            PayoutError::InvalidRequest(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "message": error.to_string(),
            })),
            PayoutError::MissingConfig => {
                tracing::error!(reference = reference.as_deref(), "payout failed: {error}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": error.to_string(),
                    "reference": reference,
                }))
            }
            PayoutError::Upstream { .. } | PayoutError::Http(_) | PayoutError::BadResponse(_) => {
                tracing::error!(reference = reference.as_deref(), "payout failed: {error}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": format!("Payout failed: {error}"),
                    "reference": reference,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = resp.into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn invalid_request_renders_400_without_reference() {
        let resp = ApiError(PayoutFailure {
            reference: None,
            error: PayoutError::InvalidRequest("name and accountNumber are required".to_string()),
        })
        .error_response();

        assert_eq!(resp.status(), 400);
        let body = body_json(resp);
        assert_eq!(
            body["message"],
            "Invalid request: name and accountNumber are required"
        );
        assert!(body.get("reference").is_none());
    }

    #[test]
    fn missing_config_renders_500_with_reference() {
        let resp = ApiError(PayoutFailure {
            reference: Some("ref-1".to_string()),
            error: PayoutError::MissingConfig,
        })
        .error_response();

        assert_eq!(resp.status(), 500);
        let body = body_json(resp);
        assert_eq!(body["message"], "Missing API configuration");
        assert_eq!(body["reference"], "ref-1");
    }

    #[test]
    fn upstream_renders_500_with_status_and_body() {
        let resp = ApiError(PayoutFailure {
            reference: Some("ref-2".to_string()),
            error: PayoutError::Upstream {
                status: 401,
                body: "invalid api key".to_string(),
            },
        })
        .error_response();

        assert_eq!(resp.status(), 500);
        let body = body_json(resp);
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Payout failed"));
        assert!(message.contains("401"));
        assert!(message.contains("invalid api key"));
        assert_eq!(body["reference"], "ref-2");
    }
}
