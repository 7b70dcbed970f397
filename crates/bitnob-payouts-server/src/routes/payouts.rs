use actix_web::{web, HttpResponse};
use payouts::PayoutRequest;

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

/// POST /api/v1/payouts - Run the quote → initialize → finalize workflow
///
/// 200 means the provider accepted all three calls; settlement itself is
/// reported later on the provider's webhook.
pub async fn create_payout(
    body: web::Json<PayoutRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let timer = metrics::PAYOUT_DURATION.start_timer();
    let outcome =
        payouts::create_payout(&state.http_client, &state.config.provider, &request).await;
    timer.observe_duration();

    match outcome {
        Ok(receipt) => {
            metrics::PAYOUTS_STARTED.inc();
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": payouts::PAYOUT_STARTED_MESSAGE,
                "reference": receipt.reference,
            })))
        }
        Err(failure) => {
            metrics::PAYOUTS_FAILED
                .with_label_values(&[failure.error.kind()])
                .inc();
            Err(ApiError(failure))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/payouts", web::post().to(create_payout));
}
