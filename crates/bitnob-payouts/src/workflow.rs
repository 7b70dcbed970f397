//! The payout orchestration: quote → initialize → finalize.
//!
//! The three provider calls run strictly in sequence — each step's payload
//! depends on the previous step's result — and the first failure aborts the
//! remainder. None of the calls are reversible from here, so there is no
//! compensation: the caller gets the correlation reference and the error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Credentials, ProviderConfig};
use crate::error::{PayoutError, PayoutFailure};
use crate::provider;

/// Settlement amount shared by the quote and every downstream step.
/// Workflow-wide constant; the provider prices the payout from it.
pub const SETTLEMENT_AMOUNT: u64 = 100_000;
/// Bitnob-side test customer the faucet pays out on behalf of.
pub const CUSTOMER_ID: &str = "e22795d9-23f6-48e6-8b30-be5718abd876";
/// Receiving bank for every faucet payout.
pub const BENEFICIARY_BANK: &str = "OPAY";
pub const PAYOUT_COUNTRY: &str = "NG";
pub const PAYMENT_REASON: &str = "Bitnob Nigeria Faucet";

const QUOTE_SOURCE: &str = "offchain";
const QUOTE_FROM_ASSET: &str = "usdt";
const QUOTE_TO_CURRENCY: &str = "ngn";
const BENEFICIARY_TYPE: &str = "BANK";

/// Returned to the caller when all three provider calls were accepted.
/// Acceptance is not settlement: the provider reports the final outcome
/// asynchronously on its webhook.
pub const PAYOUT_STARTED_MESSAGE: &str =
    "Payout process started. Check the webhook site for final confirmation.";

/// Inbound payout request.
///
/// Missing fields deserialize to empty strings so that absent and empty
/// values are rejected by the same validation check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account_number: String,
}

/// Successful workflow result: the correlation reference the caller quotes
/// when asking about this payout.
#[derive(Debug, Clone)]
pub struct PayoutReceipt {
    pub reference: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRequest {
    source: &'static str,
    from_asset: &'static str,
    to_currency: &'static str,
    settlement_amount: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitializeRequest<'a> {
    quote_id: &'a str,
    customer_id: &'static str,
    country: &'static str,
    reference: &'a str,
    payment_reason: &'static str,
    beneficiary: Beneficiary<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Beneficiary<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    account_name: &'a str,
    bank_name: &'static str,
    account_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FinalizeRequest<'a> {
    quote_id: &'a str,
}

/// Run one payout end to end.
///
/// Validation happens before the reference is generated, so a rejected
/// request carries no reference. Every failure after that point does.
pub async fn create_payout(
    client: &reqwest::Client,
    config: &ProviderConfig,
    request: &PayoutRequest,
) -> Result<PayoutReceipt, PayoutFailure> {
    if request.name.trim().is_empty() || request.account_number.trim().is_empty() {
        return Err(PayoutFailure {
            reference: None,
            error: PayoutError::InvalidRequest("name and accountNumber are required".to_string()),
        });
    }

    let reference = Uuid::new_v4().to_string();

    let Some(creds) = config.credentials() else {
        return Err(PayoutFailure {
            reference: Some(reference),
            error: PayoutError::MissingConfig,
        });
    };

    match run_steps(client, creds, request, &reference).await {
        Ok(()) => Ok(PayoutReceipt { reference }),
        Err(error) => Err(PayoutFailure {
            reference: Some(reference),
            error,
        }),
    }
}

async fn run_steps(
    client: &reqwest::Client,
    creds: Credentials<'_>,
    request: &PayoutRequest,
    reference: &str,
) -> Result<(), PayoutError> {
    let base = creds.api_url.trim_end_matches('/');

    // Step 1: price quote
    let quote = provider::post(
        client,
        &format!("{base}/payouts/quotes"),
        creds.secret_key,
        &QuoteRequest {
            source: QUOTE_SOURCE,
            from_asset: QUOTE_FROM_ASSET,
            to_currency: QUOTE_TO_CURRENCY,
            settlement_amount: SETTLEMENT_AMOUNT,
        },
    )
    .await?;

    let quote_id = quote
        .pointer("/data/quoteId")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            PayoutError::BadResponse("quote response missing data.quoteId".to_string())
        })?
        .to_string();

    tracing::info!(step = 1, reference, response = %quote, "quote generated");

    // Step 2: initialize payout against the quote
    let initialized = provider::post(
        client,
        &format!("{base}/payouts/initialize"),
        creds.secret_key,
        &InitializeRequest {
            quote_id: &quote_id,
            customer_id: CUSTOMER_ID,
            country: PAYOUT_COUNTRY,
            reference,
            payment_reason: PAYMENT_REASON,
            beneficiary: Beneficiary {
                kind: BENEFICIARY_TYPE,
                account_name: &request.name,
                bank_name: BENEFICIARY_BANK,
                account_number: &request.account_number,
            },
        },
    )
    .await?;

    tracing::info!(step = 2, reference, response = %initialized, "payout initialized");

    // Step 3: finalize
    let finalized = provider::post(
        client,
        &format!("{base}/payouts/finalize"),
        creds.secret_key,
        &FinalizeRequest {
            quote_id: &quote_id,
        },
    )
    .await?;

    tracing::info!(step = 3, reference, response = %finalized, "payout finalized");

    Ok(())
}
