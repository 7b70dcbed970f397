//! Bitnob NGN payout workflow.
//!
//! Drives the three-step payout sequence against the Bitnob API: request a
//! price quote, initialize a payout with that quote, then finalize it. The
//! library is stateless — every payout is a single [`workflow::create_payout`]
//! call that owns all of its data for the duration of one request.
//!
//! Final settlement is asynchronous: a successful workflow means the provider
//! *accepted* all three calls, and the settlement result arrives later on a
//! webhook this crate does not handle.
//!
//! # Modules
//!
//! - [`config`] — Provider base URL and secret key ([`ProviderConfig`])
//! - [`provider`] — Authenticated JSON POST client for the Bitnob API
//! - [`workflow`] — The quote → initialize → finalize orchestration
//! - [`error`] — Error taxonomy ([`PayoutError`], [`PayoutFailure`])

pub mod config;
pub mod error;
pub mod provider;
pub mod workflow;

pub use config::{Credentials, ProviderConfig};
pub use error::{PayoutError, PayoutFailure};
pub use workflow::{create_payout, PayoutReceipt, PayoutRequest, PAYOUT_STARTED_MESSAGE};
