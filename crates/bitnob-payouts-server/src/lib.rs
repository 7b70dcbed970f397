//! HTTP service for the Bitnob NGN payout faucet.
//!
//! One payout endpoint in front of the [`payouts`] workflow library, plus the
//! service plumbing: CORS, rate limiting, Prometheus metrics, health probe
//! and a static landing page.
//!
//! # Modules
//!
//! - [`config`] — Server configuration from the environment ([`ServerConfig`])
//! - [`state`] — Shared per-worker state ([`AppState`])
//! - [`routes`] — HTTP handlers and their registration
//! - [`error`] — HTTP rendering of workflow failures ([`ApiError`](error::ApiError))
//! - [`cors`] — CORS policy
//! - [`metrics`] — Prometheus counters and histograms

pub mod config;
pub mod cors;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
