use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};
use std::sync::LazyLock;

pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

pub static PAYOUTS_STARTED: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "faucet_payouts_started_total",
        "Payout workflows accepted by the provider (all three steps)",
    )
    .unwrap()
});

pub static PAYOUTS_FAILED: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new("faucet_payouts_failed_total", "Failed payout attempts"),
        &["kind"],
    )
    .unwrap()
});

pub static PAYOUT_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "faucet_payout_duration_seconds",
            "End-to-end payout endpoint latency",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

/// Register all metrics with the registry
pub fn register_metrics() {
    REGISTRY
        .register(Box::new(PAYOUTS_STARTED.clone()))
        .unwrap();
    REGISTRY.register(Box::new(PAYOUTS_FAILED.clone())).unwrap();
    REGISTRY
        .register(Box::new(PAYOUT_DURATION.clone()))
        .unwrap();
}
