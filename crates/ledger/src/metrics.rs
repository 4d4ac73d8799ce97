//! Operation metrics for the ledger.
//!
//! Metrics go through the `metrics` facade; without an installed recorder
//! they are no-ops. Binaries decide whether to export them.

use metrics::{counter, describe_counter};

/// Aggregated metrics for ledger operations.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "ledger_operations_total",
            "Total number of committed ledger operations by operation name"
        );
        describe_counter!(
            "ledger_operation_failures_total",
            "Total number of rejected ledger operations by operation name and error kind"
        );
    }

    /// Record a committed operation.
    pub fn record_success(&self, operation: &'static str) {
        counter!("ledger_operations_total", "operation" => operation).increment(1);
    }

    /// Record a rejected operation.
    pub fn record_failure(&self, operation: &'static str, kind: &'static str) {
        counter!(
            "ledger_operation_failures_total",
            "operation" => operation,
            "kind" => kind
        )
        .increment(1);
    }
}
