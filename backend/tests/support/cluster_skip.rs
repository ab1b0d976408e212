//! Opt-in policy for suites that start an embedded cluster.
//!
//! Cluster suites only run when `RUN_PG_EMBEDDED=1`; a failed start is a hard
//! failure unless `SKIP_TEST_CLUSTER` is truthy.

fn is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// True when embedded PostgreSQL suites were requested.
pub fn cluster_requested() -> bool {
    is_truthy("RUN_PG_EMBEDDED")
}

/// Report a cluster start failure: skip when tolerated, panic otherwise.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if is_truthy("SKIP_TEST_CLUSTER") {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
