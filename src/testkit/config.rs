//! Canonical test configurations.

use crate::config::SettlementConfig;

/// Batch settings that never leave the calling thread.
pub fn sequential() -> SettlementConfig {
    SettlementConfig {
        workers: None,
        parallel_threshold: usize::MAX,
    }
}

/// Batch settings that always fan out over a dedicated pool.
pub fn parallel(workers: usize) -> SettlementConfig {
    SettlementConfig {
        workers: Some(workers),
        parallel_threshold: 1,
    }
}
