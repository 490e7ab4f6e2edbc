//! `betsettle check config`: validate configuration.

use std::path::Path;

use super::output;
use crate::config::Config;

/// Report a configuration that has already loaded and validated.
pub fn execute_config(path: &Path, config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Config", path.display());
    output::section("Logging");
    output::field("level", &config.logging.level);
    output::field("format", &config.logging.format);
    output::section("Settlement");
    output::field(
        "workers",
        config
            .settlement
            .workers
            .map_or_else(|| "global pool".to_string(), |w| w.to_string()),
    );
    output::field("parallel_threshold", config.settlement.parallel_threshold);
    output::success("Configuration is valid");
}
