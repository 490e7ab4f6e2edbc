//! Terminal output helpers.
//!
//! Every command prints through this module so that `--json` switches the
//! whole CLI to one JSON object per line and `--quiet` silences everything
//! except results and errors.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

use crate::domain::SettlementResult;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

fn suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
///
/// Payloads that fail to serialize are reported as an error line instead.
pub fn emit<T: Serialize>(kind: &str, payload: &T) {
    match serde_json::to_value(payload) {
        Ok(payload) => println!("{}", json!({ "type": kind, "payload": payload })),
        Err(err) => error(&format!("cannot serialize {kind}: {err}")),
    }
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit("header", &json!({ "app": "betsettle", "version": version }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!("{} {}", "betsettle".bold(), version.dimmed());
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit("field", &json!({ "label": label, "value": value }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!("  {:<20} {}", label.dimmed(), value);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit("section", &json!({ "title": title }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.bold());
}

/// Print a rendered table, indented. Skipped in JSON mode.
pub fn table(rendered: &str) {
    if is_json() {
        return;
    }
    for line in rendered.lines() {
        println!("  {line}");
    }
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit("success", &json!({ "message": message }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    if is_json() {
        emit("warning", &json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

/// Color a settlement result label.
pub fn result_label(result: SettlementResult) -> String {
    let label = result.to_string();
    if is_json() {
        return label;
    }
    match result {
        SettlementResult::Won => label.green().to_string(),
        SettlementResult::Lost => label.red().to_string(),
        SettlementResult::Push => label.yellow().to_string(),
    }
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value.dimmed().to_string()
}
