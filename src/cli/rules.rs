//! `betsettle rules`: list the classification rule table.

use serde::Serialize;
use tabled::{Table, Tabled};

use super::output;
use crate::classifier::RuleRegistry;

#[derive(Tabled, Serialize)]
struct RuleRow {
    #[tabled(rename = "Priority")]
    priority: u16,
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Rule")]
    rule: &'static str,
}

/// Print the builtin rules, highest priority first.
pub fn execute() {
    let rows: Vec<RuleRow> = RuleRegistry::builtin()
        .rules()
        .iter()
        .map(|rule| RuleRow {
            priority: rule.priority(),
            code: rule.code().as_str(),
            rule: rule.name(),
        })
        .collect();

    if output::is_json() {
        for row in &rows {
            output::emit("rule", row);
        }
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Classification rules");
    println!();
    output::table(&Table::new(rows).to_string());
    println!();
    println!("  Highest matching priority wins; priority 0 is the catch-all.");
    println!();
}
