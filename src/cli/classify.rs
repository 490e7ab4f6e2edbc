//! `betsettle classify`: show the market code each bet maps to.

use serde::Serialize;
use tabled::{Table, Tabled};

use super::input::read_bets;
use super::output;
use super::ClassifyArgs;
use crate::classifier::MarketClassifier;
use crate::error::Result;

#[derive(Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassificationRow {
    #[tabled(rename = "Bet")]
    bet_id: String,
    #[tabled(rename = "Market")]
    market_name: String,
    #[tabled(rename = "Selection")]
    selection: String,
    #[tabled(rename = "Code")]
    market_code: &'static str,
    #[tabled(rename = "Rule")]
    rule: &'static str,
    #[tabled(rename = "Priority")]
    priority: u16,
}

/// Classify every bet in `args.bets`.
pub fn execute(args: &ClassifyArgs) -> Result<()> {
    let bets = read_bets(&args.bets)?;
    let classifier = MarketClassifier::new();

    let rows: Vec<ClassificationRow> = bets
        .iter()
        .map(|bet| {
            let classification = classifier.explain(bet);
            ClassificationRow {
                bet_id: bet.id().to_string(),
                market_name: bet.market_name().to_string(),
                selection: bet.selection_label().to_string(),
                market_code: classification.code.as_str(),
                rule: classification.rule,
                priority: classification.priority,
            }
        })
        .collect();

    if output::is_json() {
        for row in &rows {
            output::emit("classification", row);
        }
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Classification");
    println!();
    output::table(&Table::new(rows).to_string());
    println!();
    Ok(())
}
