//! `betsettle settle`: settle a batch of bets.

use tabled::{Table, Tabled};

use super::input::{read_bets, read_result};
use super::output;
use super::SettleArgs;
use crate::classifier::MarketClassifier;
use crate::config::Config;
use crate::error::Result;
use crate::settlement::{SettledBet, Settler};

#[derive(Tabled)]
struct SettlementRow {
    #[tabled(rename = "Bet")]
    bet: String,
    #[tabled(rename = "Market")]
    market: &'static str,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Payout")]
    payout: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl From<&SettledBet> for SettlementRow {
    fn from(settled: &SettledBet) -> Self {
        let (result, payout, note) = match &settled.outcome {
            Ok(outcome) => (
                output::result_label(outcome.result()),
                outcome.payout().normalize().to_string(),
                String::new(),
            ),
            Err(err) => (output::muted("-"), output::muted("-"), err.to_string()),
        };
        Self {
            bet: settled.bet_id.to_string(),
            market: settled.code.as_str(),
            result,
            payout,
            note,
        }
    }
}

/// Settle every bet in `args.bets` against `args.result`.
pub fn execute(args: &SettleArgs, config: &Config) -> Result<()> {
    let bets = read_bets(&args.bets)?;
    let result = read_result(&args.result)?;
    let settler = Settler::with_config(MarketClassifier::new(), config.settlement.clone())?;
    let settled = settler.settle_batch(&bets, &result);

    let failed = settled.iter().filter(|s| !s.is_settled()).count();

    if output::is_json() {
        for entry in &settled {
            output::emit("settlement", &entry.to_record());
        }
    } else {
        output::header(env!("CARGO_PKG_VERSION"));
        output::section("Settlement");
        println!();
        let rows: Vec<SettlementRow> = settled.iter().map(SettlementRow::from).collect();
        output::table(&Table::new(rows).to_string());
        println!();
    }

    output::success(&format!("{} of {} bets settled", settled.len() - failed, settled.len()));
    if failed > 0 {
        output::warning(&format!("{failed} bets could not be settled"));
    }
    Ok(())
}
