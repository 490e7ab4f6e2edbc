//! Settling a quantity against a line, including quarter-line splits.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::Wager;
use crate::domain::{HandicapLine, LineLegs, SettlementOutcome};

/// Settle against every leg of `line`.
///
/// `compare` receives one leg value and reports how the selection fared
/// against it: `Greater` wins, `Equal` pushes, `Less` loses. Quarter lines
/// stake half on each adjacent leg and recombine the two results.
pub fn settle_on_line<F>(line: HandicapLine, wager: Wager, compare: F) -> SettlementOutcome
where
    F: Fn(Decimal) -> Ordering,
{
    match line.legs() {
        LineLegs::Single(leg) => SettlementOutcome::from_ordering(compare(leg), wager.stake, wager.odds),
        LineLegs::Split(first, second) => {
            let half = wager.stake / Decimal::TWO;
            let first = SettlementOutcome::from_ordering(compare(first), half, wager.odds);
            let second = SettlementOutcome::from_ordering(compare(second), half, wager.odds);
            SettlementOutcome::combine(first, second, wager.stake)
        }
    }
}

/// Over/under on a counted quantity.
pub fn settle_over_under(quantity: u32, over: bool, line: HandicapLine, wager: Wager) -> SettlementOutcome {
    let quantity = Decimal::from(quantity);
    settle_on_line(line, wager, |leg| {
        if over {
            quantity.cmp(&leg)
        } else {
            leg.cmp(&quantity)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettlementResult;
    use rust_decimal_macros::dec;

    fn wager() -> Wager {
        Wager::new(dec!(100), dec!(2))
    }

    fn line(value: Decimal) -> HandicapLine {
        HandicapLine::try_new(value).unwrap()
    }

    #[test]
    fn half_line_never_pushes() {
        let over = settle_over_under(3, true, line(dec!(2.5)), wager());
        assert_eq!(over.result(), SettlementResult::Won);
        assert_eq!(over.payout(), dec!(200));

        let under = settle_over_under(3, false, line(dec!(2.5)), wager());
        assert_eq!(under.result(), SettlementResult::Lost);
    }

    #[test]
    fn whole_line_pushes_on_exact_total() {
        let outcome = settle_over_under(2, true, line(dec!(2)), wager());
        assert_eq!(outcome.result(), SettlementResult::Push);
        assert_eq!(outcome.payout(), dec!(100));
    }

    #[test]
    fn quarter_line_over_half_wins() {
        // Over 2.25 with exactly two goals: push on 2, lose on 2.5.
        let outcome = settle_over_under(2, true, line(dec!(2.25)), wager());
        assert_eq!(outcome.result(), SettlementResult::Lost);
        assert_eq!(outcome.payout(), dec!(50));

        // Under 2.25 with two goals: push on 2, win on 2.5.
        let outcome = settle_over_under(2, false, line(dec!(2.25)), wager());
        assert_eq!(outcome.result(), SettlementResult::Won);
        assert_eq!(outcome.payout(), dec!(150));
    }

    #[test]
    fn quarter_line_both_legs_agree() {
        let outcome = settle_over_under(4, true, line(dec!(2.75)), wager());
        assert_eq!(outcome.result(), SettlementResult::Won);
        assert_eq!(outcome.payout(), dec!(200));
    }

    #[test]
    fn quarter_lines_split_exactly_and_stay_within_bounds() {
        let wager = Wager::new(dec!(100), dec!(1.95));
        let half = Wager::new(dec!(50), dec!(1.95));
        let max_payout = wager.stake * wager.odds;

        for quarters in -15..=15 {
            let value = Decimal::new(quarters * 25, 2);
            for home in 0..=4u32 {
                for away in 0..=4u32 {
                    let compare =
                        |leg: Decimal| (Decimal::from(home) + leg).cmp(&Decimal::from(away));
                    let outcome = settle_on_line(line(value), wager, compare);

                    assert!(outcome.payout() >= Decimal::ZERO, "{value} at {home}-{away}");
                    assert!(outcome.payout() <= max_payout, "{value} at {home}-{away}");

                    if let LineLegs::Split(first, second) = line(value).legs() {
                        let legs = settle_on_line(line(first), half, compare).payout()
                            + settle_on_line(line(second), half, compare).payout();
                        assert_eq!(outcome.payout(), legs, "{value} at {home}-{away}");
                    }
                }
            }
        }
    }
}
