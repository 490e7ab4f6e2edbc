//! Monetary types for stake, odds and payout representation.

use rust_decimal::Decimal;

/// Amount wagered, represented as a Decimal for precision.
pub type Stake = Decimal;

/// Decimal (European) odds: a winning bet returns `stake * odds`.
pub type Odds = Decimal;

/// Amount returned to the bettor on settlement, stake included.
pub type Payout = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn payout_is_exact_for_decimal_odds() {
        let stake: Stake = dec!(100);
        let odds: Odds = dec!(1.95);
        let payout: Payout = stake * odds;

        assert_eq!(payout, dec!(195));
    }
}
