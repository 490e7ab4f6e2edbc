//! Reading bet and match files.

use std::fs;
use std::path::Path;

use crate::domain::{Bet, MatchResult};
use crate::error::Result;

/// Read a JSON array of bets.
pub fn read_bets(path: &Path) -> Result<Vec<Bet>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read one match result.
pub fn read_result(path: &Path) -> Result<MatchResult> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
