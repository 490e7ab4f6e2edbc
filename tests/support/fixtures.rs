//! JSON fixtures in the feed's wire format.

/// Arsenal 1-0 Chelsea, 0-0 at half time, with corners and player stats.
pub const MATCH_RESULT: &str = r#"{
  "fullTimeHomeScore": 1,
  "fullTimeAwayScore": 0,
  "halfTimeHomeScore": 0,
  "halfTimeAwayScore": 0,
  "homeCorners": 7,
  "awayCorners": 3,
  "homeTeam": "Arsenal",
  "awayTeam": "Chelsea",
  "players": [
    { "name": "Bukayo Saka", "goals": 1, "shotsOnTarget": 3 },
    { "name": "Cole Palmer", "shotsOnTarget": 1, "cards": 1 }
  ]
}"#;

/// A mixed slip: handicap quarter line, totals, a player prop and one
/// market nobody can settle.
pub const BETS: &str = r#"[
  {
    "id": "ah-away",
    "marketName": "Asian Handicap",
    "marketCriterion": "Asian Handicap",
    "selectionLabel": "2",
    "handicapLine": "+1.25",
    "stake": "100",
    "odds": "1.95"
  },
  {
    "id": "total-under",
    "marketName": "Total Goals",
    "selectionLabel": "Under",
    "handicapLine": 2.5,
    "stake": "10",
    "odds": "1.8"
  },
  {
    "id": "saka-anytime",
    "marketName": "Anytime Goalscorer",
    "marketCriterion": "Anytime Goalscorer",
    "selectionLabel": "Bukayo Saka",
    "stake": "5",
    "odds": "3.5"
  },
  {
    "id": "double-chance",
    "marketName": "Double Chance",
    "selectionLabel": "1X",
    "stake": "20",
    "odds": "1.2"
  }
]"#;
