use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde_json::Value;

use crate::model::coerce::{lenient_bool, lenient_count, lenient_date, lenient_f64, lenient_id, lenient_text};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Draw
    }
}

impl Outcome {
    pub fn from_scores(our_score: u32, opponent_score: u32) -> Self {
        if our_score > opponent_score {
            Outcome::Win
        } else if our_score < opponent_score {
            Outcome::Lose
        } else {
            Outcome::Draw
        }
    }
}

/// Deserialized through `StoredTeamResult`, so `result` always follows the score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", from = "StoredTeamResult")]
pub struct TeamResult {
    pub our_score: u32,
    pub opponent_score: u32,
    pub result: Outcome,
    pub innings: u32,
    pub game_note: String,
}

// The stored shape: `result` may be missing or hold an unknown word.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTeamResult {
    #[serde(default, deserialize_with = "lenient_count")]
    our_score: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    opponent_score: u32,
    #[serde(default, deserialize_with = "lenient_outcome")]
    result: Option<Outcome>,
    #[serde(default, deserialize_with = "lenient_count")]
    innings: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    game_note: String,
}

impl From<StoredTeamResult> for TeamResult {
    fn from(stored: StoredTeamResult) -> Self {
        let result = Outcome::from_scores(stored.our_score, stored.opponent_score);
        if stored.result != Some(result) {
            debug!(
                "stored outcome {:?} does not match {}-{}, using {:?}",
                stored.result, stored.our_score, stored.opponent_score, result
            );
        }
        Self {
            our_score: stored.our_score,
            opponent_score: stored.opponent_score,
            result,
            innings: stored.innings,
            game_note: stored.game_note,
        }
    }
}

fn lenient_outcome<'de, D>(deserializer: D) -> Result<Option<Outcome>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value.as_str().map(|s| s.trim().to_lowercase()).as_deref() {
        Some("win") => Some(Outcome::Win),
        Some("lose") => Some(Outcome::Lose),
        Some("draw") => Some(Outcome::Draw),
        _ => None,
    })
}

impl TeamResult {
    pub fn new(our_score: u32, opponent_score: u32, innings: u32) -> Self {
        Self {
            our_score,
            opponent_score,
            result: Outcome::from_scores(our_score, opponent_score),
            innings,
            game_note: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub at_bats: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub hits: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub doubles: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub triples: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub home_runs: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rbis: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub runs: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub walks: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub strikeouts: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub stolen_bases: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub sacrifices: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub errors: u32,
}

/// Innings pitched use baseball notation: 6.1 is six and one-third innings.
/// The value is kept exactly as entered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_pitcher: bool,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub innings_pitched: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub hits_allowed: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub runs_allowed: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub earned_runs: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub walks_allowed: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub strikeouts_thrown: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub home_runs_allowed: u32,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_win: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_lose: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_save: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_hold: bool,
}

impl PitchingStats {
    pub fn new(innings_pitched: f64) -> Self {
        Self {
            is_pitcher: true,
            innings_pitched,
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// Id of the ScheduleEvent this result belongs to.
    #[serde(default, deserialize_with = "lenient_id")]
    pub game_id: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub team_result: TeamResult,
    #[serde(default)]
    pub batting_stats: BattingStats,
    #[serde(default)]
    pub pitching_stats: Option<PitchingStats>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl GameResult {
    pub fn new(game_id: impl Into<String>, date: NaiveDate, team_result: TeamResult) -> Self {
        Self {
            game_id: game_id.into(),
            date: Some(date),
            team_result,
            batting_stats: BattingStats::default(),
            pitching_stats: None,
            recorded_at: Some(Utc::now()),
        }
    }

    /// Recomputes `team_result.result` from the scores. Returns true when the
    /// stored outcome disagreed.
    pub fn normalize_outcome(&mut self) -> bool {
        let derived = Outcome::from_scores(self.team_result.our_score, self.team_result.opponent_score);
        let changed = self.team_result.result != derived;
        self.team_result.result = derived;
        changed
    }

    pub fn pitched(&self) -> Option<&PitchingStats> {
        self.pitching_stats.as_ref().filter(|p| p.is_pitcher)
    }
}
