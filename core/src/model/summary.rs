use serde::{Deserialize, Serialize};

use crate::format::{ZERO_FIXED2, ZERO_RATE};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_runs: u32,
    pub total_runs_allowed: u32,
    pub win_percentage: String,
}

impl Default for TeamSummary {
    fn default() -> Self {
        Self {
            games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            total_runs: 0,
            total_runs_allowed: 0,
            win_percentage: ZERO_RATE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BattingSummary {
    pub games: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbis: u32,
    pub runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub stolen_bases: u32,
    pub sacrifices: u32,
    pub errors: u32,
    pub total_bases: u32,
    pub average: String,
    pub obp: String,
    pub slg: String,
    pub ops: String,
}

impl Default for BattingSummary {
    fn default() -> Self {
        Self {
            games: 0,
            at_bats: 0,
            hits: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            rbis: 0,
            runs: 0,
            walks: 0,
            strikeouts: 0,
            stolen_bases: 0,
            sacrifices: 0,
            errors: 0,
            total_bases: 0,
            average: ZERO_RATE.to_string(),
            obp: ZERO_RATE.to_string(),
            slg: ZERO_RATE.to_string(),
            ops: ZERO_RATE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchingSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub holds: u32,
    pub innings_pitched: f64,
    pub hits_allowed: u32,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    pub walks_allowed: u32,
    pub strikeouts_thrown: u32,
    pub home_runs_allowed: u32,
    pub era: String,
    pub whip: String,
}

impl Default for PitchingSummary {
    fn default() -> Self {
        Self {
            games: 0,
            wins: 0,
            losses: 0,
            saves: 0,
            holds: 0,
            innings_pitched: 0.0,
            hits_allowed: 0,
            runs_allowed: 0,
            earned_runs: 0,
            walks_allowed: 0,
            strikeouts_thrown: 0,
            home_runs_allowed: 0,
            era: ZERO_FIXED2.to_string(),
            whip: ZERO_FIXED2.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub team: TeamSummary,
    pub batting: BattingSummary,
    pub pitching: PitchingSummary,
}

impl MonthlySummary {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            team: TeamSummary::default(),
            batting: BattingSummary::default(),
            pitching: PitchingSummary::default(),
        }
    }

    pub fn has_games(&self) -> bool {
        self.team.games > 0
    }
}
