use anyhow::Result;

use crate::format::{fixed2_ratio, rate, sum_rates};
use crate::model::game_result::{BattingStats, GameResult, Outcome, PitchingStats, TeamResult};
use crate::model::summary::{BattingSummary, MonthlySummary, PitchingSummary, TeamSummary};
use crate::repository::{Collections, EventStore};
use crate::time::is_in_month;

const INNINGS_PER_GAME: f64 = 9.0;

pub struct StatsService<'a, S: EventStore> {
    collections: &'a Collections<S>,
}

impl<'a, S: EventStore> StatsService<'a, S> {
    pub fn new(collections: &'a Collections<S>) -> Self {
        Self { collections }
    }

    pub fn monthly(&self, year: i32, month: u32) -> Result<MonthlySummary> {
        let results = self.collections.game_results()?;
        Ok(aggregate_monthly(&results, year, month))
    }
}

// Standalone functions for pure logic

/// Rolls up every result dated inside the calendar month into totals and rates.
/// A result counts toward batting only when `at_bats` is non-zero, and toward
/// pitching only when `is_pitcher` is set.
pub fn aggregate_monthly(results: &[GameResult], year: i32, month: u32) -> MonthlySummary {
    let mut summary = MonthlySummary::new(year, month);

    let in_period = results
        .iter()
        .filter(|r| r.date.map_or(false, |date| is_in_month(date, year, month)));

    for result in in_period {
        fold_team(&mut summary.team, &result.team_result);
        // 0 at-bats counts as not batting, same as a missing line.
        if result.batting_stats.at_bats != 0 {
            fold_batting(&mut summary.batting, &result.batting_stats);
        }
        if let Some(pitching) = result.pitched() {
            fold_pitching(&mut summary.pitching, pitching);
        }
    }

    derive_team_rates(&mut summary.team);
    derive_batting_rates(&mut summary.batting);
    derive_pitching_rates(&mut summary.pitching);
    summary
}

fn fold_team(team: &mut TeamSummary, result: &TeamResult) {
    team.games += 1;
    match result.result {
        Outcome::Win => team.wins += 1,
        Outcome::Lose => team.losses += 1,
        Outcome::Draw => team.draws += 1,
    }
    team.total_runs = team.total_runs.saturating_add(result.our_score);
    team.total_runs_allowed = team.total_runs_allowed.saturating_add(result.opponent_score);
}

fn fold_batting(batting: &mut BattingSummary, stats: &BattingStats) {
    batting.games += 1;
    batting.at_bats = batting.at_bats.saturating_add(stats.at_bats);
    batting.hits = batting.hits.saturating_add(stats.hits);
    batting.doubles = batting.doubles.saturating_add(stats.doubles);
    batting.triples = batting.triples.saturating_add(stats.triples);
    batting.home_runs = batting.home_runs.saturating_add(stats.home_runs);
    batting.rbis = batting.rbis.saturating_add(stats.rbis);
    batting.runs = batting.runs.saturating_add(stats.runs);
    batting.walks = batting.walks.saturating_add(stats.walks);
    batting.strikeouts = batting.strikeouts.saturating_add(stats.strikeouts);
    batting.stolen_bases = batting.stolen_bases.saturating_add(stats.stolen_bases);
    batting.sacrifices = batting.sacrifices.saturating_add(stats.sacrifices);
    batting.errors = batting.errors.saturating_add(stats.errors);
}

fn fold_pitching(pitching: &mut PitchingSummary, stats: &PitchingStats) {
    pitching.games += 1;
    pitching.wins += stats.is_win as u32;
    pitching.losses += stats.is_lose as u32;
    pitching.saves += stats.is_save as u32;
    pitching.holds += stats.is_hold as u32;
    pitching.innings_pitched += stats.innings_pitched;
    pitching.hits_allowed = pitching.hits_allowed.saturating_add(stats.hits_allowed);
    pitching.runs_allowed = pitching.runs_allowed.saturating_add(stats.runs_allowed);
    pitching.earned_runs = pitching.earned_runs.saturating_add(stats.earned_runs);
    pitching.walks_allowed = pitching.walks_allowed.saturating_add(stats.walks_allowed);
    pitching.strikeouts_thrown = pitching.strikeouts_thrown.saturating_add(stats.strikeouts_thrown);
    pitching.home_runs_allowed = pitching.home_runs_allowed.saturating_add(stats.home_runs_allowed);
}

fn derive_team_rates(team: &mut TeamSummary) {
    team.win_percentage = rate(team.wins as f64, team.games as f64);
}

fn derive_batting_rates(batting: &mut BattingSummary) {
    let at_bats = batting.at_bats as f64;
    let hits = batting.hits as f64;
    let walks = batting.walks as f64;

    batting.total_bases = batting
        .hits
        .saturating_add(batting.doubles)
        .saturating_add(batting.triples.saturating_mul(2))
        .saturating_add(batting.home_runs.saturating_mul(3));

    batting.average = rate(hits, at_bats);
    batting.obp = rate(hits + walks, at_bats + walks);
    batting.slg = rate(batting.total_bases as f64, at_bats);
    batting.ops = sum_rates(&batting.obp, &batting.slg);
}

fn derive_pitching_rates(pitching: &mut PitchingSummary) {
    let innings = pitching.innings_pitched;
    pitching.era = fixed2_ratio(pitching.earned_runs as f64 * INNINGS_PER_GAME, innings);
    pitching.whip = fixed2_ratio(
        (pitching.walks_allowed as f64) + (pitching.hits_allowed as f64),
        innings,
    );
}
