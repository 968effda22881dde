use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use diamondlog_core::input::{normalize_fields, parse_args, parse_menu, parse_score};
use diamondlog_core::{
    parse_human_date, BattingStats, EventType, GameResult, PitchingStats, Practice, PracticeCategory,
    ScheduleEvent, TeamResult,
};

const PRACTICE_KEYS: &[&str] = &["date", "category", "start", "end", "condition", "menu"];
const SCHEDULE_KEYS: &[&str] = &[
    "type", "date", "from", "to", "start", "end", "location", "description", "allday",
];
const GAME_KEYS: &[&str] = &[
    "date", "score", "innings", "note", "ab", "h", "2b", "3b", "hr", "rbi", "r", "bb", "so", "sb",
    "sac", "e", "ip", "ha", "ra", "er", "pbb", "pso", "phr", "decision",
];
const PITCHING_KEYS: &[&str] = &["ip", "ha", "ra", "er", "pbb", "pso", "phr", "decision"];

fn date_field(fields: &HashMap<String, String>, key: &str, today: NaiveDate) -> Result<Option<NaiveDate>> {
    fields
        .get(key)
        .map(|value| parse_human_date(value, today))
        .transpose()
}

fn count_field(fields: &HashMap<String, String>, key: &str) -> Result<u32> {
    match fields.get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| anyhow!("'{}' must be a whole number, got '{}'", key, value)),
        None => Ok(0),
    }
}

/// practice add cat:batting date:today start:18:00 end:20:00 cond:4 menu:"Tee=100 swings"
pub fn build_practice(args: &[String], today: NaiveDate) -> Result<Practice> {
    let parsed = parse_args(args);
    let fields = normalize_fields(parsed.fields, PRACTICE_KEYS)?;

    let date = date_field(&fields, "date", today)?.unwrap_or(today);
    let category = fields
        .get("category")
        .map(|c| PracticeCategory::parse(c))
        .unwrap_or_default();
    let condition = match fields.get("condition") {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| anyhow!("condition must be 1-5, got '{}'", value))?,
        None => 3,
    };

    let mut practice = Practice::new(date, category, condition)?;
    practice.start_time = fields.get("start").cloned();
    practice.end_time = fields.get("end").cloned();
    if let Some(menu) = fields.get("menu") {
        practice.menu = parse_menu(menu);
    }
    Ok(practice)
}

/// schedule add Game vs Hawks type:game date:sat start:13:00 loc:"North Park"
/// schedule add Spring camp type:event from:2025-03-10 to:2025-03-12
pub fn build_schedule(args: &[String], today: NaiveDate) -> Result<ScheduleEvent> {
    let parsed = parse_args(args);
    let fields = normalize_fields(parsed.fields, SCHEDULE_KEYS)?;
    let event_type = fields
        .get("type")
        .map(|t| EventType::parse(t))
        .unwrap_or_default();

    let from = date_field(&fields, "from", today)?;
    let to = date_field(&fields, "to", today)?;
    let mut event = match (from, to) {
        (Some(start), Some(end)) if end != start => {
            ScheduleEvent::new_multi_day(parsed.text, event_type, start, end)?
        }
        (Some(start), _) => ScheduleEvent::new(parsed.text, event_type, start)?,
        (None, Some(_)) => return Err(anyhow!("'to' needs a 'from' date")),
        (None, None) => {
            let date = date_field(&fields, "date", today)?.unwrap_or(today);
            ScheduleEvent::new(parsed.text, event_type, date)?
        }
    };

    event.start_time = fields.get("start").cloned();
    event.end_time = fields.get("end").cloned();
    event.location = fields.get("location").cloned();
    event.description = fields.get("description").cloned();
    if let Some(all_day) = fields.get("allday") {
        event.is_all_day = matches!(all_day.as_str(), "yes" | "true" | "1");
    }
    Ok(event)
}

/// game record <id> score:5-3 inn:9 ab:4 h:2 hr:1 bb:1 ip:6.1 er:2 dec:win
pub fn build_game_result(game_id: &str, args: &[String], today: NaiveDate) -> Result<GameResult> {
    let parsed = parse_args(args);
    let fields = normalize_fields(parsed.fields, GAME_KEYS)?;

    let (ours, theirs) = match fields.get("score") {
        Some(score) => parse_score(score)?,
        None => (0, 0),
    };
    let innings = match fields.get("innings") {
        Some(_) => count_field(&fields, "innings")?,
        None => 9,
    };
    let mut team_result = TeamResult::new(ours, theirs, innings);
    team_result.game_note = fields.get("note").cloned().unwrap_or_default();

    let date = date_field(&fields, "date", today)?;
    let mut result = GameResult::new(game_id, today, team_result);
    // Without an explicit date the schedule's own date is used.
    result.date = date;

    result.batting_stats = BattingStats {
        at_bats: count_field(&fields, "ab")?,
        hits: count_field(&fields, "h")?,
        doubles: count_field(&fields, "2b")?,
        triples: count_field(&fields, "3b")?,
        home_runs: count_field(&fields, "hr")?,
        rbis: count_field(&fields, "rbi")?,
        runs: count_field(&fields, "r")?,
        walks: count_field(&fields, "bb")?,
        strikeouts: count_field(&fields, "so")?,
        stolen_bases: count_field(&fields, "sb")?,
        sacrifices: count_field(&fields, "sac")?,
        errors: count_field(&fields, "e")?,
    };

    if PITCHING_KEYS.iter().any(|k| fields.contains_key(*k)) {
        let innings_pitched = match fields.get("ip") {
            Some(value) => value
                .trim()
                .parse::<f64>()
                .map_err(|_| anyhow!("'ip' must be a number like 6.1, got '{}'", value))?,
            None => 0.0,
        };
        let decision = fields.get("decision").map(|d| d.to_lowercase()).unwrap_or_default();
        result.pitching_stats = Some(PitchingStats {
            hits_allowed: count_field(&fields, "ha")?,
            runs_allowed: count_field(&fields, "ra")?,
            earned_runs: count_field(&fields, "er")?,
            walks_allowed: count_field(&fields, "pbb")?,
            strikeouts_thrown: count_field(&fields, "pso")?,
            home_runs_allowed: count_field(&fields, "phr")?,
            is_win: decision == "win" || decision == "w",
            is_lose: decision == "lose" || decision == "l",
            is_save: decision == "save" || decision == "s",
            is_hold: decision == "hold" || decision == "h",
            ..PitchingStats::new(innings_pitched)
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    #[test]
    fn test_build_practice() {
        let p = build_practice(
            &args(&["cat:batting", "date:yesterday", "start:18:00", "end:20:00", "cond:4", "menu:Tee=100 swings;Sprints=10"]),
            today(),
        )
        .unwrap();
        assert_eq!(p.category, PracticeCategory::Batting);
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2025, 3, 11));
        assert_eq!(p.time_window(), "18:00-20:00");
        assert_eq!(p.condition, 4);
        assert_eq!(p.menu.len(), 2);

        assert!(build_practice(&args(&["cond:7"]), today()).is_err());
    }

    #[test]
    fn test_build_multi_day_schedule() {
        let event = build_schedule(
            &args(&["Spring", "camp", "type:event", "from:2025-03-14", "to:2025-03-16", "loc:Lake"]),
            today(),
        )
        .unwrap();
        assert_eq!(event.title, "Spring camp");
        assert!(event.is_multi_day);
        assert_eq!(event.location.as_deref(), Some("Lake"));
        assert!(build_schedule(&args(&["Trip", "to:2025-03-16"]), today()).is_err());
    }

    #[test]
    fn test_build_game_result() {
        let result = build_game_result(
            "g1",
            &args(&["score:5-3", "ab:4", "h:2", "hr:1", "ip:6.1", "er:2", "dec:win"]),
            today(),
        )
        .unwrap();
        assert_eq!(result.game_id, "g1");
        assert_eq!(result.date, None);
        assert_eq!(result.team_result.innings, 9);
        assert_eq!(result.batting_stats.home_runs, 1);
        let pitching = result.pitched().unwrap();
        assert_eq!(pitching.innings_pitched, 6.1);
        assert!(pitching.is_win);

        let batting_only = build_game_result("g2", &args(&["score:1-2", "ab:3"]), today()).unwrap();
        assert!(batting_only.pitching_stats.is_none());
        assert!(build_game_result("g3", &args(&["ab:three"]), today()).is_err());
    }
}
