use serde::{Deserialize, Deserializer, Serialize};
use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::model::coerce::{lenient_date, lenient_id, lenient_text, value_to_number};

const CONDITION_MIN: u8 = 1;
const CONDITION_MAX: u8 = 5;
const DEFAULT_CONDITION: u8 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PracticeCategory {
    Batting,
    Pitching,
    Fielding,
    Running,
    Conditioning,
    TeamPractice,
    #[serde(other)]
    Other,
}

impl Default for PracticeCategory {
    fn default() -> Self {
        PracticeCategory::Other
    }
}

impl PracticeCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            PracticeCategory::Batting => "Batting",
            PracticeCategory::Pitching => "Pitching",
            PracticeCategory::Fielding => "Fielding",
            PracticeCategory::Running => "Running",
            PracticeCategory::Conditioning => "Conditioning",
            PracticeCategory::TeamPractice => "Team Practice",
            PracticeCategory::Other => "Other",
        }
    }

    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "batting" | "bat" => PracticeCategory::Batting,
            "pitching" | "pitch" => PracticeCategory::Pitching,
            "fielding" | "field" => PracticeCategory::Fielding,
            "running" | "run" => PracticeCategory::Running,
            "conditioning" | "training" => PracticeCategory::Conditioning,
            "team_practice" | "team" => PracticeCategory::TeamPractice,
            _ => PracticeCategory::Other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub unit: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Practice {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: PracticeCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default = "default_condition", deserialize_with = "lenient_condition")]
    pub condition: u8,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

fn default_condition() -> u8 {
    DEFAULT_CONDITION
}

// Numbers and numeric strings are clamped into range; anything else reads as the default.
fn lenient_condition<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value_to_number(&value) {
        Some(n) => n.trunc().clamp(CONDITION_MIN as f64, CONDITION_MAX as f64) as u8,
        None => DEFAULT_CONDITION,
    })
}

impl Practice {
    pub fn new(date: NaiveDate, category: PracticeCategory, condition: u8) -> EngineResult<Self> {
        if !(CONDITION_MIN..=CONDITION_MAX).contains(&condition) {
            return Err(EngineError::InvalidPractice(format!(
                "condition must be between 1 and 5, got {}",
                condition
            )));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            date: Some(date),
            category,
            start_time: None,
            end_time: None,
            condition,
            menu: Vec::new(),
        })
    }

    /// "18:00-20:00" when both ends are known, otherwise empty.
    pub fn time_window(&self) -> String {
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                format!("{}-{}", start, end)
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_range() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(Practice::new(date, PracticeCategory::Batting, 0).is_err());
        assert!(Practice::new(date, PracticeCategory::Batting, 6).is_err());
        let p = Practice::new(date, PracticeCategory::Batting, 5).unwrap();
        assert_eq!(p.date, Some(date));
        assert!(!p.id.is_empty());
    }

    #[test]
    fn test_time_window() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut p = Practice::new(date, PracticeCategory::Fielding, 3).unwrap();
        assert_eq!(p.time_window(), "");
        p.start_time = Some("18:00".to_string());
        assert_eq!(p.time_window(), "");
        p.end_time = Some("20:30".to_string());
        assert_eq!(p.time_window(), "18:00-20:30");
    }

    #[test]
    fn test_unknown_category_reads_as_other() {
        let p: Practice = serde_json::from_str(
            r#"{"id":"p1","date":"2025-03-10","category":"yoga","condition":4,"menu":[]}"#,
        )
        .unwrap();
        assert_eq!(p.category, PracticeCategory::Other);
        assert_eq!(PracticeCategory::parse("Team Practice"), PracticeCategory::TeamPractice);
        assert_eq!(PracticeCategory::TeamPractice.display_name(), "Team Practice");
    }

    #[test]
    fn test_loose_condition_and_menu_values() {
        let p: Practice = serde_json::from_str(
            r#"{"id":"p1","date":"2025-03-10","category":"batting","condition":"4",
                "menu":[{"name":"Tee batting","value":100,"unit":"swings"}]}"#,
        )
        .unwrap();
        assert_eq!(p.condition, 4);
        assert_eq!(p.menu[0].value, "100");

        let read = |condition: &str| -> u8 {
            let json = format!(r#"{{"id":"p1","date":"2025-03-10","condition":{}}}"#, condition);
            serde_json::from_str::<Practice>(&json).unwrap().condition
        };
        assert_eq!(read("9"), 5);
        assert_eq!(read("0"), 1);
        assert_eq!(read("\"great\""), 3);
        assert_eq!(read("null"), 3);
    }
}
