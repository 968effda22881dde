use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::model::coerce::{lenient_date, lenient_id};
use crate::model::game_result::GameResult;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Practice,
    Game,
    Meeting,
    Event,
    #[serde(other)]
    Other,
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Other
    }
}

impl EventType {
    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::Practice => "Practice",
            EventType::Game => "Game",
            EventType::Meeting => "Meeting",
            EventType::Event => "Event",
            EventType::Other => "Other",
        }
    }

    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "practice" => EventType::Practice,
            "game" => EventType::Game,
            "meeting" => EventType::Meeting,
            "event" => EventType::Event,
            _ => EventType::Other,
        }
    }
}

/// Where a schedule event sits on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSpan {
    Single(NaiveDate),
    /// Inclusive on both ends. `end` may precede `start` in bad data.
    Range { start: NaiveDate, end: NaiveDate },
}

impl EventSpan {
    pub fn first_day(&self) -> NaiveDate {
        match self {
            EventSpan::Single(date) => *date,
            EventSpan::Range { start, .. } => *start,
        }
    }

    pub fn last_day(&self) -> NaiveDate {
        match self {
            EventSpan::Single(date) => *date,
            EventSpan::Range { start, end } => (*end).max(*start),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub event_type: EventType,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub is_multi_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_result: Option<GameResult>,
}

impl ScheduleEvent {
    pub fn new(title: impl Into<String>, event_type: EventType, date: NaiveDate) -> EngineResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EngineError::InvalidSchedule("title is required".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            event_type,
            date: Some(date),
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            is_all_day: false,
            is_multi_day: false,
            location: None,
            description: None,
            game_result: None,
        })
    }

    pub fn new_multi_day(
        title: impl Into<String>,
        event_type: EventType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidSchedule(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        let mut event = Self::new(title, event_type, start)?;
        event.date = None;
        event.start_date = Some(start);
        event.end_date = Some(end);
        event.is_multi_day = true;
        event.is_all_day = true;
        Ok(event)
    }

    /// `None` when every date field is absent.
    pub fn span(&self) -> Option<EventSpan> {
        if self.is_multi_day {
            if let Some(start) = self.start_date {
                return Some(EventSpan::Range {
                    start,
                    end: self.end_date.unwrap_or(start),
                });
            }
        }
        self.date.or(self.start_date).map(EventSpan::Single)
    }

    pub fn is_game(&self) -> bool {
        self.event_type == EventType::Game
    }
}
