use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::model::practice::Practice;
use crate::model::schedule::ScheduleEvent;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub event: ScheduleEvent,
    /// Set on every day of a multi-day event after its first.
    #[serde(default)]
    pub is_middle_day: bool,
}

/// Synthetic entry standing in for a logged practice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRecordEntry {
    pub id: String,
    pub label: String,
    pub time_window: String,
    pub practice: Practice,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarEntry {
    Schedule(ScheduleEntry),
    PracticeRecord(PracticeRecordEntry),
}

impl CalendarEntry {
    pub fn title(&self) -> &str {
        match self {
            CalendarEntry::Schedule(entry) => &entry.event.title,
            CalendarEntry::PracticeRecord(entry) => &entry.label,
        }
    }

    pub fn is_middle_day(&self) -> bool {
        matches!(self, CalendarEntry::Schedule(entry) if entry.is_middle_day)
    }

    pub fn as_schedule(&self) -> Option<&ScheduleEntry> {
        match self {
            CalendarEntry::Schedule(entry) => Some(entry),
            CalendarEntry::PracticeRecord(_) => None,
        }
    }
}

/// Date-keyed view over schedules and practices. Derived on every read, never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct CalendarDateIndex {
    days: BTreeMap<NaiveDate, Vec<CalendarEntry>>,
}

impl CalendarDateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: NaiveDate, entry: CalendarEntry) {
        self.days.entry(date).or_default().push(entry);
    }

    pub fn entries_on(&self, date: NaiveDate) -> &[CalendarEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Key as an ISO date string, the shape the UI boundary uses.
    pub fn entries_on_str(&self, iso_date: &str) -> &[CalendarEntry] {
        match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
            Ok(date) => self.entries_on(date),
            Err(_) => &[],
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<CalendarEntry>)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Keeps only the dates between `first` and `last` inclusive.
    pub fn restrict(&self, first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            days: self
                .days
                .range(first..=last)
                .map(|(date, entries)| (*date, entries.clone()))
                .collect(),
        }
    }
}
