use anyhow::Result;
use log::debug;

use crate::model::calendar::{CalendarDateIndex, CalendarEntry, PracticeRecordEntry, ScheduleEntry};
use crate::model::practice::Practice;
use crate::model::schedule::{EventSpan, ScheduleEvent};
use crate::repository::{Collections, EventStore};
use crate::time::days_in_range;

pub struct CalendarService<'a, S: EventStore> {
    collections: &'a Collections<S>,
}

impl<'a, S: EventStore> CalendarService<'a, S> {
    pub fn new(collections: &'a Collections<S>) -> Self {
        Self { collections }
    }

    /// Reads the current snapshots and builds a fresh index.
    pub fn index(&self) -> Result<CalendarDateIndex> {
        let practices = self.collections.practices()?;
        let schedules = self.collections.schedules()?;
        Ok(build_calendar_index(&practices, &schedules))
    }
}

// Standalone functions for pure logic

/// Builds the date index. Schedules come first on each date in input order,
/// then practice records in input order. Multi-day events get their primary
/// entry on the first day and a copy flagged `is_middle_day` on every later
/// day through the end date. Records without any date are skipped.
pub fn build_calendar_index(practices: &[Practice], schedules: &[ScheduleEvent]) -> CalendarDateIndex {
    let mut index = CalendarDateIndex::new();

    for event in schedules {
        let Some(span) = event.span() else {
            debug!("schedule {} has no date, skipping", event.id);
            continue;
        };
        match span {
            EventSpan::Single(date) => {
                index.push(date, schedule_entry(event, false));
            }
            EventSpan::Range { start, end } => {
                index.push(start, schedule_entry(event, false));
                for date in days_in_range(start, end).skip(1) {
                    index.push(date, schedule_entry(event, true));
                }
            }
        }
    }

    for practice in practices {
        let Some(date) = practice.date else {
            debug!("practice {} has no date, skipping", practice.id);
            continue;
        };
        index.push(date, practice_entry(practice));
    }

    index
}

fn schedule_entry(event: &ScheduleEvent, is_middle_day: bool) -> CalendarEntry {
    CalendarEntry::Schedule(ScheduleEntry {
        event: event.clone(),
        is_middle_day,
    })
}

fn practice_entry(practice: &Practice) -> CalendarEntry {
    CalendarEntry::PracticeRecord(PracticeRecordEntry {
        id: practice.id.clone(),
        label: practice.category.display_name().to_string(),
        time_window: practice.time_window(),
        practice: practice.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::practice::PracticeCategory;
    use crate::model::schedule::EventType;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn practice(date: NaiveDate, category: PracticeCategory) -> Practice {
        Practice::new(date, category, 3).unwrap()
    }

    #[test]
    fn test_multi_day_event_spans_every_day() {
        let camp = ScheduleEvent::new_multi_day("Camp", EventType::Event, d(2025, 3, 10), d(2025, 3, 12)).unwrap();
        let index = build_calendar_index(&[], &[camp]);

        assert_eq!(index.len(), 3);
        let first = &index.entries_on(d(2025, 3, 10))[0];
        assert_eq!(first.title(), "Camp");
        assert!(!first.is_middle_day());
        assert!(index.entries_on(d(2025, 3, 11))[0].is_middle_day());
        assert!(index.entries_on(d(2025, 3, 12))[0].is_middle_day());
        assert!(index.entries_on(d(2025, 3, 13)).is_empty());
        assert!(index.entries_on_str("2025-03-11")[0].is_middle_day());
    }

    #[test]
    fn test_every_day_of_a_long_range_is_tagged() {
        let start = d(2025, 1, 28);
        let end = d(2025, 2, 3);
        let trip = ScheduleEvent::new_multi_day("Road trip", EventType::Game, start, end).unwrap();
        let index = build_calendar_index(&[], &[trip]);

        for date in days_in_range(start, end) {
            let entries = index.entries_on(date);
            assert_eq!(entries.len(), 1, "missing entry on {}", date);
            assert_eq!(entries[0].is_middle_day(), date != start);
        }
    }

    #[test]
    fn test_reversed_range_keeps_only_primary() {
        let mut event = ScheduleEvent::new("Broken", EventType::Other, d(2025, 3, 12)).unwrap();
        event.date = None;
        event.is_multi_day = true;
        event.start_date = Some(d(2025, 3, 12));
        event.end_date = Some(d(2025, 3, 10));

        let index = build_calendar_index(&[], &[event]);
        assert_eq!(index.len(), 1);
        assert!(!index.entries_on(d(2025, 3, 12))[0].is_middle_day());
    }

    #[test]
    fn test_schedules_before_practices_in_input_order() {
        let day = d(2025, 3, 10);
        let p1 = practice(day, PracticeCategory::Batting);
        let p2 = practice(day, PracticeCategory::Pitching);
        let s1 = ScheduleEvent::new("Meeting", EventType::Meeting, day).unwrap();
        let s2 = ScheduleEvent::new("Game vs Hawks", EventType::Game, day).unwrap();

        let index = build_calendar_index(&[p1, p2], &[s1, s2]);
        let titles: Vec<&str> = index.entries_on(day).iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Meeting", "Game vs Hawks", "Batting", "Pitching"]);
    }

    #[test]
    fn test_practice_record_entry() {
        let day = d(2025, 3, 10);
        let mut p = practice(day, PracticeCategory::TeamPractice);
        p.start_time = Some("09:00".to_string());
        p.end_time = Some("12:00".to_string());

        let index = build_calendar_index(&[p.clone()], &[]);
        match &index.entries_on(day)[0] {
            CalendarEntry::PracticeRecord(entry) => {
                assert_eq!(entry.label, "Team Practice");
                assert_eq!(entry.time_window, "09:00-12:00");
                assert_eq!(entry.practice, p);
            }
            other => panic!("unexpected entry {:?}", other),
        }
    }

    #[test]
    fn test_dateless_records_are_skipped() {
        let mut p = practice(d(2025, 3, 10), PracticeCategory::Running);
        p.date = None;
        let mut s = ScheduleEvent::new("Nowhere", EventType::Other, d(2025, 3, 10)).unwrap();
        s.date = None;
        let kept = ScheduleEvent::new("Kept", EventType::Other, d(2025, 3, 11)).unwrap();

        let index = build_calendar_index(&[p], &[s, kept]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries_on(d(2025, 3, 11))[0].title(), "Kept");
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let day = d(2025, 3, 10);
        let practices = vec![practice(day, PracticeCategory::Fielding)];
        let schedules = vec![
            ScheduleEvent::new_multi_day("Camp", EventType::Event, day, d(2025, 3, 14)).unwrap(),
        ];
        assert_eq!(
            build_calendar_index(&practices, &schedules),
            build_calendar_index(&practices, &schedules)
        );
    }
}
