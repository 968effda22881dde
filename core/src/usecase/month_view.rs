use crate::model::calendar::{CalendarDateIndex, CalendarEntry};
use crate::model::summary::MonthlySummary;
use crate::repository::{Collections, EventStore};
use crate::service::calendar_service::build_calendar_index;
use crate::service::stats_service::aggregate_monthly;
use crate::time::{month_bounds, month_days};
use chrono::NaiveDate;
use anyhow::{anyhow, Result};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: NaiveDate,
    pub entries: Vec<CalendarEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Every day of the month, including empty ones.
    pub days: Vec<DayView>,
    pub summary: MonthlySummary,
}

impl MonthView {
    pub fn busy_days(&self) -> impl Iterator<Item = &DayView> {
        self.days.iter().filter(|d| !d.entries.is_empty())
    }
}

pub struct MonthViewUseCase<'a, S: EventStore> {
    collections: &'a Collections<S>,
}

impl<'a, S: EventStore> MonthViewUseCase<'a, S> {
    pub fn new(collections: &'a Collections<S>) -> Self {
        Self { collections }
    }

    /// Reads fresh snapshots and rebuilds both the index and the summary.
    pub fn get(&self, year: i32, month: u32) -> Result<MonthView> {
        let (first, last) = month_bounds(year, month)
            .ok_or_else(|| anyhow!("Invalid month: {}-{}", year, month))?;

        let practices = self.collections.practices()?;
        let schedules = self.collections.schedules()?;
        let results = self.collections.game_results()?;

        let index = build_calendar_index(&practices, &schedules).restrict(first, last);
        let summary = aggregate_monthly(&results, year, month);

        Ok(MonthView {
            year,
            month,
            days: layout_days(&index, year, month),
            summary,
        })
    }
}

fn layout_days(index: &CalendarDateIndex, year: i32, month: u32) -> Vec<DayView> {
    month_days(year, month)
        .into_iter()
        .map(|date| DayView {
            date,
            entries: index.entries_on(date).to_vec(),
        })
        .collect()
}
