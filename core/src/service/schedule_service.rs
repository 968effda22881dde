use anyhow::Result;
use chrono::NaiveDate;

use crate::error::EngineError;
use crate::model::schedule::ScheduleEvent;
use crate::repository::{Collections, EventStore};

pub struct ScheduleService<'a, S: EventStore> {
    collections: &'a Collections<S>,
}

impl<'a, S: EventStore> ScheduleService<'a, S> {
    pub fn new(collections: &'a Collections<S>) -> Self {
        Self { collections }
    }

    pub fn add(&self, event: ScheduleEvent) -> Result<ScheduleEvent> {
        if event.title.trim().is_empty() {
            return Err(EngineError::InvalidSchedule("title is required".to_string()).into());
        }
        if event.span().is_none() {
            return Err(EngineError::InvalidSchedule(format!("'{}' has no date", event.title)).into());
        }
        let mut schedules = self.collections.schedules()?;
        schedules.push(event.clone());
        self.collections.save_schedules(&schedules)?;
        Ok(event)
    }

    pub fn list(&self) -> Result<Vec<ScheduleEvent>> {
        self.collections.schedules()
    }

    pub fn get(&self, id: &str) -> Result<ScheduleEvent> {
        self.collections
            .schedules()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::NotFound { kind: "Schedule", id: id.to_string() }.into())
    }

    /// Events still running on or after `from`, earliest first.
    pub fn upcoming(&self, from: NaiveDate) -> Result<Vec<ScheduleEvent>> {
        let mut events: Vec<_> = self
            .collections
            .schedules()?
            .into_iter()
            .filter(|s| s.span().map_or(false, |span| span.last_day() >= from))
            .collect();
        events.sort_by_key(|s| s.span().map(|span| span.first_day()));
        Ok(events)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut schedules = self.collections.schedules()?;
        let initial_len = schedules.len();
        schedules.retain(|s| s.id != id);

        if schedules.len() == initial_len {
            return Err(EngineError::NotFound { kind: "Schedule", id: id.to_string() }.into());
        }

        self.collections.save_schedules(&schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schedule::EventType;
    use crate::repository::MemoryEventStore;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_upcoming_sorted_and_includes_running_events() {
        let collections = Collections::new(MemoryEventStore::new());
        let service = ScheduleService::new(&collections);

        let past = ScheduleEvent::new("Old game", EventType::Game, d(2025, 3, 1)).unwrap();
        let later = ScheduleEvent::new("Meeting", EventType::Meeting, d(2025, 3, 20)).unwrap();
        let running =
            ScheduleEvent::new_multi_day("Camp", EventType::Event, d(2025, 3, 8), d(2025, 3, 12)).unwrap();
        for event in [past, later.clone(), running.clone()] {
            service.add(event).unwrap();
        }

        let upcoming = service.upcoming(d(2025, 3, 10)).unwrap();
        assert_eq!(upcoming, vec![running, later]);
    }

    #[test]
    fn test_get_and_delete() {
        let collections = Collections::new(MemoryEventStore::new());
        let service = ScheduleService::new(&collections);
        let event = service
            .add(ScheduleEvent::new("Game", EventType::Game, d(2025, 3, 1)).unwrap())
            .unwrap();

        assert_eq!(service.get(&event.id).unwrap(), event);
        service.delete(&event.id).unwrap();
        assert!(service.get(&event.id).is_err());
        assert!(service.delete(&event.id).is_err());
    }

    #[test]
    fn test_rejects_dateless_event() {
        let collections = Collections::new(MemoryEventStore::new());
        let service = ScheduleService::new(&collections);
        let mut event = ScheduleEvent::new("Game", EventType::Game, d(2025, 3, 1)).unwrap();
        event.date = None;
        assert!(service.add(event).is_err());
    }
}
