use anyhow::{Context, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::model::game_result::GameResult;
use crate::model::practice::Practice;
use crate::model::schedule::ScheduleEvent;
use crate::repository::traits::EventStore;

pub const PRACTICES_KEY: &str = "practices";
pub const SCHEDULES_KEY: &str = "schedules";
pub const GAME_RESULTS_KEY: &str = "gameResults";

/// Typed snapshot access to the three record collections.
pub struct Collections<S: EventStore> {
    store: S,
}

impl<S: EventStore> Collections<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn practices(&self) -> Result<Vec<Practice>> {
        self.load(PRACTICES_KEY)
    }

    pub fn save_practices(&self, practices: &[Practice]) -> Result<()> {
        self.save(PRACTICES_KEY, practices)
    }

    pub fn schedules(&self) -> Result<Vec<ScheduleEvent>> {
        self.load(SCHEDULES_KEY)
    }

    pub fn save_schedules(&self, schedules: &[ScheduleEvent]) -> Result<()> {
        self.save(SCHEDULES_KEY, schedules)
    }

    pub fn game_results(&self) -> Result<Vec<GameResult>> {
        self.load(GAME_RESULTS_KEY)
    }

    pub fn save_game_results(&self, results: &[GameResult]) -> Result<()> {
        self.save(GAME_RESULTS_KEY, results)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(content) = self.store.load(key)? else {
            return Ok(Vec::new());
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Value> = serde_json::from_str(&content)
            .inspect_err(|e| warn!("stored '{}' is not readable: {}", key, e))
            .with_context(|| format!("Could not parse stored '{}'", key))?;

        // One unreadable record is dropped; the rest of the snapshot still loads.
        Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                serde_json::from_value(record)
                    .inspect_err(|e| warn!("skipping record {} in '{}': {}", i, key, e))
                    .ok()
            })
            .collect())
    }

    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        self.store.save(key, &content)
    }
}
