use anyhow::Result;
use log::{debug, error, info};

use crate::error::{EngineError, EngineResult};
use crate::model::game_result::GameResult;
use crate::model::schedule::ScheduleEvent;
use crate::repository::{Collections, EventStore};

pub struct GameResultService<'a, S: EventStore> {
    collections: &'a Collections<S>,
}

impl<'a, S: EventStore> GameResultService<'a, S> {
    pub fn new(collections: &'a Collections<S>) -> Self {
        Self { collections }
    }

    /// Upserts the result and writes it onto its schedule event, then saves
    /// both collections. The schedule must exist; nothing is written otherwise.
    /// Schedules are saved first and restored if the results save fails.
    pub fn record(&self, incoming: GameResult) -> Result<GameResult> {
        if incoming.game_id.trim().is_empty() {
            return Err(EngineError::InvalidGameResult("gameId is required".to_string()).into());
        }
        let original_schedules = self.collections.schedules()?;
        let mut schedules = original_schedules.clone();
        let pos = schedules
            .iter()
            .position(|s| s.id == incoming.game_id)
            .ok_or_else(|| EngineError::NotFound {
                kind: "Schedule",
                id: incoming.game_id.clone(),
            })?;

        let mut incoming = incoming;
        if incoming.date.is_none() {
            incoming.date = schedules[pos].span().map(|span| span.first_day());
        }

        let existing = self.collections.game_results()?;
        let merged = upsert_game_result(&existing, incoming)?;
        let stored = merged
            .iter()
            .find(|r| r.game_id == schedules[pos].id)
            .cloned()
            .ok_or_else(|| EngineError::InvalidGameResult("upsert lost the record".to_string()))?;

        schedules[pos] = attach_to_schedule(schedules[pos].clone(), stored.clone());

        self.collections.save_schedules(&schedules)?;
        if let Err(e) = self.collections.save_game_results(&merged) {
            error!("result for game {} not saved, restoring schedules: {}", stored.game_id, e);
            if let Err(restore) = self.collections.save_schedules(&original_schedules) {
                error!(
                    "schedules still carry the unsaved result for game {}: {}",
                    stored.game_id, restore
                );
            }
            return Err(e);
        }
        info!("recorded result for game {}", stored.game_id);
        Ok(stored)
    }

    pub fn list(&self) -> Result<Vec<GameResult>> {
        self.collections.game_results()
    }

    pub fn get(&self, game_id: &str) -> Result<Option<GameResult>> {
        Ok(self
            .collections
            .game_results()?
            .into_iter()
            .find(|r| r.game_id == game_id))
    }
}

// Standalone functions for pure logic

/// Replaces the record with the same `game_id` in place, or appends it.
/// The stored outcome is always recomputed from the scores.
pub fn upsert_game_result(existing: &[GameResult], incoming: GameResult) -> EngineResult<Vec<GameResult>> {
    if incoming.game_id.trim().is_empty() {
        return Err(EngineError::InvalidGameResult("gameId is required".to_string()));
    }

    let mut incoming = incoming;
    if incoming.normalize_outcome() {
        debug!(
            "game {}: outcome corrected to {:?} from the score",
            incoming.game_id, incoming.team_result.result
        );
    }

    let mut results = existing.to_vec();
    match results.iter().position(|r| r.game_id == incoming.game_id) {
        Some(pos) => results[pos] = incoming,
        None => results.push(incoming),
    }
    Ok(results)
}

pub fn attach_to_schedule(schedule: ScheduleEvent, result: GameResult) -> ScheduleEvent {
    ScheduleEvent {
        game_result: Some(result),
        ..schedule
    }
}
