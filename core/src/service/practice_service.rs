use anyhow::Result;
use chrono::NaiveDate;

use crate::error::EngineError;
use crate::model::practice::Practice;
use crate::repository::{Collections, EventStore};

pub struct PracticeService<'a, S: EventStore> {
    collections: &'a Collections<S>,
}

impl<'a, S: EventStore> PracticeService<'a, S> {
    pub fn new(collections: &'a Collections<S>) -> Self {
        Self { collections }
    }

    pub fn add(&self, practice: Practice) -> Result<Practice> {
        if practice.date.is_none() {
            return Err(EngineError::InvalidPractice("date is required".to_string()).into());
        }
        if !(1..=5).contains(&practice.condition) {
            return Err(EngineError::InvalidPractice(format!(
                "condition must be between 1 and 5, got {}",
                practice.condition
            ))
            .into());
        }
        let mut practices = self.collections.practices()?;
        practices.push(practice.clone());
        self.collections.save_practices(&practices)?;
        Ok(practice)
    }

    pub fn list(&self) -> Result<Vec<Practice>> {
        self.collections.practices()
    }

    pub fn list_on(&self, date: NaiveDate) -> Result<Vec<Practice>> {
        Ok(self
            .collections
            .practices()?
            .into_iter()
            .filter(|p| p.date == Some(date))
            .collect())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut practices = self.collections.practices()?;
        let initial_len = practices.len();
        practices.retain(|p| p.id != id);

        if practices.len() == initial_len {
            return Err(EngineError::NotFound { kind: "Practice", id: id.to_string() }.into());
        }

        self.collections.save_practices(&practices)
    }
}
