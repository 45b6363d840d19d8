use serde::{Deserialize, Serialize};

use super::{Category, Discipline, ParticipantId};
use crate::error::{Result, ResultsError};

/// Per-discipline times in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splits {
    pub swimming: u32,
    pub cycling: u32,
    pub running: u32,
}

impl Splits {
    pub fn sum(&self) -> u64 {
        u64::from(self.swimming) + u64::from(self.cycling) + u64::from(self.running)
    }

    fn slot_mut(&mut self, discipline: Discipline) -> &mut u32 {
        match discipline {
            Discipline::Swimming => &mut self.swimming,
            Discipline::Cycling => &mut self.cycling,
            Discipline::Running => &mut self.running,
        }
    }
}

/// A registered triathlon participant.
///
/// The total time is not kept in sync with the splits: it stays at its last
/// computed value (initially 0) until [`Participant::calculate_total_time`]
/// runs again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    id: ParticipantId,
    category: Category,
    splits: Splits,
    total_time: u64,
}

impl Participant {
    pub fn new(name: impl Into<String>, id: Option<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            id: ParticipantId::new(id),
            category,
            splits: Splits::default(),
            total_time: 0,
        }
    }

    pub fn elite(name: impl Into<String>, id: Option<String>, sponsor: impl Into<String>) -> Self {
        Self::new(name, id, Category::elite(sponsor))
    }

    pub fn beginner(name: impl Into<String>, id: Option<String>) -> Self {
        Self::new(name, id, Category::Beginner)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn splits(&self) -> &Splits {
        &self.splits
    }

    pub fn sponsor_name(&self) -> Option<&str> {
        self.category.sponsor()
    }

    /// See [`Category::set_sponsor`].
    pub fn set_sponsor_name(&mut self, sponsor: impl Into<String>) -> bool {
        self.category.set_sponsor(sponsor)
    }

    /// Assigns one split. A negative value is rejected and the participant
    /// is left unchanged.
    pub fn set_split(&mut self, discipline: Discipline, minutes: i32) -> Result<()> {
        let value = u32::try_from(minutes)
            .map_err(|_| ResultsError::InvalidDuration { discipline, minutes })?;
        *self.splits.slot_mut(discipline) = value;
        Ok(())
    }

    pub fn set_swimming_time(&mut self, minutes: i32) -> Result<()> {
        self.set_split(Discipline::Swimming, minutes)
    }

    pub fn set_cycling_time(&mut self, minutes: i32) -> Result<()> {
        self.set_split(Discipline::Cycling, minutes)
    }

    pub fn set_running_time(&mut self, minutes: i32) -> Result<()> {
        self.set_split(Discipline::Running, minutes)
    }

    pub fn swimming_time(&self) -> u32 {
        self.splits.swimming
    }

    pub fn cycling_time(&self) -> u32 {
        self.splits.cycling
    }

    pub fn running_time(&self) -> u32 {
        self.splits.running
    }

    /// Recomputes and stores the total from the current splits.
    pub fn calculate_total_time(&mut self) -> u64 {
        self.total_time = self.splits.sum();
        self.total_time
    }

    /// Last computed total, 0 if never computed.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }
}
