use results::models::{Category, Discipline};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const FORMAT_VERSION: &str = "1.0.0";

/// On-disk roster of one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFormat {
    pub format_version: String,
    pub event: EventData,
    #[serde(default)]
    pub participants: Vec<ParticipantData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParticipantData {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub splits: SplitData,
}

/// Raw split minutes as entered. Signed so that bad input reaches the
/// participant setters, which reject it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitData {
    pub swimming: i32,
    pub cycling: i32,
    pub running: i32,
}

impl SplitData {
    pub fn new(swimming: i32, cycling: i32, running: i32) -> Self {
        Self {
            swimming,
            cycling,
            running,
        }
    }

    pub fn get(&self, discipline: Discipline) -> i32 {
        match discipline {
            Discipline::Swimming => self.swimming,
            Discipline::Cycling => self.cycling,
            Discipline::Running => self.running,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("Participant name is required".into());
        Err(error)
    } else {
        Ok(())
    }
}
