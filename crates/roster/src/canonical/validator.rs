use super::models::{FORMAT_VERSION, RosterFormat};
use crate::{Result, RosterError};
use std::collections::HashMap;
use tracing::warn;
use validator::Validate;

pub struct RosterValidator;

impl RosterValidator {
    /// Checks a roster before it is loaded into a registry.
    ///
    /// Split times are not checked here; negative values are rejected when
    /// they are assigned to a participant.
    pub fn validate(roster: &RosterFormat) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if roster.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                roster.format_version, FORMAT_VERSION
            ));
        }

        if roster.event.name.trim().is_empty() {
            report
                .warnings
                .push("Event name is not specified".to_string());
        }

        if roster.participants.is_empty() {
            report
                .warnings
                .push("Roster has no participants".to_string());
        }

        let mut seen_ids: HashMap<&str, usize> = HashMap::new();

        for (idx, participant) in roster.participants.iter().enumerate() {
            let label = format!("{}. {}", idx + 1, participant.name);

            if let Err(errors) = participant.validate() {
                for (field, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        report.errors.push(format!(
                            "Participant {}: {}: {}",
                            idx + 1,
                            field,
                            error
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| error.code.to_string())
                        ));
                    }
                }
            }

            if let Some(sponsor) = participant.category.sponsor()
                && sponsor.trim().is_empty()
            {
                report.errors.push(format!(
                    "Elite participant '{}' has no sponsor",
                    label
                ));
            }

            match participant.id.as_deref() {
                None | Some("") => {
                    report.warnings.push(format!(
                        "Participant '{}' has no id, one will be generated",
                        label
                    ));
                }
                Some(id) => {
                    if let Some(first) = seen_ids.insert(id, idx + 1) {
                        report.warnings.push(format!(
                            "Participant '{}' reuses id '{}' of participant {}",
                            label, id, first
                        ));
                    }
                }
            }
        }

        if !report.errors.is_empty() {
            Err(RosterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
