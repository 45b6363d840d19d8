use super::models::{ParticipantData, RosterFormat};
use crate::{Result, RosterError};
use results::models::{Discipline, Participant};
use results::Registry;
use tracing::{debug, info};

pub struct RosterTransformer;

impl RosterTransformer {
    /// Registers every roster entry in file order and assigns its splits.
    ///
    /// The first invalid split aborts the whole roster; no partial registry
    /// is returned.
    pub fn into_registry(roster: RosterFormat) -> Result<Registry> {
        info!(
            "Registering {} participant(s) for {}",
            roster.participants.len(),
            roster.event.name
        );

        let mut registry = Registry::new();
        for data in roster.participants {
            registry.register(Self::build_participant(data)?);
        }

        Ok(registry)
    }

    fn build_participant(data: ParticipantData) -> Result<Participant> {
        let ParticipantData {
            name,
            id,
            category,
            splits,
        } = data;

        let mut participant = Participant::new(name, id, category);
        for &discipline in Discipline::all() {
            participant
                .set_split(discipline, splits.get(discipline))
                .map_err(|source| RosterError::InvalidParticipant {
                    name: participant.name().to_string(),
                    source,
                })?;
        }

        debug!(
            "Built participant {} ({}) with splits {:?}",
            participant.name(),
            participant.id(),
            participant.splits()
        );
        Ok(participant)
    }
}
