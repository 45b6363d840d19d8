use tracing::{debug, info};

use crate::models::Participant;

/// Ordered collection of participants in registration order.
///
/// No deduplication happens on register; participants sharing an id coexist.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    participants: Vec<Participant>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, participant: Participant) {
        debug!(
            "Registering participant {} ({}, {})",
            participant.name(),
            participant.id(),
            participant.category().label()
        );
        self.participants.push(participant);
    }

    /// Recomputes the total time of every participant, overwriting any
    /// previously computed value.
    pub fn compute_all_totals(&mut self) {
        for participant in &mut self.participants {
            let total = participant.calculate_total_time();
            debug!("Total time for {}: {} minutes", participant.name(), total);
        }
        info!("Computed totals for {} participant(s)", self.participants.len());
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Mutable access for split entry before totals are computed.
    pub fn participants_mut(&mut self) -> &mut [Participant] {
        &mut self.participants
    }

    /// First participant registered with `id`, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id().as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl FromIterator<Participant> for Registry {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        let mut registry = Self::new();
        for participant in iter {
            registry.register(participant);
        }
        registry
    }
}
