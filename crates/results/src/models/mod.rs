pub mod category;
pub mod discipline;
pub mod participant;
pub mod participant_id;

pub use category::Category;
pub use discipline::Discipline;
pub use participant::{Participant, Splits};
pub use participant_id::ParticipantId;
