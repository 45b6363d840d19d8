pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, ResultsError};
pub use models::{Category, Discipline, Participant, ParticipantId, Splits};
pub use repository::registry::Registry;
pub use services::ranking::{RankedEntry, Ranking, rank};
pub use services::report::{Report, render, render_details};
