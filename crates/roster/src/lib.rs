pub mod canonical;
pub mod error;
pub mod loader;
pub mod sample;

pub use canonical::transformer::RosterTransformer;
pub use canonical::validator::{RosterValidator, ValidationReport};
pub use error::{Result, RosterError};
pub use loader::{load_roster, parse_roster};
pub use sample::sample_roster;
