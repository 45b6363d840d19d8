use crate::Result;
use crate::canonical::models::RosterFormat;
use std::path::Path;
use tracing::debug;

pub fn load_roster(path: impl AsRef<Path>) -> Result<RosterFormat> {
    let path = path.as_ref();
    debug!("Reading roster file {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_roster(&content)
}

pub fn parse_roster(json: &str) -> Result<RosterFormat> {
    Ok(serde_json::from_str(json)?)
}
