use serde::{Deserialize, Serialize};
use uuid::Uuid;

const GENERATED_ID_LEN: usize = 8;

/// Short opaque identifier of a participant.
///
/// Uniqueness across a registry is not checked; two participants may share
/// an id and are then only told apart by their position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Keeps a supplied id verbatim and generates one only when the caller
    /// omitted it or passed an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use results::models::ParticipantId;
    ///
    /// let given = ParticipantId::new(Some("E001".to_string()));
    /// assert_eq!(given.as_str(), "E001");
    ///
    /// let generated = ParticipantId::new(None);
    /// assert_eq!(generated.as_str().len(), 8);
    /// ```
    pub fn new(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Self(id),
            _ => Self::generate(),
        }
    }

    /// First eight characters of a random v4 UUID.
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().to_string();
        id.truncate(GENERATED_ID_LEN);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
