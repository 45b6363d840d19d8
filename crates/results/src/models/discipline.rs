use serde::{Deserialize, Serialize};

/// One leg of a triathlon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Swimming,
    Cycling,
    Running,
}

impl Discipline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Cycling => "Cycling",
            Self::Running => "Running",
        }
    }

    /// Disciplines in race order.
    pub fn all() -> &'static [Discipline] {
        &[Self::Swimming, Self::Cycling, Self::Running]
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
