use serde::{Deserialize, Serialize};

/// Entry category of a participant.
///
/// Only the elite category carries extra data; everything else about a
/// participant is shared across categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Category {
    #[default]
    Base,
    Beginner,
    Elite { sponsor: String },
}

impl Category {
    pub fn elite(sponsor: impl Into<String>) -> Self {
        Self::Elite {
            sponsor: sponsor.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Beginner => "beginner",
            Self::Elite { .. } => "elite",
        }
    }

    /// Sponsor name, present only for elite entrants.
    pub fn sponsor(&self) -> Option<&str> {
        match self {
            Self::Elite { sponsor } => Some(sponsor),
            _ => None,
        }
    }

    /// Replaces the sponsor of an elite entrant. Returns `false` and leaves
    /// the category untouched for any other category.
    pub fn set_sponsor(&mut self, new_sponsor: impl Into<String>) -> bool {
        match self {
            Self::Elite { sponsor } => {
                *sponsor = new_sponsor.into();
                true
            }
            _ => false,
        }
    }
}
