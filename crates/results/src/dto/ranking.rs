use serde::Serialize;

use crate::models::Participant;
use crate::services::ranking::Ranking;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantInfo {
    pub name: String,
    pub id: String,
    pub category: String,
    pub swimming: u32,
    pub cycling: u32,
    pub running: u32,
    pub total_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub participant: ParticipantInfo,
}

/// Serializable form of a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingReport {
    pub entries: Vec<RankingEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest: Option<ParticipantInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_fastest: Option<ParticipantInfo>,
}

impl From<&Participant> for ParticipantInfo {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name().to_string(),
            id: participant.id().to_string(),
            category: participant.category().label().to_string(),
            swimming: participant.swimming_time(),
            cycling: participant.cycling_time(),
            running: participant.running_time(),
            total_time: participant.total_time(),
            sponsor: participant.sponsor_name().map(str::to_string),
        }
    }
}

impl From<&Ranking<'_>> for RankingReport {
    fn from(ranking: &Ranking<'_>) -> Self {
        Self {
            entries: ranking
                .entries()
                .iter()
                .map(|entry| RankingEntry {
                    rank: entry.rank,
                    participant: entry.participant.into(),
                })
                .collect(),
            fastest: ranking.fastest().map(ParticipantInfo::from),
            second_fastest: ranking.second_fastest().map(ParticipantInfo::from),
        }
    }
}
