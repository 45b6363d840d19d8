use std::fmt;

use crate::models::Participant;
use crate::services::ranking::Ranking;

const TITLE: &str = "Triathlon Results (Sorted by Total Time):";
const RULE: &str = "----------------------------------------";

/// Detail block for a single participant.
pub struct ParticipantDetails<'a>(pub &'a Participant);

impl fmt::Display for ParticipantDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        writeln!(f)?;
        writeln!(f, "Participant Details:")?;
        writeln!(f, "Name: {}", p.name())?;
        writeln!(f, "ID: {}", p.id())?;
        writeln!(f, "Total Time: {} minutes", p.total_time())?;
        if let Some(sponsor) = p.sponsor_name() {
            writeln!(f, "Sponsor: {sponsor}")?;
        }
        Ok(())
    }
}

/// Full text report: ranked listing followed by the fastest and second
/// fastest participants when there are enough of them.
pub struct Report<'r, 'a>(pub &'r Ranking<'a>);

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranking = self.0;
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", RULE)?;

        for entry in ranking.entries() {
            writeln!(
                f,
                "Rank {}: {} (Total Time: {} minutes)",
                entry.rank,
                entry.participant.name(),
                entry.participant.total_time()
            )?;
            write!(f, "{}", ParticipantDetails(entry.participant))?;
        }

        if let Some(fastest) = ranking.fastest() {
            writeln!(f)?;
            writeln!(f, "Fastest Participant:")?;
            write!(f, "{}", ParticipantDetails(fastest))?;

            if let Some(second) = ranking.second_fastest() {
                writeln!(f)?;
                writeln!(f, "Second Fastest Participant:")?;
                write!(f, "{}", ParticipantDetails(second))?;
            }
        }

        Ok(())
    }
}

pub fn render(ranking: &Ranking<'_>) -> String {
    Report(ranking).to_string()
}

pub fn render_details(participant: &Participant) -> String {
    ParticipantDetails(participant).to_string()
}
