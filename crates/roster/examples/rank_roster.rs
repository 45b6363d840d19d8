use results::dto::ranking::RankingReport;
use roster::{RosterTransformer, RosterValidator, load_roster};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rosters/club_sprint.json".to_string());

    println!("Ranking roster: {}", path);

    let roster = load_roster(&path)?;
    let report = RosterValidator::validate(&roster)?;
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }

    let mut registry = RosterTransformer::into_registry(roster)?;
    registry.compute_all_totals();

    let ranking = results::rank(&registry);
    println!("{}", serde_json::to_string_pretty(&RankingReport::from(&ranking))?);

    Ok(())
}
