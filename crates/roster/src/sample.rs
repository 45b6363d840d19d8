use crate::canonical::models::{EventData, FORMAT_VERSION, ParticipantData, RosterFormat, SplitData};
use results::models::Category;

/// Built-in demo event used when no roster file is given.
pub fn sample_roster() -> RosterFormat {
    RosterFormat {
        format_version: FORMAT_VERSION.to_string(),
        event: EventData {
            name: "Sample Triathlon".to_string(),
            location: None,
        },
        participants: vec![
            entry("Alice", "E001", Category::elite("SportsCo"), SplitData::new(25, 40, 20)),
            entry("Bob", "B001", Category::Beginner, SplitData::new(20, 35, 25)),
            entry("Charlie", "E002", Category::elite("FitGear"), SplitData::new(30, 50, 30)),
            entry("Diana", "B002", Category::Beginner, SplitData::new(28, 42, 18)),
        ],
    }
}

fn entry(name: &str, id: &str, category: Category, splits: SplitData) -> ParticipantData {
    ParticipantData {
        name: name.to_string(),
        id: Some(id.to_string()),
        category,
        splits,
    }
}
