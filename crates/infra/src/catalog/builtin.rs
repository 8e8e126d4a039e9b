//! The school's standing extracurricular activities

use mergington_core::ActivityCatalog;
use mergington_domain::{ActivityDetails, Result};

/// (name, description, schedule, max participants, seeded participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, [&'static str; 2]);

const SEED: [SeedRow; 9] = [
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        ["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        ["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        ["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        ["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        ["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        ["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

/// Catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl ActivityCatalog for BuiltinCatalog {
    fn load(&self) -> Result<Vec<(String, ActivityDetails)>> {
        Ok(SEED
            .iter()
            .map(|(name, description, schedule, max, participants)| {
                let details = ActivityDetails::new(*description, *schedule, *max)
                    .with_participants(participants.iter().copied());
                ((*name).to_string(), details)
            })
            .collect())
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}
