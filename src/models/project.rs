//! Project records

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub owner: String,
    /// Completion percentage, 0..=100
    pub progress: u8,
}

impl Project {
    fn new(id: u32, name: &str, owner: &str, progress: u8) -> Self {
        Self {
            id,
            name: name.to_string(),
            owner: owner.to_string(),
            progress: progress.min(100),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}

pub fn demo_projects() -> Vec<Project> {
    vec![
        Project::new(1, "Website refresh", "Dana Whitfield", 72),
        Project::new(2, "Mobile onboarding", "Luis Ortega", 45),
        Project::new(3, "Warehouse integration", "Priya Nair", 100),
        Project::new(4, "Quarterly reporting", "Sam Okafor", 18),
    ]
}
