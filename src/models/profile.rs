//! Profile records

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Member => "Member",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Admin" | "admin" => Role::Admin,
            "Manager" | "manager" => Role::Manager,
            _ => Role::Member,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Profile {
    pub fn new(id: u32, name: &str, email: &str, role: Role) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    /// Initials for the avatar badge
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Next free id for a new profile
pub fn next_profile_id(profiles: &[Profile]) -> u32 {
    profiles.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

pub fn demo_profiles() -> Vec<Profile> {
    vec![
        Profile::new(1, "Dana Whitfield", "dana@example.com", Role::Admin),
        Profile::new(2, "Luis Ortega", "luis@example.com", Role::Manager),
        Profile::new(3, "Priya Nair", "priya@example.com", Role::Member),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = Profile::new(1, "dana whitfield", "d@example.com", Role::Admin);
        assert_eq!(profile.initials(), "DW");
        let profile = Profile::new(2, "Cher", "c@example.com", Role::Member);
        assert_eq!(profile.initials(), "C");
    }

    #[test]
    fn test_next_profile_id() {
        assert_eq!(next_profile_id(&[]), 1);
        assert_eq!(next_profile_id(&demo_profiles()), 4);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::from_label("Manager"), Role::Manager);
        assert_eq!(Role::from_label("unknown"), Role::Member);
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
