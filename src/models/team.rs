//! Maintenance team model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Maintenance team record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub id: i32,
    pub name: String,
    /// Ordered technician roster. Names are not unique across teams; the
    /// first member is the default technician when this team is selected on
    /// a request.
    pub members: Vec<String>,
    pub specialization: String,
    pub company: String,
    pub notes: Option<String>,
}

impl Team {
    /// Add a member at the end of the roster. Whitespace is trimmed and a
    /// name already on this team is rejected.
    pub fn add_member(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.members.iter().any(|m| m == name) {
            return false;
        }
        self.members.push(name.to_string());
        true
    }

    /// Remove every occurrence of an exact member name.
    pub fn remove_member(&mut self, name: &str) {
        self.members.retain(|m| m != name);
    }
}

/// Create team request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub specialization: String,
    pub company: String,
    pub notes: Option<String>,
}

/// Update team request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeam {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub members: Option<Vec<String>>,
    pub specialization: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[&str]) -> Team {
        Team {
            id: 1,
            name: "Mech".to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            specialization: "Mechanical".to_string(),
            company: "GearKeep Inc".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_add_member_trims_and_dedups() {
        let mut t = team(&["Alice"]);
        assert!(t.add_member("  Bob "));
        assert_eq!(t.members, vec!["Alice", "Bob"]);
        assert!(!t.add_member("Bob"));
        assert!(!t.add_member("   "));
        assert_eq!(t.members.len(), 2);
    }

    #[test]
    fn test_remove_member() {
        let mut t = team(&["Alice", "Bob"]);
        t.remove_member("Alice");
        assert_eq!(t.members, vec!["Bob"]);
        // removing an unknown name is a no-op
        t.remove_member("Carol");
        assert_eq!(t.members, vec!["Bob"]);
    }
}
