// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    /// Roster of player ids, maintained by the store as players come and go.
    pub players: Vec<Uuid>,
    pub matches: i32,
    pub wins: i32,
    pub losses: i32,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new team. Counters and roster always start zeroed,
/// whatever the caller sends.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub short_name: String,
}

/// Partial update to a team. Absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub players: Option<Vec<Uuid>>,
    pub matches: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
}

impl NewTeam {
    /// Validate a team creation request
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if name.len() > 50 {
            return Err("Team name cannot exceed 50 characters".to_string());
        }

        if !name.chars().any(|c| c.is_alphanumeric()) {
            return Err("Team name must contain at least one letter or number".to_string());
        }

        let short_name = self.short_name.trim();
        if short_name.is_empty() {
            return Err("Short name cannot be empty".to_string());
        }

        if short_name.chars().count() > 5 {
            return Err("Short name cannot exceed 5 characters".to_string());
        }

        Ok(())
    }

    /// Get sanitized team name
    pub fn get_sanitized_name(&self) -> String {
        self.name
            .trim()
            .chars()
            .filter(|&c| c != '\0' && c != '\t' && c != '\r' && c != '\n')
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl TeamUpdate {
    /// Validate a team update request
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_none()
            && self.short_name.is_none()
            && self.players.is_none()
            && self.matches.is_none()
            && self.wins.is_none()
            && self.losses.is_none()
        {
            return Err("At least one field must be provided for update".to_string());
        }

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err("Team name cannot be empty".to_string());
            }

            if name.len() > 50 {
                return Err("Team name cannot exceed 50 characters".to_string());
            }
        }

        if let Some(short_name) = &self.short_name {
            let short_name = short_name.trim();
            if short_name.is_empty() {
                return Err("Short name cannot be empty".to_string());
            }

            if short_name.chars().count() > 5 {
                return Err("Short name cannot exceed 5 characters".to_string());
            }
        }

        Ok(())
    }

    /// Merge the provided fields onto an existing team, last write wins.
    pub fn apply(&self, team: &mut Team) {
        if let Some(name) = &self.name {
            team.name = name.clone();
        }
        if let Some(short_name) = &self.short_name {
            team.short_name = short_name.clone();
        }
        if let Some(players) = &self.players {
            team.players = players.clone();
        }
        if let Some(matches) = self.matches {
            team.matches = matches;
        }
        if let Some(wins) = self.wins {
            team.wins = wins;
        }
        if let Some(losses) = self.losses {
            team.losses = losses;
        }
    }
}
