// src/models/player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Playing role. Closed set, validated at the API boundary.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub role: PlayerRole,
    /// A player may exist without a team.
    pub team_id: Option<Uuid>,
    pub matches: i32,
    // Cumulative batting record
    pub runs: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub fifties: i32,
    pub hundreds: i32,
    pub high_score: i32,
    // Cumulative bowling record
    pub wickets: i32,
    pub balls_bowled: i32,
    pub runs_conceded: i32,
    pub maidens: i32,
    /// Best innings figures as "wickets/runs", e.g. "3/21".
    pub best_bowling: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new player. All career counters start zeroed.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub role: PlayerRole,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

/// Partial update to a player. Absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub role: Option<PlayerRole>,
    pub team_id: Option<Uuid>,
    pub matches: Option<i32>,
    pub runs: Option<i32>,
    pub balls_faced: Option<i32>,
    pub fours: Option<i32>,
    pub sixes: Option<i32>,
    pub fifties: Option<i32>,
    pub hundreds: Option<i32>,
    pub high_score: Option<i32>,
    pub wickets: Option<i32>,
    pub balls_bowled: Option<i32>,
    pub runs_conceded: Option<i32>,
    pub maidens: Option<i32>,
    pub best_bowling: Option<String>,
}

impl NewPlayer {
    /// Validate a player creation request
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Player name cannot be empty".to_string());
        }

        if name.len() > 50 {
            return Err("Player name cannot exceed 50 characters".to_string());
        }

        Ok(())
    }
}

impl PlayerUpdate {
    /// Validate a player update request
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err("Player name cannot be empty".to_string());
            }

            if name.len() > 50 {
                return Err("Player name cannot exceed 50 characters".to_string());
            }
        }

        Ok(())
    }

    /// Merge the provided fields onto an existing player, last write wins.
    pub fn apply(&self, player: &mut Player) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(role) = self.role {
            player.role = role;
        }
        if let Some(team_id) = self.team_id {
            player.team_id = Some(team_id);
        }
        if let Some(matches) = self.matches {
            player.matches = matches;
        }
        if let Some(runs) = self.runs {
            player.runs = runs;
        }
        if let Some(balls_faced) = self.balls_faced {
            player.balls_faced = balls_faced;
        }
        if let Some(fours) = self.fours {
            player.fours = fours;
        }
        if let Some(sixes) = self.sixes {
            player.sixes = sixes;
        }
        if let Some(fifties) = self.fifties {
            player.fifties = fifties;
        }
        if let Some(hundreds) = self.hundreds {
            player.hundreds = hundreds;
        }
        if let Some(high_score) = self.high_score {
            player.high_score = high_score;
        }
        if let Some(wickets) = self.wickets {
            player.wickets = wickets;
        }
        if let Some(balls_bowled) = self.balls_bowled {
            player.balls_bowled = balls_bowled;
        }
        if let Some(runs_conceded) = self.runs_conceded {
            player.runs_conceded = runs_conceded;
        }
        if let Some(maidens) = self.maidens {
            player.maidens = maidens;
        }
        if let Some(best_bowling) = &self.best_bowling {
            player.best_bowling = best_bowling.clone();
        }
    }
}
