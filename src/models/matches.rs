// src/models/matches.rs
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::scoring::{BallRecord, PlayerMatchStats};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MatchFormat {
    T20,
    #[serde(rename = "ODI")]
    Odi,
    Test,
}

impl MatchFormat {
    /// Innings length in overs. Test cricket is uncapped.
    pub fn overs_limit(&self) -> Option<u32> {
        match self {
            MatchFormat::T20 => Some(20),
            MatchFormat::Odi => Some(50),
            MatchFormat::Test => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub team1_name: String,
    pub team2_name: String,
    pub format: MatchFormat,
    pub venue: Option<String>,
    pub date: DateTime<Utc>,
    pub status: MatchStatus,
    pub toss_winner: Option<Uuid>,
    pub toss_decision: Option<TossDecision>,
    pub team1_score: i32,
    pub team1_wickets: i32,
    /// Decimal overs: integer part completed overs, tenths balls into the over.
    pub team1_overs: f32,
    pub team2_score: i32,
    pub team2_wickets: i32,
    pub team2_overs: f32,
    pub winner: Option<Uuid>,
    pub result: Option<String>,
    pub current_innings: i32,
    pub batting_team: Option<Uuid>,
    pub bowling_team: Option<Uuid>,
    pub current_batsman1: Option<Uuid>,
    pub current_batsman2: Option<Uuid>,
    pub current_bowler: Option<Uuid>,
    pub on_strike: Option<Uuid>,
    pub ball_by_ball: Vec<BallRecord>,
    pub player_stats: HashMap<Uuid, PlayerMatchStats>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Which of the two score slots the side currently batting writes into.
    /// Falls back on the innings number when the batting side is unset.
    pub fn batting_slot(&self) -> InningsSlot {
        match self.batting_team {
            Some(id) if id == self.team2_id => InningsSlot::Team2,
            Some(_) => InningsSlot::Team1,
            None => {
                if self.current_innings >= 2 {
                    InningsSlot::Team2
                } else {
                    InningsSlot::Team1
                }
            }
        }
    }

    pub fn score_of(&self, slot: InningsSlot) -> i32 {
        match slot {
            InningsSlot::Team1 => self.team1_score,
            InningsSlot::Team2 => self.team2_score,
        }
    }

    pub fn wickets_of(&self, slot: InningsSlot) -> i32 {
        match slot {
            InningsSlot::Team1 => self.team1_wickets,
            InningsSlot::Team2 => self.team2_wickets,
        }
    }

    pub fn team_id_of(&self, slot: InningsSlot) -> Uuid {
        match slot {
            InningsSlot::Team1 => self.team1_id,
            InningsSlot::Team2 => self.team2_id,
        }
    }

    pub fn team_name_of(&self, slot: InningsSlot) -> &str {
        match slot {
            InningsSlot::Team1 => &self.team1_name,
            InningsSlot::Team2 => &self.team2_name,
        }
    }
}

/// One of the two per-team innings columns on a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsSlot {
    Team1,
    Team2,
}

impl InningsSlot {
    pub fn other(&self) -> Self {
        match self {
            InningsSlot::Team1 => InningsSlot::Team2,
            InningsSlot::Team2 => InningsSlot::Team1,
        }
    }
}

/// Request to schedule a new match. Innings state always starts zeroed and
/// `status` starts at `not_started`, whatever the caller sends.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub team1_name: String,
    pub team2_name: String,
    pub format: MatchFormat,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub toss_winner: Option<Uuid>,
    #[serde(default)]
    pub toss_decision: Option<TossDecision>,
}

impl NewMatch {
    pub fn validate(&self) -> Result<(), String> {
        if self.team1_id == self.team2_id {
            return Err("Teams must be different".to_string());
        }

        if self.team1_name.trim().is_empty() || self.team2_name.trim().is_empty() {
            return Err("Team names cannot be empty".to_string());
        }

        if let Some(winner) = self.toss_winner {
            if winner != self.team1_id && winner != self.team2_id {
                return Err("Toss winner must be one of the two teams".to_string());
            }
        }

        Ok(())
    }
}

/// Partial update to a match, the PATCH body. Absent fields are untouched;
/// whichever request merges last wins.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    pub format: Option<MatchFormat>,
    pub venue: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<MatchStatus>,
    pub toss_winner: Option<Uuid>,
    pub toss_decision: Option<TossDecision>,
    pub team1_score: Option<i32>,
    pub team1_wickets: Option<i32>,
    pub team1_overs: Option<f32>,
    pub team2_score: Option<i32>,
    pub team2_wickets: Option<i32>,
    pub team2_overs: Option<f32>,
    pub winner: Option<Uuid>,
    pub result: Option<String>,
    pub current_innings: Option<i32>,
    pub batting_team: Option<Uuid>,
    pub bowling_team: Option<Uuid>,
    pub current_batsman1: Option<Uuid>,
    pub current_batsman2: Option<Uuid>,
    pub current_bowler: Option<Uuid>,
    pub on_strike: Option<Uuid>,
}

impl MatchUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(innings) = self.current_innings {
            if !(1..=2).contains(&innings) {
                return Err("Current innings must be 1 or 2".to_string());
            }
        }

        for (label, wickets) in [
            ("team1Wickets", self.team1_wickets),
            ("team2Wickets", self.team2_wickets),
        ] {
            if let Some(w) = wickets {
                if !(0..=10).contains(&w) {
                    return Err(format!("{} must be between 0 and 10", label));
                }
            }
        }

        Ok(())
    }

    /// Merge the provided fields onto an existing match, last write wins.
    pub fn apply(&self, m: &mut Match) {
        if let Some(format) = self.format {
            m.format = format;
        }
        if let Some(venue) = &self.venue {
            m.venue = Some(venue.clone());
        }
        if let Some(date) = self.date {
            m.date = date;
        }
        if let Some(status) = self.status {
            m.status = status;
        }
        if let Some(toss_winner) = self.toss_winner {
            m.toss_winner = Some(toss_winner);
        }
        if let Some(toss_decision) = self.toss_decision {
            m.toss_decision = Some(toss_decision);
        }
        if let Some(v) = self.team1_score {
            m.team1_score = v;
        }
        if let Some(v) = self.team1_wickets {
            m.team1_wickets = v;
        }
        if let Some(v) = self.team1_overs {
            m.team1_overs = v;
        }
        if let Some(v) = self.team2_score {
            m.team2_score = v;
        }
        if let Some(v) = self.team2_wickets {
            m.team2_wickets = v;
        }
        if let Some(v) = self.team2_overs {
            m.team2_overs = v;
        }
        if let Some(winner) = self.winner {
            m.winner = Some(winner);
        }
        if let Some(result) = &self.result {
            m.result = Some(result.clone());
        }
        if let Some(v) = self.current_innings {
            m.current_innings = v;
        }
        if let Some(v) = self.batting_team {
            m.batting_team = Some(v);
        }
        if let Some(v) = self.bowling_team {
            m.bowling_team = Some(v);
        }
        if let Some(v) = self.current_batsman1 {
            m.current_batsman1 = Some(v);
        }
        if let Some(v) = self.current_batsman2 {
            m.current_batsman2 = Some(v);
        }
        if let Some(v) = self.current_bowler {
            m.current_bowler = Some(v);
        }
        if let Some(v) = self.on_strike {
            m.on_strike = Some(v);
        }
    }
}
