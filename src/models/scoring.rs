// src/models/scoring.rs
//
// Typed ball-by-ball event model. Every delivery entering a match's log goes
// through `BallRequest::validate` first; nothing schema-less is stored.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery outcomes that award runs without a scoring stroke.
///
/// Wides and no-balls do not count toward the over; byes and leg byes do.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// Whether the delivery still counts as one of the over's six legal balls.
    pub fn is_legal_delivery(&self) -> bool {
        matches!(self, ExtraKind::Bye | ExtraKind::LegBye)
    }

    /// Whether the runs are charged against the bowler's figures.
    pub fn charged_to_bowler(&self) -> bool {
        matches!(self, ExtraKind::Wide | ExtraKind::NoBall)
    }
}

/// How a batsman was dismissed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    RetiredOut,
}

impl DismissalKind {
    /// Run outs and retirements are not credited to the bowler.
    pub fn credited_to_bowler(&self) -> bool {
        !matches!(self, DismissalKind::RunOut | DismissalKind::RetiredOut)
    }
}

/// A single scoring action submitted against a live match.
///
/// `runs` is the total awarded on the delivery, including the penalty run of
/// a wide or no-ball.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BallRequest {
    pub runs: i32,
    #[serde(default)]
    pub extra: Option<ExtraKind>,
    #[serde(default)]
    pub wicket: Option<DismissalKind>,
    #[serde(default)]
    pub batsman_id: Option<Uuid>,
    #[serde(default)]
    pub bowler_id: Option<Uuid>,
}

impl BallRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.runs < 0 {
            return Err("Runs cannot be negative".to_string());
        }

        // Six off the bat is the ceiling; a wide or no-ball can carry one
        // penalty run on top of four overthrows etc., so allow up to 7 there.
        let max = if matches!(self.extra, Some(ExtraKind::Wide) | Some(ExtraKind::NoBall)) {
            7
        } else {
            6
        };
        if self.runs > max {
            return Err(format!("Runs on a single delivery cannot exceed {}", max));
        }

        if self.wicket == Some(DismissalKind::Bowled) && self.extra == Some(ExtraKind::Wide) {
            return Err("A batsman cannot be bowled off a wide".to_string());
        }

        Ok(())
    }
}

/// Entry in a match's ball-by-ball log.
///
/// `over` and `ball` locate the delivery: `over` completed overs before it,
/// `ball` the 1-based delivery number within the over. Wides and no-balls
/// repeat the same ball number as the legal delivery that replaces them.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BallRecord {
    pub innings: i32,
    pub over: u32,
    pub ball: u32,
    pub runs: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wicket: Option<DismissalKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batsman_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowler_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

/// Per-match tallies for one player, keyed by player id on the match.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchStats {
    pub runs: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub wickets: i32,
    pub balls_bowled: i32,
    pub runs_conceded: i32,
}

/// Overs bowled, kept as completed overs plus balls into the current over.
///
/// The wire format is the cricket decimal: 3.4 means 3 overs and 4 balls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overs {
    completed: u32,
    balls: u32,
}

impl Overs {
    pub fn new(completed: u32, balls: u32) -> Self {
        debug_assert!(balls < 6);
        Self { completed, balls }
    }

    /// Parse the decimal wire representation. The fractional digit is balls,
    /// so 3.4 -> 3 overs 4 balls. Out-of-range fractions are clamped.
    pub fn from_decimal(value: f32) -> Self {
        let completed = value.trunc().max(0.0) as u32;
        let balls = ((value - value.trunc()) * 10.0).round() as i32;
        Self {
            completed,
            balls: balls.clamp(0, 5) as u32,
        }
    }

    pub fn as_decimal(&self) -> f32 {
        self.completed as f32 + self.balls as f32 / 10.0
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn balls_into_over(&self) -> u32 {
        self.balls
    }

    pub fn total_balls(&self) -> u32 {
        self.completed * 6 + self.balls
    }

    /// Count one legal delivery. Returns true when it closed the over.
    pub fn advance(&mut self) -> bool {
        self.balls += 1;
        if self.balls == 6 {
            self.completed += 1;
            self.balls = 0;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for Overs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}
