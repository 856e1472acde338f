// src/scoring/engine.rs
//
// Ball-by-ball match state machine. All functions mutate a `Match` in place
// and leave persistence to the caller.
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::matches::{InningsSlot, Match, MatchStatus, TossDecision};
use crate::models::scoring::{BallRecord, BallRequest, Overs};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("match has already started")]
    AlreadyStarted,
    #[error("match is not in progress")]
    NotInProgress,
    #[error("match is already completed")]
    AlreadyCompleted,
    #[error("second innings is already underway")]
    InningsAlreadyClosed,
}

/// What a recorded delivery did to the match lifecycle.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchProgress {
    Continue,
    InningsClosed,
    MatchCompleted,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Move a scheduled match into play. The toss decides who bats: the toss
    /// winner's choice if known, otherwise team 1 takes first strike.
    pub fn start_match(m: &mut Match) -> Result<(), ScoringError> {
        match m.status {
            MatchStatus::NotStarted => {}
            MatchStatus::InProgress => return Err(ScoringError::AlreadyStarted),
            MatchStatus::Completed => return Err(ScoringError::AlreadyCompleted),
        }

        let batting = match (m.toss_winner, m.toss_decision) {
            (Some(winner), Some(TossDecision::Bat)) => winner,
            (Some(winner), Some(TossDecision::Bowl)) => {
                if winner == m.team1_id {
                    m.team2_id
                } else {
                    m.team1_id
                }
            }
            (None, Some(TossDecision::Bowl)) => m.team2_id,
            _ => m.team1_id,
        };
        let bowling = if batting == m.team1_id {
            m.team2_id
        } else {
            m.team1_id
        };

        m.status = MatchStatus::InProgress;
        m.current_innings = 1;
        m.batting_team = Some(batting);
        m.bowling_team = Some(bowling);
        Ok(())
    }

    /// Record one delivery: credit runs to the batting side, advance the over
    /// counter for legal deliveries, log the ball, update per-match player
    /// tallies and the strike, then check whether the innings or match ended.
    pub fn record_ball(m: &mut Match, ball: &BallRequest) -> Result<MatchProgress, ScoringError> {
        match m.status {
            MatchStatus::InProgress => {}
            MatchStatus::Completed => return Err(ScoringError::AlreadyCompleted),
            MatchStatus::NotStarted => return Err(ScoringError::NotInProgress),
        }

        let slot = m.batting_slot();
        let legal = ball.extra.map_or(true, |e| e.is_legal_delivery());

        let mut overs = Overs::from_decimal(overs_of(m, slot));
        let record = BallRecord {
            innings: m.current_innings,
            over: overs.completed(),
            ball: overs.balls_into_over() + 1,
            runs: ball.runs,
            extra: ball.extra,
            wicket: ball.wicket,
            batsman_id: ball.batsman_id,
            bowler_id: ball.bowler_id,
            timestamp: Utc::now(),
        };

        let over_completed = if legal { overs.advance() } else { false };
        set_overs_of(m, slot, overs.as_decimal());

        add_score(m, slot, ball.runs);
        if ball.wicket.is_some() {
            add_wicket(m, slot);
        }

        Self::tally_player_stats(m, ball);
        m.ball_by_ball.push(record);
        Self::rotate_strike(m, ball.runs, over_completed);

        Ok(Self::check_innings_boundary(m, slot))
    }

    /// Close the first innings early (declaration, rain, a short-format
    /// agreement). The second innings cannot be ended this way; completing
    /// the match is the only exit from it.
    pub fn end_innings(m: &mut Match) -> Result<(), ScoringError> {
        match m.status {
            MatchStatus::InProgress => {}
            MatchStatus::Completed => return Err(ScoringError::AlreadyCompleted),
            MatchStatus::NotStarted => return Err(ScoringError::NotInProgress),
        }
        if m.current_innings >= 2 {
            return Err(ScoringError::InningsAlreadyClosed);
        }
        Self::switch_innings(m);
        Ok(())
    }

    /// Settle the match: compare the two totals and write winner and result
    /// text. The chasing side wins by wickets in hand (10 minus wickets
    /// lost), the defending side by the run difference; equal totals tie.
    pub fn complete_match(m: &mut Match) -> Result<(), ScoringError> {
        match m.status {
            MatchStatus::InProgress => {}
            MatchStatus::Completed => return Err(ScoringError::AlreadyCompleted),
            MatchStatus::NotStarted => return Err(ScoringError::NotInProgress),
        }

        let chasing = if m.current_innings >= 2 {
            m.batting_slot()
        } else {
            m.batting_slot().other()
        };
        let defending = chasing.other();

        let chased = m.score_of(chasing);
        let defended = m.score_of(defending);

        if chased > defended {
            let wickets_in_hand = 10 - m.wickets_of(chasing);
            m.winner = Some(m.team_id_of(chasing));
            m.result = Some(format!(
                "{} won by {} wicket{}",
                m.team_name_of(chasing),
                wickets_in_hand,
                if wickets_in_hand == 1 { "" } else { "s" }
            ));
        } else if defended > chased {
            let margin = defended - chased;
            m.winner = Some(m.team_id_of(defending));
            m.result = Some(format!(
                "{} won by {} run{}",
                m.team_name_of(defending),
                margin,
                if margin == 1 { "" } else { "s" }
            ));
        } else {
            m.winner = None;
            m.result = Some("Match tied".to_string());
        }

        m.status = MatchStatus::Completed;
        Ok(())
    }

    fn tally_player_stats(m: &mut Match, ball: &BallRequest) {
        use crate::models::scoring::ExtraKind;

        if let Some(batsman) = ball.batsman_id {
            let entry = m.player_stats.entry(batsman).or_default();
            if ball.extra != Some(ExtraKind::Wide) {
                entry.balls_faced += 1;
            }
            if ball.extra.is_none() {
                entry.runs += ball.runs;
                if ball.runs == 4 {
                    entry.fours += 1;
                }
                if ball.runs == 6 {
                    entry.sixes += 1;
                }
            }
        }

        if let Some(bowler) = ball.bowler_id {
            let legal = ball.extra.map_or(true, |e| e.is_legal_delivery());
            let conceded = match ball.extra {
                None => ball.runs,
                Some(e) if e.charged_to_bowler() => ball.runs,
                Some(_) => 0,
            };
            let entry = m.player_stats.entry(bowler).or_default();
            if legal {
                entry.balls_bowled += 1;
            }
            entry.runs_conceded += conceded;
            if ball.wicket.map_or(false, |w| w.credited_to_bowler()) {
                entry.wickets += 1;
            }
        }
    }

    fn rotate_strike(m: &mut Match, runs: i32, over_completed: bool) {
        let (Some(b1), Some(b2), Some(striker)) =
            (m.current_batsman1, m.current_batsman2, m.on_strike)
        else {
            return;
        };

        let mut swap = runs % 2 == 1;
        if over_completed {
            swap = !swap;
        }
        if swap {
            m.on_strike = Some(if striker == b1 { b2 } else { b1 });
        }
    }

    fn check_innings_boundary(m: &mut Match, slot: InningsSlot) -> MatchProgress {
        let all_out = m.wickets_of(slot) >= 10;
        let overs_done = m
            .format
            .overs_limit()
            .map_or(false, |limit| {
                Overs::from_decimal(overs_of(m, slot)).completed() >= limit
            });
        let target_passed =
            m.current_innings >= 2 && m.score_of(slot) > m.score_of(slot.other());

        if m.current_innings >= 2 {
            if all_out || overs_done || target_passed {
                // Completing from a live match cannot fail.
                let _ = Self::complete_match(m);
                return MatchProgress::MatchCompleted;
            }
        } else if all_out || overs_done {
            Self::switch_innings(m);
            return MatchProgress::InningsClosed;
        }

        MatchProgress::Continue
    }

    fn switch_innings(m: &mut Match) {
        let batted = m.batting_slot();
        m.current_innings = 2;
        m.batting_team = Some(m.team_id_of(batted.other()));
        m.bowling_team = Some(m.team_id_of(batted));
        m.current_batsman1 = None;
        m.current_batsman2 = None;
        m.current_bowler = None;
        m.on_strike = None;
    }
}

fn overs_of(m: &Match, slot: InningsSlot) -> f32 {
    match slot {
        InningsSlot::Team1 => m.team1_overs,
        InningsSlot::Team2 => m.team2_overs,
    }
}

fn set_overs_of(m: &mut Match, slot: InningsSlot, overs: f32) {
    match slot {
        InningsSlot::Team1 => m.team1_overs = overs,
        InningsSlot::Team2 => m.team2_overs = overs,
    }
}

fn add_score(m: &mut Match, slot: InningsSlot, runs: i32) {
    match slot {
        InningsSlot::Team1 => m.team1_score += runs,
        InningsSlot::Team2 => m.team2_score += runs,
    }
}

fn add_wicket(m: &mut Match, slot: InningsSlot) {
    match slot {
        InningsSlot::Team1 => m.team1_wickets += 1,
        InningsSlot::Team2 => m.team2_wickets += 1,
    }
}
