// src/store/memory.rs
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::models::matches::{Match, MatchStatus, MatchUpdate, NewMatch};
use crate::models::player::{NewPlayer, Player, PlayerUpdate};
use crate::models::team::{NewTeam, Team, TeamUpdate};
use crate::store::CricketStore;

#[derive(Default)]
struct Collections {
    teams: HashMap<Uuid, Team>,
    players: HashMap<Uuid, Player>,
    matches: HashMap<Uuid, Match>,
}

/// Process-memory store. One `RwLock` serializes all mutations; nothing
/// survives a restart.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Collections>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl CricketStore for MemStore {
    fn get_teams(&self) -> Vec<Team> {
        self.read().teams.values().cloned().collect()
    }

    fn get_team(&self, id: Uuid) -> Option<Team> {
        self.read().teams.get(&id).cloned()
    }

    fn create_team(&self, new_team: NewTeam) -> Team {
        let team = Team {
            id: Uuid::new_v4(),
            name: new_team.get_sanitized_name(),
            short_name: new_team.short_name.trim().to_string(),
            players: Vec::new(),
            matches: 0,
            wins: 0,
            losses: 0,
            created_at: Utc::now(),
        };
        self.write().teams.insert(team.id, team.clone());
        team
    }

    fn update_team(&self, id: Uuid, update: TeamUpdate) -> Option<Team> {
        let mut inner = self.write();
        let team = inner.teams.get_mut(&id)?;
        update.apply(team);
        Some(team.clone())
    }

    fn delete_team(&self, id: Uuid) -> bool {
        let mut inner = self.write();
        if inner.teams.remove(&id).is_none() {
            return false;
        }
        inner.players.retain(|_, p| p.team_id != Some(id));
        inner
            .matches
            .retain(|_, m| m.team1_id != id && m.team2_id != id);
        true
    }

    fn save_team(&self, team: Team) -> Option<Team> {
        let mut inner = self.write();
        if !inner.teams.contains_key(&team.id) {
            return None;
        }
        inner.teams.insert(team.id, team.clone());
        Some(team)
    }

    fn get_players(&self) -> Vec<Player> {
        self.read().players.values().cloned().collect()
    }

    fn get_player(&self, id: Uuid) -> Option<Player> {
        self.read().players.get(&id).cloned()
    }

    fn get_players_by_team(&self, team_id: Uuid) -> Vec<Player> {
        self.read()
            .players
            .values()
            .filter(|p| p.team_id == Some(team_id))
            .cloned()
            .collect()
    }

    fn create_player(&self, new_player: NewPlayer) -> Player {
        let player = Player {
            id: Uuid::new_v4(),
            name: new_player.name.trim().to_string(),
            role: new_player.role,
            team_id: new_player.team_id,
            matches: 0,
            runs: 0,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            fifties: 0,
            hundreds: 0,
            high_score: 0,
            wickets: 0,
            balls_bowled: 0,
            runs_conceded: 0,
            maidens: 0,
            best_bowling: "0/0".to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.write();
        inner.players.insert(player.id, player.clone());
        // Keep the owning team's roster in step.
        if let Some(team_id) = player.team_id {
            if let Some(team) = inner.teams.get_mut(&team_id) {
                team.players.push(player.id);
            }
        }
        player
    }

    fn update_player(&self, id: Uuid, update: PlayerUpdate) -> Option<Player> {
        let mut inner = self.write();
        let player = inner.players.get_mut(&id)?;
        let previous_team = player.team_id;
        update.apply(player);
        let player = player.clone();

        if previous_team != player.team_id {
            if let Some(old_team) = previous_team.and_then(|t| inner.teams.get_mut(&t)) {
                old_team.players.retain(|p| *p != id);
            }
            if let Some(new_team) = player.team_id.and_then(|t| inner.teams.get_mut(&t)) {
                new_team.players.push(id);
            }
        }
        Some(player)
    }

    fn delete_player(&self, id: Uuid) -> bool {
        let mut inner = self.write();
        let Some(player) = inner.players.remove(&id) else {
            return false;
        };
        if let Some(team) = player.team_id.and_then(|t| inner.teams.get_mut(&t)) {
            team.players.retain(|p| *p != id);
        }
        true
    }

    fn save_player(&self, player: Player) -> Option<Player> {
        let mut inner = self.write();
        if !inner.players.contains_key(&player.id) {
            return None;
        }
        inner.players.insert(player.id, player.clone());
        Some(player)
    }

    fn get_matches(&self) -> Vec<Match> {
        let mut matches: Vec<Match> = self.read().matches.values().cloned().collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    fn get_match(&self, id: Uuid) -> Option<Match> {
        self.read().matches.get(&id).cloned()
    }

    fn get_matches_by_team(&self, team_id: Uuid) -> Vec<Match> {
        self.read()
            .matches
            .values()
            .filter(|m| m.team1_id == team_id || m.team2_id == team_id)
            .cloned()
            .collect()
    }

    fn create_match(&self, new_match: NewMatch) -> Match {
        let now = Utc::now();
        let match_record = Match {
            id: Uuid::new_v4(),
            team1_id: new_match.team1_id,
            team2_id: new_match.team2_id,
            team1_name: new_match.team1_name,
            team2_name: new_match.team2_name,
            format: new_match.format,
            venue: new_match.venue,
            date: new_match.date.unwrap_or(now),
            status: MatchStatus::NotStarted,
            toss_winner: new_match.toss_winner,
            toss_decision: new_match.toss_decision,
            team1_score: 0,
            team1_wickets: 0,
            team1_overs: 0.0,
            team2_score: 0,
            team2_wickets: 0,
            team2_overs: 0.0,
            winner: None,
            result: None,
            current_innings: 1,
            batting_team: None,
            bowling_team: None,
            current_batsman1: None,
            current_batsman2: None,
            current_bowler: None,
            on_strike: None,
            ball_by_ball: Vec::new(),
            player_stats: HashMap::new(),
            created_at: now,
        };
        self.write()
            .matches
            .insert(match_record.id, match_record.clone());
        match_record
    }

    fn update_match(&self, id: Uuid, update: MatchUpdate) -> Option<Match> {
        let mut inner = self.write();
        let match_record = inner.matches.get_mut(&id)?;
        update.apply(match_record);
        Some(match_record.clone())
    }

    fn delete_match(&self, id: Uuid) -> bool {
        self.write().matches.remove(&id).is_some()
    }

    fn save_match(&self, match_record: Match) -> Option<Match> {
        let mut inner = self.write();
        if !inner.matches.contains_key(&match_record.id) {
            return None;
        }
        inner.matches.insert(match_record.id, match_record.clone());
        Some(match_record)
    }
}
