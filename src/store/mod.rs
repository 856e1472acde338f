// src/store/mod.rs
pub mod memory;

pub use memory::MemStore;

use uuid::Uuid;

use crate::models::matches::{Match, MatchUpdate, NewMatch};
use crate::models::player::{NewPlayer, Player, PlayerUpdate};
use crate::models::team::{NewTeam, Team, TeamUpdate};

/// Storage abstraction over the three entity collections.
///
/// Handlers receive this as `web::Data<dyn CricketStore>`, so the backing
/// implementation is swappable without touching the HTTP layer. Absent ids
/// surface as `None`/`false`, never as errors.
pub trait CricketStore: Send + Sync {
    // Teams
    fn get_teams(&self) -> Vec<Team>;
    fn get_team(&self, id: Uuid) -> Option<Team>;
    fn create_team(&self, new_team: NewTeam) -> Team;
    fn update_team(&self, id: Uuid, update: TeamUpdate) -> Option<Team>;
    /// Deletes the team and cascades to its players and to every match it
    /// appears in. Returns whether the team existed.
    fn delete_team(&self, id: Uuid) -> bool;
    /// Overwrite a team record wholesale. Returns `None` if the id is absent.
    fn save_team(&self, team: Team) -> Option<Team>;

    // Players
    fn get_players(&self) -> Vec<Player>;
    fn get_player(&self, id: Uuid) -> Option<Player>;
    fn get_players_by_team(&self, team_id: Uuid) -> Vec<Player>;
    fn create_player(&self, new_player: NewPlayer) -> Player;
    fn update_player(&self, id: Uuid, update: PlayerUpdate) -> Option<Player>;
    fn delete_player(&self, id: Uuid) -> bool;
    fn save_player(&self, player: Player) -> Option<Player>;

    // Matches
    /// All matches, most recent scheduled date first.
    fn get_matches(&self) -> Vec<Match>;
    fn get_match(&self, id: Uuid) -> Option<Match>;
    fn get_matches_by_team(&self, team_id: Uuid) -> Vec<Match>;
    fn create_match(&self, new_match: NewMatch) -> Match;
    fn update_match(&self, id: Uuid, update: MatchUpdate) -> Option<Match>;
    fn delete_match(&self, id: Uuid) -> bool;
    fn save_match(&self, match_record: Match) -> Option<Match>;
}
