// src/services/export_service.rs
//
// Snapshot export and import. Import recreates entities under fresh ids,
// rewriting team references through an old-id -> new-id map so restored
// players and matches point at the restored teams.
use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::models::matches::NewMatch;
use crate::models::player::NewPlayer;
use crate::models::snapshot::{ImportReport, Snapshot, SnapshotDocument, SNAPSHOT_VERSION};
use crate::models::team::NewTeam;
use crate::store::CricketStore;

pub struct ExportService;

impl ExportService {
    /// Bundle every collection with an export timestamp and format tag.
    pub fn export_snapshot(store: &dyn CricketStore) -> Snapshot {
        Snapshot {
            teams: store.get_teams(),
            players: store.get_players(),
            matches: store.get_matches(),
            export_date: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        }
    }

    /// Restore a snapshot into the store. Additive unless `replace` is set.
    ///
    /// Ids and creation timestamps in the document are discarded; teams are
    /// created first so player and match team references can be rewritten to
    /// the newly assigned ids. A bad record is reported and skipped, the
    /// rest of the import carries on.
    pub fn import_snapshot(
        store: &dyn CricketStore,
        document: &SnapshotDocument,
        replace: bool,
    ) -> ImportReport {
        let mut report = ImportReport::new();

        if replace {
            Self::clear_all(store);
        }

        let mut team_ids: HashMap<Uuid, Uuid> = HashMap::new();

        for record in &document.teams {
            let old_id = record_id(record);
            match serde_json::from_value::<NewTeam>(record.clone())
                .map_err(|e| e.to_string())
                .and_then(|new_team| new_team.validate().map(|_| new_team))
            {
                Ok(new_team) => {
                    let created = store.create_team(new_team);
                    if let Some(old_id) = old_id {
                        team_ids.insert(old_id, created.id);
                    }
                    report.teams_created += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping team during import: {}", e);
                    report.push_error(format!("Failed to import team: {}", e));
                }
            }
        }

        for record in &document.players {
            match serde_json::from_value::<NewPlayer>(record.clone())
                .map_err(|e| e.to_string())
                .and_then(|new_player| new_player.validate().map(|_| new_player))
            {
                Ok(mut new_player) => {
                    if let Some(team_id) = new_player.team_id {
                        // References outside the map pass through untouched.
                        new_player.team_id =
                            Some(team_ids.get(&team_id).copied().unwrap_or(team_id));
                    }
                    store.create_player(new_player);
                    report.players_created += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping player during import: {}", e);
                    report.push_error(format!("Failed to import player: {}", e));
                }
            }
        }

        for record in &document.matches {
            match serde_json::from_value::<NewMatch>(record.clone())
                .map_err(|e| e.to_string())
                .and_then(|new_match| new_match.validate().map(|_| new_match))
            {
                Ok(mut new_match) => {
                    new_match.team1_id = team_ids
                        .get(&new_match.team1_id)
                        .copied()
                        .unwrap_or(new_match.team1_id);
                    new_match.team2_id = team_ids
                        .get(&new_match.team2_id)
                        .copied()
                        .unwrap_or(new_match.team2_id);
                    if let Some(toss_winner) = new_match.toss_winner {
                        new_match.toss_winner =
                            Some(team_ids.get(&toss_winner).copied().unwrap_or(toss_winner));
                    }
                    store.create_match(new_match);
                    report.matches_created += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping match during import: {}", e);
                    report.push_error(format!("Failed to import match: {}", e));
                }
            }
        }

        report
    }

    /// Delete everything, matches first so nothing is left pointing at a
    /// half-removed team mid-way through.
    pub fn clear_all(store: &dyn CricketStore) {
        for m in store.get_matches() {
            store.delete_match(m.id);
        }
        for p in store.get_players() {
            store.delete_player(p.id);
        }
        for t in store.get_teams() {
            store.delete_team(t.id);
        }
    }
}

fn record_id(record: &Value) -> Option<Uuid> {
    record
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}
