// src/services/sync_service.rs
//
// Startup reconciliation between a client-held snapshot and server state,
// plus replay of writes queued while the client was offline. Both are
// best-effort: individual failures are reported, never fatal.
use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;

use crate::config::settings::SyncSettings;
use crate::models::matches::{MatchUpdate, NewMatch};
use crate::models::player::{NewPlayer, PlayerUpdate};
use crate::models::snapshot::{
    PendingWrite, ReconcileAction, ReconcileReport, ReplayReport, SnapshotDocument,
};
use crate::models::team::{NewTeam, TeamUpdate};
use crate::services::ExportService;
use crate::store::CricketStore;

/// Name / short-code pairs seeded into an empty server when enabled.
const DEFAULT_TEAMS: [(&str, &str); 4] = [
    ("Mumbai Indians", "MI"),
    ("Chennai Super Kings", "CSK"),
    ("Royal Challengers Bangalore", "RCB"),
    ("Kolkata Knight Riders", "KKR"),
];

pub struct SyncService;

impl SyncService {
    /// Decide whether server state should be replaced by the snapshot.
    ///
    /// The comparison is deliberately superficial: collection sizes and the
    /// set of team names. Any mismatch wipes the server (matches, then
    /// players, then teams) and rebuilds it from the snapshot. Without a
    /// snapshot the server is left alone, except that a completely empty
    /// server may be seeded with defaults when the policy flag allows it.
    pub fn reconcile(
        store: &dyn CricketStore,
        snapshot: Option<&SnapshotDocument>,
        settings: &SyncSettings,
    ) -> ReconcileReport {
        let Some(snapshot) = snapshot else {
            return Self::reconcile_without_snapshot(store, settings);
        };

        if Self::matches_server_state(store, snapshot) {
            tracing::info!("Snapshot matches server state, leaving data untouched");
            return ReconcileReport {
                action: ReconcileAction::Unchanged,
                errors: Vec::new(),
            };
        }

        tracing::info!(
            teams = snapshot.teams.len(),
            players = snapshot.players.len(),
            matches = snapshot.matches.len(),
            "Snapshot differs from server state, replacing server data"
        );

        // Dependency order, so a crash mid-way never leaves a match whose
        // teams were already removed.
        ExportService::clear_all(store);
        let import = ExportService::import_snapshot(store, snapshot, false);

        ReconcileReport {
            action: ReconcileAction::Replaced,
            errors: import.errors,
        }
    }

    fn reconcile_without_snapshot(
        store: &dyn CricketStore,
        settings: &SyncSettings,
    ) -> ReconcileReport {
        let empty = store.get_teams().is_empty()
            && store.get_players().is_empty()
            && store.get_matches().is_empty();

        if empty && settings.seed_defaults {
            tracing::info!("Server empty and seeding enabled, creating default teams");
            for (name, short_name) in DEFAULT_TEAMS {
                store.create_team(NewTeam {
                    name: name.to_string(),
                    short_name: short_name.to_string(),
                });
            }
            return ReconcileReport {
                action: ReconcileAction::Seeded,
                errors: Vec::new(),
            };
        }

        ReconcileReport {
            action: ReconcileAction::LeftEmpty,
            errors: Vec::new(),
        }
    }

    fn matches_server_state(store: &dyn CricketStore, snapshot: &SnapshotDocument) -> bool {
        let teams = store.get_teams();
        if teams.len() != snapshot.teams.len()
            || store.get_players().len() != snapshot.players.len()
            || store.get_matches().len() != snapshot.matches.len()
        {
            return false;
        }

        let server_names: HashSet<String> = teams.into_iter().map(|t| t.name).collect();
        let snapshot_names: HashSet<String> = snapshot
            .teams
            .iter()
            .filter_map(|t| t.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        server_names == snapshot_names
    }

    /// Apply a queue of writes recorded while the client was offline. Each
    /// entry names the method and entity URL it originally targeted.
    pub fn replay_pending(store: &dyn CricketStore, writes: &[PendingWrite]) -> ReplayReport {
        let mut report = ReplayReport {
            replayed: 0,
            errors: Vec::new(),
        };

        for write in writes {
            match Self::apply_write(store, write) {
                Ok(()) => report.replayed += 1,
                Err(e) => {
                    tracing::warn!(method = %write.method, url = %write.url, "Replay failed: {}", e);
                    report
                        .errors
                        .push(format!("{} {}: {}", write.method, write.url, e));
                }
            }
        }

        report
    }

    fn apply_write(store: &dyn CricketStore, write: &PendingWrite) -> Result<(), String> {
        let path = write.url.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let method = write.method.to_uppercase();

        let (entity, id) = match segments.as_slice() {
            ["api", entity] => (*entity, None),
            ["api", entity, id] => {
                let id = Uuid::parse_str(id).map_err(|_| "invalid id in URL".to_string())?;
                (*entity, Some(id))
            }
            _ => return Err("unsupported URL".to_string()),
        };

        let body = || write.body.clone().unwrap_or(Value::Null);

        match (method.as_str(), entity, id) {
            ("POST", "teams", None) => {
                let new_team: NewTeam = parse_body(body())?;
                new_team.validate()?;
                store.create_team(new_team);
                Ok(())
            }
            ("PATCH", "teams", Some(id)) | ("PUT", "teams", Some(id)) => {
                let update: TeamUpdate = parse_body(body())?;
                update.validate()?;
                store
                    .update_team(id, update)
                    .map(|_| ())
                    .ok_or_else(|| "team not found".to_string())
            }
            ("DELETE", "teams", Some(id)) => {
                if store.delete_team(id) {
                    Ok(())
                } else {
                    Err("team not found".to_string())
                }
            }
            ("POST", "players", None) => {
                let new_player: NewPlayer = parse_body(body())?;
                new_player.validate()?;
                store.create_player(new_player);
                Ok(())
            }
            ("PATCH", "players", Some(id)) | ("PUT", "players", Some(id)) => {
                let update: PlayerUpdate = parse_body(body())?;
                update.validate()?;
                store
                    .update_player(id, update)
                    .map(|_| ())
                    .ok_or_else(|| "player not found".to_string())
            }
            ("DELETE", "players", Some(id)) => {
                if store.delete_player(id) {
                    Ok(())
                } else {
                    Err("player not found".to_string())
                }
            }
            ("POST", "matches", None) => {
                let new_match: NewMatch = parse_body(body())?;
                new_match.validate()?;
                store.create_match(new_match);
                Ok(())
            }
            ("PATCH", "matches", Some(id)) | ("PUT", "matches", Some(id)) => {
                let update: MatchUpdate = parse_body(body())?;
                update.validate()?;
                store
                    .update_match(id, update)
                    .map(|_| ())
                    .ok_or_else(|| "match not found".to_string())
            }
            ("DELETE", "matches", Some(id)) => {
                if store.delete_match(id) {
                    Ok(())
                } else {
                    Err("match not found".to_string())
                }
            }
            _ => Err("unsupported method or URL".to_string()),
        }
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, String> {
    serde_json::from_value(body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use serde_json::json;

    fn seeding_off() -> SyncSettings {
        SyncSettings {
            seed_defaults: false,
        }
    }

    fn snapshot_with_team(name: &str) -> SnapshotDocument {
        SnapshotDocument {
            teams: vec![json!({"name": name, "shortName": "T"})],
            players: vec![],
            matches: vec![],
            export_date: None,
            version: None,
        }
    }

    #[test]
    fn test_matching_snapshot_leaves_server_untouched() {
        let store = MemStore::new();
        let team = store.create_team(NewTeam {
            name: "Alpha".to_string(),
            short_name: "ALP".to_string(),
        });

        let report =
            SyncService::reconcile(&store, Some(&snapshot_with_team("Alpha")), &seeding_off());
        assert_eq!(report.action, ReconcileAction::Unchanged);
        // The very same record survives, not a recreated copy.
        assert_eq!(store.get_teams()[0].id, team.id);
    }

    #[test]
    fn test_name_mismatch_replaces_server_state() {
        let store = MemStore::new();
        store.create_team(NewTeam {
            name: "Alpha".to_string(),
            short_name: "ALP".to_string(),
        });

        let report =
            SyncService::reconcile(&store, Some(&snapshot_with_team("Gamma")), &seeding_off());
        assert_eq!(report.action, ReconcileAction::Replaced);
        let names: Vec<String> = store.get_teams().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Gamma".to_string()]);
    }

    #[test]
    fn test_no_snapshot_seeds_only_when_enabled() {
        let store = MemStore::new();
        let report = SyncService::reconcile(&store, None, &seeding_off());
        assert_eq!(report.action, ReconcileAction::LeftEmpty);
        assert!(store.get_teams().is_empty());

        let report = SyncService::reconcile(
            &store,
            None,
            &SyncSettings {
                seed_defaults: true,
            },
        );
        assert_eq!(report.action, ReconcileAction::Seeded);
        assert_eq!(store.get_teams().len(), 4);
    }

    #[test]
    fn test_seeding_never_touches_a_non_empty_server() {
        let store = MemStore::new();
        store.create_team(NewTeam {
            name: "Alpha".to_string(),
            short_name: "ALP".to_string(),
        });
        let report = SyncService::reconcile(
            &store,
            None,
            &SyncSettings {
                seed_defaults: true,
            },
        );
        assert_eq!(report.action, ReconcileAction::LeftEmpty);
        assert_eq!(store.get_teams().len(), 1);
    }

    #[test]
    fn test_replay_applies_queued_writes_in_order() {
        let store = MemStore::new();
        let writes = vec![
            PendingWrite {
                method: "POST".to_string(),
                url: "/api/teams".to_string(),
                body: Some(json!({"name": "Alpha", "shortName": "ALP"})),
            },
            PendingWrite {
                method: "DELETE".to_string(),
                url: format!("/api/matches/{}", Uuid::new_v4()),
                body: None,
            },
        ];

        let report = SyncService::replay_pending(&store, &writes);
        assert_eq!(report.replayed, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(store.get_teams().len(), 1);
    }
}
