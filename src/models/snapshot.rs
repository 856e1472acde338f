// src/models/snapshot.rs
//
// Portable point-in-time backup of every collection. The same JSON document
// the client downloads as a file is what import and reconciliation consume.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::team::Team;

/// Format tag written into every export.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// A fully-typed export bundle, as served by `GET /api/export`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// An inbound snapshot. Only the presence of the three collections is
/// validated up front; individual records are parsed one at a time so a
/// single malformed entry fails alone instead of rejecting the whole file.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub teams: Vec<Value>,
    pub players: Vec<Value>,
    pub matches: Vec<Value>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of `POST /api/import`: a snapshot plus the replace switch.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    #[serde(flatten)]
    pub snapshot: SnapshotDocument,
    /// Clear all collections before importing. Defaults to additive.
    #[serde(default)]
    pub replace: bool,
}

/// Outcome of an import run. Per-record failures accumulate in `errors`;
/// the run itself never aborts early.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub success: bool,
    pub errors: Vec<String>,
    pub teams_created: usize,
    pub players_created: usize,
    pub matches_created: usize,
}

impl ImportReport {
    pub fn new() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            teams_created: 0,
            players_created: 0,
            matches_created: 0,
        }
    }

    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.success = false;
    }
}

impl Default for ImportReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `POST /api/sync/reconcile`. A missing snapshot means the client
/// had nothing saved locally.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileRequest {
    #[serde(default)]
    pub snapshot: Option<SnapshotDocument>,
}

/// What reconciliation decided to do with server state.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileAction {
    /// Snapshot and server agreed; nothing was touched.
    Unchanged,
    /// Server state was wiped and rebuilt from the snapshot.
    Replaced,
    /// No snapshot, empty server, defaults seeded.
    Seeded,
    /// No snapshot and seeding is disabled; server left as-is.
    LeftEmpty,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub action: ReconcileAction,
    pub errors: Vec<String>,
}

/// A write queued while the client was offline, replayed once connectivity
/// returns: the HTTP method, the entity URL it targeted, and the body.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PendingWrite {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub body: Option<Value>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRequest {
    pub writes: Vec<PendingWrite>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub replayed: usize,
    pub errors: Vec<String>,
}
