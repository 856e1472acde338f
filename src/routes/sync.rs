// src/routes/sync.rs
use actix_web::{get, post, web, HttpResponse, Result};

use crate::config::settings::SyncSettings;
use crate::handlers::sync;
use crate::models::snapshot::{ImportRequest, ReconcileRequest, ReplayRequest};
use crate::store::CricketStore;

/// Export a snapshot of all teams, players and matches
#[get("/export")]
async fn export_data(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    sync::export_data(store).await
}

/// Import a snapshot, rewriting team references to fresh ids
#[post("/import")]
async fn import_data(
    request: web::Json<ImportRequest>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    sync::import_data(request, store).await
}

/// Reconcile a client-held snapshot against server state
#[post("/sync/reconcile")]
async fn reconcile(
    request: web::Json<ReconcileRequest>,
    store: web::Data<dyn CricketStore>,
    sync_settings: web::Data<SyncSettings>,
) -> Result<HttpResponse> {
    sync::reconcile(request, store, sync_settings).await
}

/// Replay writes queued while the client was offline
#[post("/sync/replay")]
async fn replay(
    request: web::Json<ReplayRequest>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    sync::replay(request, store).await
}
