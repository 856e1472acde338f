use actix_web::{web, HttpResponse, Result};

use crate::config::settings::SyncSettings;
use crate::models::snapshot::{ImportRequest, ReconcileRequest, ReplayRequest};
use crate::services::{ExportService, SyncService};
use crate::store::CricketStore;

#[tracing::instrument(name = "Export snapshot", skip(store))]
pub async fn export_data(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    let snapshot = ExportService::export_snapshot(store.get_ref());
    tracing::info!(
        teams = snapshot.teams.len(),
        players = snapshot.players.len(),
        matches = snapshot.matches.len(),
        "Exported snapshot"
    );
    Ok(HttpResponse::Ok().json(snapshot))
}

#[tracing::instrument(name = "Import snapshot", skip(request, store))]
pub async fn import_data(
    request: web::Json<ImportRequest>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let report = ExportService::import_snapshot(store.get_ref(), &request.snapshot, request.replace);
    tracing::info!(
        teams = report.teams_created,
        players = report.players_created,
        matches = report.matches_created,
        errors = report.errors.len(),
        "Import finished"
    );
    Ok(HttpResponse::Ok().json(report))
}

#[tracing::instrument(name = "Reconcile snapshot", skip(request, store, sync_settings))]
pub async fn reconcile(
    request: web::Json<ReconcileRequest>,
    store: web::Data<dyn CricketStore>,
    sync_settings: web::Data<SyncSettings>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let report = SyncService::reconcile(store.get_ref(), request.snapshot.as_ref(), &sync_settings);
    Ok(HttpResponse::Ok().json(report))
}

#[tracing::instrument(name = "Replay pending writes", skip(request, store))]
pub async fn replay(
    request: web::Json<ReplayRequest>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    let report = SyncService::replay_pending(store.get_ref(), &request.writes);
    tracing::info!(
        replayed = report.replayed,
        errors = report.errors.len(),
        "Replayed offline write queue"
    );
    Ok(HttpResponse::Ok().json(report))
}
