use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;

use crate::models::matches::{Match, MatchUpdate, NewMatch};
use crate::models::scoring::BallRequest;
use crate::scoring::engine::{MatchProgress, ScoringEngine, ScoringError};
use crate::scoring::stats;
use crate::store::CricketStore;

pub async fn list_matches(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.get_matches()))
}

pub async fn get_match(
    match_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    match store.get_match(match_id) {
        Some(m) => Ok(HttpResponse::Ok().json(m)),
        None => Ok(not_found()),
    }
}

#[tracing::instrument(
    name = "Create match",
    skip(new_match, store),
    fields(team1 = %new_match.team1_name, team2 = %new_match.team2_name)
)]
pub async fn create_match(
    new_match: web::Json<NewMatch>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = new_match.validate() {
        tracing::warn!("Match creation validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    for team_id in [new_match.team1_id, new_match.team2_id] {
        if store.get_team(team_id).is_none() {
            return Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Team does not exist"
            })));
        }
    }

    let m = store.create_match(new_match.into_inner());
    tracing::info!("Scheduled match {} ({} vs {})", m.id, m.team1_name, m.team2_name);
    Ok(HttpResponse::Created().json(m))
}

#[tracing::instrument(name = "Update match", skip(update, store))]
pub async fn update_match(
    match_id: Uuid,
    update: web::Json<MatchUpdate>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = update.validate() {
        tracing::warn!("Match update validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    match store.update_match(match_id, update.into_inner()) {
        Some(m) => Ok(HttpResponse::Ok().json(m)),
        None => Ok(not_found()),
    }
}

#[tracing::instrument(name = "Delete match", skip(store))]
pub async fn delete_match(
    match_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if store.delete_match(match_id) {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(not_found())
    }
}

#[tracing::instrument(name = "Start match", skip(store))]
pub async fn start_match(
    match_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    let Some(mut m) = store.get_match(match_id) else {
        return Ok(not_found());
    };

    if let Err(e) = ScoringEngine::start_match(&mut m) {
        return Ok(scoring_conflict(e));
    }

    let m = persist(&store, m);
    tracing::info!("Match {} is now live, innings 1", match_id);
    Ok(HttpResponse::Ok().json(m))
}

#[tracing::instrument(name = "Record ball", skip(ball, store))]
pub async fn record_ball(
    match_id: Uuid,
    ball: web::Json<BallRequest>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = ball.validate() {
        tracing::warn!("Ball rejected: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    let Some(mut m) = store.get_match(match_id) else {
        return Ok(not_found());
    };

    let progress = match ScoringEngine::record_ball(&mut m, &ball) {
        Ok(progress) => progress,
        Err(e) => return Ok(scoring_conflict(e)),
    };

    let m = persist(&store, m);
    if progress == MatchProgress::MatchCompleted {
        finalize_match(store.get_ref(), &m);
    }

    Ok(HttpResponse::Ok().json(json!({
        "progress": progress,
        "match": m
    })))
}

#[tracing::instrument(name = "End innings", skip(store))]
pub async fn end_innings(
    match_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    let Some(mut m) = store.get_match(match_id) else {
        return Ok(not_found());
    };

    if let Err(e) = ScoringEngine::end_innings(&mut m) {
        return Ok(scoring_conflict(e));
    }

    let m = persist(&store, m);
    tracing::info!("Match {} moved to innings 2", match_id);
    Ok(HttpResponse::Ok().json(m))
}

#[tracing::instrument(name = "Complete match", skip(store))]
pub async fn complete_match(
    match_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    let Some(mut m) = store.get_match(match_id) else {
        return Ok(not_found());
    };

    if let Err(e) = ScoringEngine::complete_match(&mut m) {
        return Ok(scoring_conflict(e));
    }

    let m = persist(&store, m);
    finalize_match(store.get_ref(), &m);
    tracing::info!("Match {} completed: {:?}", match_id, m.result);
    Ok(HttpResponse::Ok().json(m))
}

/// Fold a settled match into the cumulative team and player records.
fn finalize_match(store: &dyn CricketStore, m: &Match) {
    for team_id in [m.team1_id, m.team2_id] {
        if let Some(mut team) = store.get_team(team_id) {
            stats::fold_match_into_team(m, &mut team);
            store.save_team(team);
        }
    }

    for (player_id, match_stats) in &m.player_stats {
        if let Some(mut player) = store.get_player(*player_id) {
            let maidens = stats::maidens_bowled(&m.ball_by_ball, *player_id);
            stats::fold_match_into_player(match_stats, maidens, &mut player);
            store.save_player(player);
        }
    }
}

fn persist(store: &web::Data<dyn CricketStore>, m: Match) -> Match {
    // Save only misses if the match was deleted mid-request; respond with
    // the computed state either way.
    store.save_match(m.clone()).unwrap_or(m)
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Match not found"
    }))
}

fn scoring_conflict(e: ScoringError) -> HttpResponse {
    HttpResponse::Conflict().json(json!({
        "success": false,
        "message": e.to_string()
    }))
}
