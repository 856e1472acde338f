// src/routes/matches.rs
use actix_web::{delete, get, patch, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::matches;
use crate::models::matches::{MatchUpdate, NewMatch};
use crate::models::scoring::BallRequest;
use crate::store::CricketStore;

/// List all matches, most recent first
#[get("/matches")]
async fn list_matches(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    matches::list_matches(store).await
}

/// Schedule a new match
#[post("/matches")]
async fn create_match(
    new_match: web::Json<NewMatch>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::create_match(new_match, store).await
}

/// Get a match by id
#[get("/matches/{match_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::get_match(path.into_inner(), store).await
}

/// Partially update a match
#[patch("/matches/{match_id}")]
async fn update_match(
    path: web::Path<Uuid>,
    update: web::Json<MatchUpdate>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::update_match(path.into_inner(), update, store).await
}

/// Delete a match
#[delete("/matches/{match_id}")]
async fn delete_match(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::delete_match(path.into_inner(), store).await
}

/// Move a scheduled match into play
#[post("/matches/{match_id}/start")]
async fn start_match(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::start_match(path.into_inner(), store).await
}

/// Record one delivery against a live match
#[post("/matches/{match_id}/balls")]
async fn record_ball(
    path: web::Path<Uuid>,
    ball: web::Json<BallRequest>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::record_ball(path.into_inner(), ball, store).await
}

/// Close the first innings early
#[post("/matches/{match_id}/end_innings")]
async fn end_innings(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::end_innings(path.into_inner(), store).await
}

/// Settle the match and write the result
#[post("/matches/{match_id}/complete")]
async fn complete_match(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    matches::complete_match(path.into_inner(), store).await
}
