// src/routes/teams.rs
use actix_web::{delete, get, patch, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::teams;
use crate::models::team::{NewTeam, TeamUpdate};
use crate::store::CricketStore;

/// List all teams
#[get("/teams")]
async fn list_teams(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    teams::list_teams(store).await
}

/// Create a new team
#[post("/teams")]
async fn create_team(
    new_team: web::Json<NewTeam>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    teams::create_team(new_team, store).await
}

/// Get a team by id
#[get("/teams/{team_id}")]
async fn get_team(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    teams::get_team(path.into_inner(), store).await
}

/// Partially update a team
#[patch("/teams/{team_id}")]
async fn update_team(
    path: web::Path<Uuid>,
    update: web::Json<TeamUpdate>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    teams::update_team(path.into_inner(), update, store).await
}

/// Delete a team, cascading to its players and matches
#[delete("/teams/{team_id}")]
async fn delete_team(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    teams::delete_team(path.into_inner(), store).await
}

/// List the players on a team's roster
#[get("/teams/{team_id}/players")]
async fn get_team_players(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    teams::get_team_players(path.into_inner(), store).await
}

/// List the matches a team appears in
#[get("/teams/{team_id}/matches")]
async fn get_team_matches(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    teams::get_team_matches(path.into_inner(), store).await
}
