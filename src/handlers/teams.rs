use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;

use crate::models::team::{NewTeam, TeamUpdate};
use crate::store::CricketStore;

pub async fn list_teams(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.get_teams()))
}

pub async fn get_team(
    team_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    match store.get_team(team_id) {
        Some(team) => Ok(HttpResponse::Ok().json(team)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team not found"
        }))),
    }
}

#[tracing::instrument(
    name = "Create team",
    skip(new_team, store),
    fields(team_name = %new_team.name)
)]
pub async fn create_team(
    new_team: web::Json<NewTeam>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = new_team.validate() {
        tracing::warn!("Team creation validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    let team = store.create_team(new_team.into_inner());
    tracing::info!("Created team '{}' with id {}", team.name, team.id);
    Ok(HttpResponse::Created().json(team))
}

#[tracing::instrument(name = "Update team", skip(update, store))]
pub async fn update_team(
    team_id: Uuid,
    update: web::Json<TeamUpdate>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = update.validate() {
        tracing::warn!("Team update validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    match store.update_team(team_id, update.into_inner()) {
        Some(team) => Ok(HttpResponse::Ok().json(team)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team not found"
        }))),
    }
}

#[tracing::instrument(name = "Delete team", skip(store))]
pub async fn delete_team(
    team_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if store.delete_team(team_id) {
        tracing::info!("Deleted team {} and its players and matches", team_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team not found"
        })))
    }
}

pub async fn get_team_players(
    team_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.get_players_by_team(team_id)))
}

pub async fn get_team_matches(
    team_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.get_matches_by_team(team_id)))
}
