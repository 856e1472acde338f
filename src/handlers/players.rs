use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;

use crate::models::player::{NewPlayer, PlayerUpdate};
use crate::store::CricketStore;

pub async fn list_players(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.get_players()))
}

pub async fn get_player(
    player_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    match store.get_player(player_id) {
        Some(player) => Ok(HttpResponse::Ok().json(player)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Player not found"
        }))),
    }
}

#[tracing::instrument(
    name = "Create player",
    skip(new_player, store),
    fields(player_name = %new_player.name)
)]
pub async fn create_player(
    new_player: web::Json<NewPlayer>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = new_player.validate() {
        tracing::warn!("Player creation validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    // A team reference must point at a real team; a player may also be a
    // free agent with no team at all.
    if let Some(team_id) = new_player.team_id {
        if store.get_team(team_id).is_none() {
            return Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Team does not exist"
            })));
        }
    }

    let player = store.create_player(new_player.into_inner());
    tracing::info!("Created player '{}' with id {}", player.name, player.id);
    Ok(HttpResponse::Created().json(player))
}

#[tracing::instrument(name = "Update player", skip(update, store))]
pub async fn update_player(
    player_id: Uuid,
    update: web::Json<PlayerUpdate>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = update.validate() {
        tracing::warn!("Player update validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": validation_error
        })));
    }

    match store.update_player(player_id, update.into_inner()) {
        Some(player) => Ok(HttpResponse::Ok().json(player)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Player not found"
        }))),
    }
}

#[tracing::instrument(name = "Delete player", skip(store))]
pub async fn delete_player(
    player_id: Uuid,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    if store.delete_player(player_id) {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Player not found"
        })))
    }
}
