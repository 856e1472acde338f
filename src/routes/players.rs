// src/routes/players.rs
use actix_web::{delete, get, patch, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::players;
use crate::models::player::{NewPlayer, PlayerUpdate};
use crate::store::CricketStore;

/// List all players
#[get("/players")]
async fn list_players(store: web::Data<dyn CricketStore>) -> Result<HttpResponse> {
    players::list_players(store).await
}

/// Create a new player
#[post("/players")]
async fn create_player(
    new_player: web::Json<NewPlayer>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    players::create_player(new_player, store).await
}

/// Get a player by id
#[get("/players/{player_id}")]
async fn get_player(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    players::get_player(path.into_inner(), store).await
}

/// Partially update a player
#[patch("/players/{player_id}")]
async fn update_player(
    path: web::Path<Uuid>,
    update: web::Json<PlayerUpdate>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    players::update_player(path.into_inner(), update, store).await
}

/// Delete a player
#[delete("/players/{player_id}")]
async fn delete_player(
    path: web::Path<Uuid>,
    store: web::Data<dyn CricketStore>,
) -> Result<HttpResponse> {
    players::delete_player(path.into_inner(), store).await
}
