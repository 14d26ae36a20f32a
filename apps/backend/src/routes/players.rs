use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::players as players_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlayerCreateRequest {
    pub player: PlayerCreateBody,
}

#[derive(Debug, Deserialize)]
pub struct PlayerCreateBody {
    pub name: String,
}

async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = players_service::list_players(&app_state).await?;
    Ok(HttpResponse::Ok().json(players))
}

async fn get_player(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let player = players_service::get_player(&app_state, player_id).await?;
    Ok(HttpResponse::Ok().json(player))
}

async fn create_player(
    body: web::Json<PlayerCreateRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = players_service::create_player(&app_state, &body.player.name).await?;
    Ok(HttpResponse::Created().json(player))
}

async fn delete_player(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    players_service::delete_player(&app_state, player_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/players", web::get().to(list_players))
        .route("/players", web::post().to(create_player))
        .route("/players/{player_id}", web::get().to(get_player))
        .route("/players/{player_id}", web::delete().to(delete_player));
}
