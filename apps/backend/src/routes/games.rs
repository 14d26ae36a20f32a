use actix_web::web;
use serde::Serialize;

use crate::domain::rules::Arity;
use crate::error::AppError;
use crate::repos::games::Game;
use crate::services::games as games_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct RuleResponse {
    pub id: i64,
    pub description: String,
    pub details: Option<String>,
    pub each_player: bool,
    pub dependencies: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
    pub setup_rules: Vec<RuleResponse>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        let setup_rules = game
            .rules
            .rules()
            .iter()
            .map(|rule| RuleResponse {
                id: rule.id,
                description: rule.description.clone(),
                details: rule.details.clone(),
                each_player: rule.arity == Arity::EachPlayer,
                dependencies: rule.depends_on.clone(),
            })
            .collect();
        Self {
            id: game.id,
            name: game.name,
            min_players: game.min_players,
            max_players: game.max_players,
            setup_rules,
        }
    }
}

async fn list_games(app_state: web::Data<AppState>) -> web::Json<Vec<GameResponse>> {
    let games = games_service::list_games(&app_state)
        .into_iter()
        .map(GameResponse::from)
        .collect();
    web::Json(games)
}

async fn get_game(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let game_id = path.into_inner();
    let game = games_service::get_game(&app_state, game_id)?;
    Ok(web::Json(GameResponse::from(game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/games", web::get().to(list_games))
        .route("/games/{game_id}", web::get().to(get_game));
}
