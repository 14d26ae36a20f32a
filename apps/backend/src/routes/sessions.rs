use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::session::SetupSession;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::players::{self, Player};
use crate::services::sessions as sessions_service;
use crate::state::app_state::AppState;

/// Create-session body. Ids arrive as strings, the shape browser
/// clients historically sent: `{"session":{"game":"1","players":["2","3"]}}`.
#[derive(Debug, Deserialize)]
pub struct SessionCreateRequest {
    pub session: SessionCreateBody,
}

#[derive(Debug, Deserialize)]
pub struct SessionCreateBody {
    pub game: String,
    pub players: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub rule_id: i64,
    pub description: String,
    pub owner: Option<i64>,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub player_id: i64,
    pub rule_id: i64,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: i64,
    pub game_id: i64,
    pub game_name: String,
    pub players: Vec<Player>,
    pub steps: Vec<StepResponse>,
    pub assignments: Vec<AssignmentResponse>,
}

fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| {
        AppError::bad_request(
            ErrorCode::BadRequest,
            format!("{what} id '{raw}' is not a valid integer"),
        )
    })
}

/// Renders a session snapshot, resolving player names from the directory
/// and rule descriptions from the game's graph.
async fn render_session(
    app_state: &AppState,
    session: &SetupSession,
) -> Result<SessionResponse, AppError> {
    let session_id = session.id.ok_or_else(|| {
        AppError::internal("attempted to render an unpersisted session".to_string())
    })?;
    let game = crate::services::games::get_game(app_state, session.game_id)?;

    // A roster id with no player row is corrupted state, not a 404: the
    // session itself is what the caller asked for and it does exist.
    let roster = players::find_by_ids(&app_state.db, session.players()).await?;
    if let Some(missing) = session
        .players()
        .iter()
        .find(|id| !roster.iter().any(|player| player.id == **id))
    {
        return Err(AppError::DataCorruption {
            detail: format!("session {session_id} roster references missing player {missing}"),
        });
    }

    let description_of = |rule_id: i64| {
        session
            .rules()
            .get(rule_id)
            .map(|rule| rule.description.clone())
            .unwrap_or_default()
    };

    let steps = session
        .steps()
        .iter()
        .map(|step| StepResponse {
            rule_id: step.rule_id,
            description: description_of(step.rule_id),
            owner: step.owner,
            done: step.done,
        })
        .collect();

    let mut assignments: Vec<AssignmentResponse> = session
        .assignments()
        .into_iter()
        .map(|(player_id, rule_id)| AssignmentResponse {
            player_id,
            rule_id,
            description: description_of(rule_id),
        })
        .collect();
    assignments.sort_by_key(|assignment| assignment.player_id);

    Ok(SessionResponse {
        id: session_id,
        game_id: game.id,
        game_name: game.name,
        players: roster,
        steps,
        assignments,
    })
}

async fn list_sessions(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshots = sessions_service::list_sessions(&app_state).await;
    let mut sessions = Vec::with_capacity(snapshots.len());
    for snapshot in &snapshots {
        sessions.push(render_session(&app_state, snapshot).await?);
    }
    Ok(HttpResponse::Ok().json(sessions))
}

async fn get_session(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let snapshot = sessions_service::get_session(&app_state, session_id).await?;
    let response = render_session(&app_state, &snapshot).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn create_session(
    body: web::Json<SessionCreateRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = parse_id(&body.session.game, "game")?;
    let player_ids = body
        .session
        .players
        .iter()
        .map(|raw| parse_id(raw, "player"))
        .collect::<Result<Vec<i64>, AppError>>()?;

    let session = sessions_service::create_session(&app_state, game_id, player_ids).await?;
    let response = render_session(&app_state, &session).await?;
    Ok(HttpResponse::Created().json(response))
}

async fn finish_step(
    path: web::Path<(i64, i64, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (session_id, player_id, step_description) = path.into_inner();
    let (_outcome, snapshot) =
        sessions_service::complete_step(&app_state, session_id, player_id, &step_description)
            .await?;
    let response = render_session(&app_state, &snapshot).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sessions", web::get().to(list_sessions))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{session_id}", web::get().to(get_session))
        .route(
            "/sessions/{session_id}/players/{player_id}/steps/{step_description}",
            web::put().to(finish_step),
        );
}
