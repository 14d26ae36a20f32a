//! HTTP surface tests: route shapes, status codes, and the problem+json
//! error contract.

use actix_web::{test, web, App};
use backend::config::db::DbProfile;
use backend::infra::state::state_builder;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::services::games;
use backend::state::app_state::AppState;
use migration::{migrate, MigrationCommand};
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};

async fn test_data() -> web::Data<AppState> {
    std::env::set_var("TEST_DATABASE_URL", "sqlite::memory:");
    let state = state_builder()
        .with_profile(DbProfile::Test)
        .build()
        .await
        .expect("connect to in-memory sqlite");
    migrate(&state.db, MigrationCommand::Up)
        .await
        .expect("apply migrations");
    games::load_catalog(&state).await.expect("load catalog");
    web::Data::new(state)
}

macro_rules! test_app {
    ($data:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data($data.clone())
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_responds_ok() {
    let data = test_data().await;
    let app = test_app!(data);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn games_are_listed_with_their_rules() {
    let data = test_data().await;
    let app = test_app!(data);

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/games").to_request())
            .await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/games/2").to_request())
            .await;
    assert_eq!(body["name"], "Tic-Tac-Toe");
    assert_eq!(body["setup_rules"][0]["description"], "Draw the grid");
    assert_eq!(body["setup_rules"][1]["each_player"], true);
    assert_eq!(body["setup_rules"][1]["dependencies"][0], 9);
}

macro_rules! create_player {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/players")
            .set_json(json!({"player": {"name": $name}}))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        body["id"].as_i64().expect("player id")
    }};
}

#[actix_web::test]
async fn session_lifecycle_over_http() {
    let data = test_data().await;
    let app = test_app!(data);

    let alice = create_player!(&app, "Alice");
    let bob = create_player!(&app, "Bob");

    // Ids arrive as strings in the create body.
    let req = test::TestRequest::post()
        .uri("/sessions")
        .set_json(json!({
            "session": {"game": "2", "players": [alice.to_string(), bob.to_string()]}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    let session_id = body["id"].as_i64().expect("session id");
    assert_eq!(body["steps"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["assignments"][0]["rule_id"], 9);
    assert_eq!(body["assignments"][1]["rule_id"], 9);

    // Step descriptions travel percent-encoded in the path.
    let uri = format!("/sessions/{session_id}/players/{alice}/steps/Draw%20the%20grid");
    let resp = test::call_service(&app, test::TestRequest::put().uri(&uri).to_request()).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["steps"][0]["done"], true);
    let alice_assignment = body["assignments"]
        .as_array()
        .expect("assignments")
        .iter()
        .find(|a| a["player_id"] == alice)
        .expect("alice assignment")
        .clone();
    assert_eq!(alice_assignment["rule_id"], 10);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{session_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["game_name"], "Tic-Tac-Toe");
    assert_eq!(body["players"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn malformed_ids_in_create_body_yield_problem_json() {
    let data = test_data().await;
    let app = test_app!(data);

    let req = test::TestRequest::post()
        .uri("/sessions")
        .set_json(json!({"session": {"game": "abc", "players": []}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert!(resp.headers().contains_key("x-trace-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["status"], 400);
    assert!(body["trace_id"].as_str().is_some());
}

#[actix_web::test]
async fn unknown_resources_yield_404_problem_json() {
    let data = test_data().await;
    let app = test_app!(data);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/games/999").to_request()).await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "GAME_NOT_FOUND");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/sessions/999").to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[actix_web::test]
async fn players_can_be_created_and_deleted() {
    let data = test_data().await;
    let app = test_app!(data);

    let id = create_player!(&app, "Carol");
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/players/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(body["name"], "Carol");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/players/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 204);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/players/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn deleting_a_rostered_player_is_a_conflict() {
    let data = test_data().await;
    let app = test_app!(data);

    let alice = create_player!(&app, "Alice");
    let req = test::TestRequest::post()
        .uri("/sessions")
        .set_json(json!({"session": {"game": "2", "players": [alice.to_string()]}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/players/{alice}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PLAYER_IN_USE");

    // The roster reference keeps the player alive.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/players/{alice}"))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn a_vanished_roster_player_reports_corrupted_state() {
    let data = test_data().await;
    let app = test_app!(data);

    let alice = create_player!(&app, "Alice");
    let req = test::TestRequest::post()
        .uri("/sessions")
        .set_json(json!({"session": {"game": "2", "players": [alice.to_string()]}}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let session_id = body["id"].as_i64().expect("session id");

    // Rip the player row out from under the roster. Both statements must
    // run on the same connection for the pragma to apply to the delete.
    data.db
        .execute_unprepared(&format!(
            "PRAGMA foreign_keys = OFF; DELETE FROM players WHERE id = {alice};"
        ))
        .await
        .expect("drop player row");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/sessions/{session_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "DATA_CORRUPTION");
}

#[actix_web::test]
async fn empty_player_name_is_rejected() {
    let data = test_data().await;
    let app = test_app!(data);

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"player": {"name": "   "}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
