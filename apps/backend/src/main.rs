use actix_web::{web, App, HttpServer};
use backend::config::db::bind_addr;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::services::{games, sessions};
use backend::state_builder;
use backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via env_file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let (host, port) = bind_addr();

    let app_state = match state_builder().build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    // Warm the caches: the game catalog first, then every persisted
    // session (sessions need the catalog's rule graphs to rebuild).
    if let Err(e) = games::load_catalog(&app_state).await {
        eprintln!("❌ Failed to load game catalog: {e}");
        std::process::exit(1);
    }
    if let Err(e) = sessions::load_all_sessions(&app_state).await {
        eprintln!("❌ Failed to load sessions: {e}");
        std::process::exit(1);
    }

    println!("🚀 Starting meeple-mover on http://{host}:{port}");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
