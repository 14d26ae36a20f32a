use actix_web::web;

pub mod games;
pub mod health;
pub mod players;
pub mod sessions;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(games::configure_routes)
        .configure(players::configure_routes)
        .configure(sessions::configure_routes);
}
