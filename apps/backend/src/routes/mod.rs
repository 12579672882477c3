use actix_web::web;

pub mod consoles;
pub mod games;
pub mod health;

/// Register every catalog route.
///
/// `main.rs` and the integration test app builder both call this, so tests
/// exercise the same paths production serves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    health::configure_routes(cfg);

    // Console routes: /consoles/**
    cfg.service(web::scope("/consoles").configure(consoles::configure_routes));

    // Game routes: /games/**
    cfg.service(web::scope("/games").configure(games::configure_routes));
}
