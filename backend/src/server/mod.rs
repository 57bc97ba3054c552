//! Server assembly: route table and bootstrap.

pub mod config;

pub use config::ServerConfig;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tracing::{error, info};

use crate::domain::Error;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::session::SessionSettings;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{assignments, auth, classes, enrollments, health, student};

/// Register every HTTP route.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(auth::register)
            .service(auth::login)
            .service(auth::me)
            .service(classes::list_classes)
            .service(classes::create_class)
            .service(enrollments::enroll)
            .service(assignments::create_assignment)
            .service(student::enrolled_classes),
    )
    .service(health::ready)
    .service(health::live);
}

/// JSON extractor configuration. A body that fails to deserialize lands in
/// the same generic 500 as any other unanticipated failure, instead of the
/// framework's default 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::internal(format!("malformed request body: {err}")).into()
    })
}

/// Initialize the store, bind, and serve until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = HttpState::json_backed(&config.data_dir).map_err(|err| {
        error!(%err, "store initialization failed");
        std::io::Error::other(err)
    })?;
    let state = web::Data::new(state);
    let settings = web::Data::new(SessionSettings {
        cookie_secure: config.cookie_secure,
    });
    let health_state = web::Data::new(HealthState::new());

    let app_state = state.clone();
    let app_settings = settings.clone();
    let app_health = health_state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .app_data(app_settings.clone())
            .app_data(app_health.clone())
            .app_data(json_config())
            .configure(routes)
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, data_dir = %config.data_dir.display(), "starting server");
    health_state.mark_ready();
    server.run().await
}
