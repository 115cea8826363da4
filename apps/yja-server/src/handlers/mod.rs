//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Feed
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{id}", web::get().to(posts::get_post))
            // Admin
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post)),
    );
}

/// Malformed JSON bodies become RFC 7807 400s instead of plain-text errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string())))
}

/// Same for query strings that do not deserialize, e.g. `confirm=yes`.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string())))
}
