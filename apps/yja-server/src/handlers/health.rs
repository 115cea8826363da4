//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use serde_json::Value;

    use yja_core::PostStore;
    use yja_infra::{InMemoryKeyValueStore, RandomIdGenerator, SystemClock};

    use super::*;

    #[actix_web::test]
    async fn test_health_reports_status_version_timestamp() {
        let store = PostStore::load(
            "health_key",
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(SystemClock),
            Arc::new(RandomIdGenerator),
        )
        .await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::from_store(store)))
                .route("/api/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].is_string());
        assert_eq!(body.as_object().unwrap().len(), 3);
    }
}
