use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::pending_replies::PendingReplies;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub routing: RoutingHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoutingHealth {
    pub administrators: usize,
    pub pending_replies: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub pending: Arc<PendingReplies>,
    pub admin_count: usize,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(pending: Arc<PendingReplies>, admin_count: usize) -> Self {
        let state = AppState {
            pending,
            admin_count,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    // Without administrators the bot still answers users but relays nothing
    let status = if state.admin_count > 0 { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routing: RoutingHealth {
            administrators: state.admin_count,
            pending_replies: state.pending.len(),
        },
        uptime_seconds: uptime,
    })
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    if state.admin_count > 0 {
        Ok(Json("ready"))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use teloxide::types::{ChatId, UserId};

    fn create_test_health_service(admin_count: usize) -> (HealthService, Arc<PendingReplies>) {
        let pending = Arc::new(PendingReplies::new());
        (HealthService::new(pending.clone(), admin_count), pending)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (health_service, pending) = create_test_health_service(2);
        pending.arm(UserId(1), ChatId(555));
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health_response.routing.administrators, 2);
        assert_eq!(health_response.routing.pending_replies, 1);
    }

    #[tokio::test]
    async fn test_health_endpoint_without_admins() {
        let (health_service, _pending) = create_test_health_service(0);
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "degraded");
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let (health_service, _pending) = create_test_health_service(1);
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: String = response.json();
        assert_eq!(body, "ready");
    }

    #[tokio::test]
    async fn test_readiness_endpoint_without_admins() {
        let (health_service, _pending) = create_test_health_service(0);
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let (health_service, _pending) = create_test_health_service(0);
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: String = response.json();
        assert_eq!(body, "alive");
    }
}
