pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches/score", post(handlers::handle_score))
        .route("/api/v1/matches/batch", post(handlers::handle_batch_score))
        .route(
            "/api/v1/matches/suggestions",
            post(handlers::handle_suggestions),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::matching::scorer::TfIdfMatchScorer;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                max_batch_jobs: 3,
                ..Config::default()
            },
            scorer: Arc::new(TfIdfMatchScorer),
        })
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> Response {
        router
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes")
    }

    async fn read_json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    fn job(title: &str) -> Value {
        json!({ "id": Uuid::new_v4(), "title": title, "description": "Rust and Python services" })
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_endpoint_returns_result() {
        let response = post_json(
            test_router(),
            "/api/v1/matches/score",
            json!({
                "resume_text": "React and Python developer",
                "job_text": "React, Python and AWS",
                "user_work_type_preference": "Remote",
                "job_work_type": "remote",
                "user_location": "Austin",
                "job_location": "Austin, TX"
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["missing_skills"], json!(["aws"]));
        assert_eq!(payload["scorer_backend"], "tfidf");
        let score = payload["match_score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score));
    }

    #[tokio::test]
    async fn test_score_endpoint_rejects_unknown_work_type() {
        let response = post_json(
            test_router(),
            "/api/v1/matches/score",
            json!({
                "resume_text": "a",
                "job_text": "b",
                "job_work_type": "freelance"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_batch_endpoint_ranks_jobs() {
        let response = post_json(
            test_router(),
            "/api/v1/matches/batch",
            json!({
                "resume": { "text": "Rust and Python backend engineer" },
                "jobs": [job("Pastry chef"), job("Rust engineer")],
                "min_score": 0
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["matches_computed"], 2);
        let matches = payload["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches[0]["match_score"].as_f64() >= matches[1]["match_score"].as_f64());
    }

    #[tokio::test]
    async fn test_batch_endpoint_uses_configured_min_score() {
        let router = build_router(AppState {
            config: Config {
                default_min_score: 50.0,
                ..Config::default()
            },
            scorer: Arc::new(TfIdfMatchScorer),
        });
        let backend = Uuid::new_v4();
        let response = post_json(
            router,
            "/api/v1/matches/batch",
            json!({
                "resume": { "text": "Rust and Python backend engineer" },
                "jobs": [
                    { "id": Uuid::new_v4(), "title": "Pastry chef", "description": "Croissants and laminated dough" },
                    { "id": backend, "title": "Rust engineer", "description": "Rust and Python backend engineer" }
                ]
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["min_score"], 50.0);
        assert_eq!(payload["matches_computed"], 2);
        assert_eq!(payload["matches_stored"], 1);
        assert_eq!(payload["matches"][0]["job_id"], json!(backend));
    }

    #[tokio::test]
    async fn test_batch_endpoint_validates_input() {
        let empty = post_json(
            test_router(),
            "/api/v1/matches/batch",
            json!({ "resume": { "text": "rust" }, "jobs": [] }),
        )
        .await;
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

        let too_many = post_json(
            test_router(),
            "/api/v1/matches/batch",
            json!({
                "resume": { "text": "rust" },
                "jobs": [job("a"), job("b"), job("c"), job("d")]
            }),
        )
        .await;
        assert_eq!(too_many.status(), StatusCode::BAD_REQUEST);

        let bad_min = post_json(
            test_router(),
            "/api/v1/matches/batch",
            json!({ "resume": { "text": "rust" }, "jobs": [job("a")], "min_score": 101 }),
        )
        .await;
        assert_eq!(bad_min.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(bad_min).await;
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_suggestions_endpoint() {
        let response = post_json(
            test_router(),
            "/api/v1/matches/suggestions",
            json!({ "has_resume": false, "active_job_count": 0, "match_count": 0 }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["has_matches"], false);
        assert_eq!(payload["suggestions"][0]["type"], "resume");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = test_router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"]["code"], "NOT_FOUND");
    }
}
