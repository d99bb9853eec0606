//! Progression generation endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use chord_trainer_core::{GenerateParams, Progression};

use crate::AppState;

/// Rejected request, rendered as a `400` with a JSON `error` message
pub enum ApiError {
    Body(JsonRejection),
    Generation(chord_trainer_core::Error),
}

impl From<chord_trainer_core::Error> for ApiError {
    fn from(err: chord_trainer_core::Error) -> Self {
        Self::Generation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Generation(err) => err.to_string(),
        };
        warn!("Generation rejected: {}", message);
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateParams>, JsonRejection>,
) -> Result<Json<Progression>, ApiError> {
    let Json(params) = body?;
    let request = params.to_request(&state.config.limits)?;
    let progression = request.generate(&mut rand::rng())?;

    info!(
        key = %progression.key,
        chords = progression.len(),
        pool = progression.pool_size,
        "Generated progression"
    );

    Ok(Json(progression))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::tests::{read_json, test_app};

    async fn post(body: Value) -> (StatusCode, Value) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/progression")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        (status, read_json(response).await)
    }

    #[tokio::test]
    async fn test_beginner_progression() {
        let (status, body) = post(json!({
            "key": "C",
            "training_type": "difficulty",
            "difficulty_level": "Beginner",
            "num_chords": 4
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["key"], "C");
        assert_eq!(body["mode"], "Major");
        assert_eq!(body["pool_size"], 7);

        let chords = body["chords"].as_array().unwrap();
        assert_eq!(chords.len(), 4);
        let allowed = ["C5", "D5", "E5", "F5", "G5", "A5", "B5"];
        for chord in chords {
            assert!(allowed.contains(&chord.as_str().unwrap()));
        }
    }

    #[tokio::test]
    async fn test_family_progression_uses_default_length() {
        let (status, body) = post(json!({
            "key": "G",
            "mode": "Minor",
            "training_type": "chord_family",
            "selected_families": ["Seventh Chords Major", "Extended Chords"]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "Minor");
        assert_eq!(body["pool_size"], 11);
        assert_eq!(body["chords"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_empty_family_selection_is_bad_request() {
        let (status, body) = post(json!({
            "key": "C",
            "training_type": "chord_family",
            "selected_families": [],
            "num_chords": 4
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("at least one chord family"));
    }

    #[tokio::test]
    async fn test_chord_count_outside_limits_is_bad_request() {
        let (status, body) = post(json!({
            "key": "D",
            "training_type": "difficulty",
            "difficulty_level": "Expert",
            "num_chords": 40
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("between 4 and 16"));
    }

    #[tokio::test]
    async fn test_missing_training_type_is_bad_request() {
        let (status, body) = post(json!({
            "key": "C",
            "difficulty_level": "Beginner",
            "num_chords": 4
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("training type"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request_json() {
        let (status, body) = post(json!({
            "key": "C",
            "training_type": "difficulty",
            "difficulty_level": "Beginner",
            "num_chords": -1
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/progression")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(read_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_key_is_bad_request() {
        let (status, body) = post(json!({
            "key": "H",
            "training_type": "difficulty",
            "difficulty_level": "Beginner"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("key 'H'"));
    }
}
