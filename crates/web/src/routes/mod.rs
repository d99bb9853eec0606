use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use chord_trainer_core::{ChordFamily, Difficulty, Key, Mode, PracticeLimits};

use crate::AppState;

pub mod progression;

/// Values a client can offer the player when building a request
#[derive(Serialize)]
pub struct OptionsResponse {
    pub keys: Vec<&'static str>,
    pub modes: Vec<&'static str>,
    pub training_types: Vec<&'static str>,
    pub difficulties: Vec<&'static str>,
    pub families: Vec<&'static str>,
    pub limits: PracticeLimits,
}

pub async fn options(State(state): State<Arc<AppState>>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        keys: Key::ALL.iter().map(Key::as_str).collect(),
        modes: Mode::ALL.iter().map(Mode::as_str).collect(),
        training_types: vec!["difficulty", "chord_family"],
        difficulties: Difficulty::ALL.iter().map(Difficulty::as_str).collect(),
        families: ChordFamily::ALL.iter().map(ChordFamily::display_name).collect(),
        limits: state.config.limits,
    })
}

pub async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::AppState;

    pub fn test_app() -> Router {
        crate::app(Arc::new(AppState {
            config: ServerConfig::default(),
        }))
    }

    pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_options_lists_form_values() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/options").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;

        assert_eq!(body["keys"], serde_json::json!(["C", "G", "D", "A", "E", "F", "B"]));
        assert_eq!(body["families"][3], "Diminished & Augmented Chords");
        assert_eq!(body["limits"]["min_chords"], 4);
        assert_eq!(body["limits"]["max_chords"], 16);
        assert_eq!(body["limits"]["default_chords"], 8);
    }
}
