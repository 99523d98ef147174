//! Route definitions for the Maize Yield Predictor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Yield prediction
        .route("/predictions", post(handlers::predict_yield))
        // Model metadata
        .route("/model", get(handlers::get_model_info))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::{Config, ModelConfig, ServerConfig};
    use crate::model::test_support::forest_of_leaves;
    use crate::{create_app, AppState};

    fn test_app() -> axum::Router {
        let config = Config {
            environment: "test".to_string(),
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            model: ModelConfig {
                path: "unused-in-tests".to_string(),
            },
        };
        let state = AppState {
            model: Arc::new(forest_of_leaves(&[1800.0, 2200.0])),
            config: Arc::new(config),
        };
        create_app(state)
    }

    fn example_body() -> String {
        serde_json::json!({
            "season_year": 2024,
            "region": "central",
            "maize_type": "hybrid",
            "soil_quality": "good",
            "fertilizer_type": "mixed",
            "irrigated": true,
            "crop_rotation": false,
            "farmer_experience_years": 5,
            "area_ha": 2.0,
            "rainfall_level": "moderate",
            "temperature_level": "moderate",
            "fertilizer_kg_ha": 100.0
        })
        .to_string()
    }

    fn post_prediction(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/predictions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_predict_round_trip() {
        let response = test_app().oneshot(post_prediction(example_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(payload["predicted_yield"]["kg_per_ha"], 2000.0);
        assert_eq!(payload["features"]["Rainfall_mm"], 1100);
        assert_eq!(payload["features"]["Maize_Type"], "Hybrid");
        assert_eq!(payload["features"]["Irrigated"], 1);
    }

    #[test]
    fn test_out_of_range_experience_is_rejected() {
        let body = example_body().replace("\"farmer_experience_years\":5", "\"farmer_experience_years\":45");
        let response =
            tokio_test::block_on(test_app().oneshot(post_prediction(body))).unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_year_is_rejected() {
        let body = example_body().replace("\"season_year\":2024", "\"season_year\":1999");
        let response = test_app().oneshot(post_prediction(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_enum_value_is_rejected() {
        let body = example_body().replace("\"region\":\"central\"", "\"region\":\"lakeshore\"");
        let response = test_app().oneshot(post_prediction(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let request = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["model"]["loaded"], true);
        assert_eq!(payload["model"]["trees"], 2);
    }

    #[tokio::test]
    async fn test_model_info_lists_schema() {
        let request = Request::builder()
            .uri("/api/v1/model")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["feature_names"][0], "Year");
        assert_eq!(payload["feature_names"][11], "Fertilizer_kg_ha");
    }
}
