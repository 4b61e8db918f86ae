#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, make_test_app_with, post_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;
    use util::config::AppConfig;

    const PY_SAMPLE: &str = "def example(n):\n    # mock implementation\n    return n\n";

    #[tokio::test]
    async fn generate_in_mock_mode_returns_three_samples() {
        let (status, body) = post_json(
            make_test_app(),
            "/generate",
            json!({"question": "Double a number", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "Double a number");
        assert_eq!(body["language"], "python");
        assert_eq!(
            body["generated_codes"],
            json!({"gemini": PY_SAMPLE, "chatgpt": PY_SAMPLE, "claude": PY_SAMPLE})
        );
    }

    #[tokio::test]
    async fn generate_uses_c_family_sample_for_other_languages() {
        let (status, body) = post_json(
            make_test_app(),
            "/generate",
            json!({"question": "Q", "language": "Java"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["generated_codes"]["claude"],
            "int example(int n) {\n    return n;\n}\n"
        );
    }

    #[tokio::test]
    async fn generate_mirrors_legacy_alias_when_enabled() {
        let config = AppConfig {
            emit_legacy_alias: true,
            ..AppConfig::mock()
        };
        let (status, body) = post_json(
            make_test_app_with(config),
            "/generate",
            json!({"question": "Q", "language": "py"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["generated_codes"]["code_generator"], PY_SAMPLE);
        assert_eq!(body["generated_codes"]["gemini"], PY_SAMPLE);
    }

    #[tokio::test]
    async fn generate_rejects_empty_question() {
        let (status, body) = post_json(
            make_test_app(),
            "/generate",
            json!({"question": "", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "question must not be empty");
    }

    #[tokio::test]
    async fn generate_rejects_missing_field() {
        let (status, body) =
            post_json(make_test_app(), "/generate", json!({"question": "Q"})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("language"));
    }

    #[tokio::test]
    async fn generate_rejects_malformed_json() {
        let req = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from("{\"question\": "))
            .unwrap();
        let response = make_test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].is_string());
    }
}
