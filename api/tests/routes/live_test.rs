#[cfg(test)]
mod tests {
    use crate::helpers::gemini_stub::{STUB_API_KEY, STUB_MODEL};
    use crate::helpers::{GeminiStub, get, make_test_app_with, post_json, spawn_gemini_stub};
    use axum::http::StatusCode;
    use serde_json::json;
    use util::config::AppConfig;

    const JUDGE_REPLY: &str = "Sure! Here is the comparison:\n\
        {'gemini_vs_user': [{'user_line_number': 1, 'ai_line_number': 1, 'line_content': 'total = a + b'}], \
        'chatgpt_vs_user': [], 'claude_vs_user': None}\nLet me know if you need more.";

    fn live_config(base_url: String) -> AppConfig {
        AppConfig {
            mock_mode: false,
            gemini_api_key: Some(STUB_API_KEY.into()),
            gemini_model: STUB_MODEL.into(),
            gemini_base_url: Some(base_url),
            backend_timeout_secs: 5,
            ..AppConfig::mock()
        }
    }

    async fn live_app(stub: GeminiStub) -> axum::Router {
        make_test_app_with(live_config(spawn_gemini_stub(stub).await))
    }

    fn working_stub() -> GeminiStub {
        GeminiStub {
            code_reply: Some("Here you go:\n```python\ntotal = a + b\nprint(total)\n```".into()),
            judge_reply: JUDGE_REPLY.into(),
        }
    }

    #[tokio::test]
    async fn health_reports_live_mode() {
        let (status, body) = get(live_app(working_stub()).await, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mock_mode"], false);
    }

    #[tokio::test]
    async fn live_generate_strips_fences_from_each_reply() {
        let (status, body) = post_json(
            live_app(working_stub()).await,
            "/generate",
            json!({"question": "Add two numbers", "language": "Python"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let code = "total = a + b\nprint(total)";
        assert_eq!(
            body["generated_codes"],
            json!({"gemini": code, "chatgpt": code, "claude": code})
        );
    }

    #[tokio::test]
    async fn live_analyze_extracts_judge_report_from_narration() {
        let (status, body) = post_json(
            live_app(working_stub()).await,
            "/analyze",
            json!({
                "question": "Add two numbers",
                "language": "python",
                "user_code": "total = a + b",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["similar_lines"],
            json!({
                "gemini_vs_user": [{"user_line_number": 1, "ai_line_number": 1, "line_content": "total = a + b"}],
                "chatgpt_vs_user": [],
                "claude_vs_user": []
            })
        );
    }

    #[tokio::test]
    async fn live_analyze_degrades_on_unparseable_judge_reply() {
        let stub = GeminiStub {
            judge_reply: "The code looks similar overall.".into(),
            ..working_stub()
        };
        let (status, body) = post_json(
            live_app(stub).await,
            "/analyze",
            json!({
                "question": "Q",
                "language": "python",
                "user_code": "x = 1",
                "gemini_code": "x = 1",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["similar_lines"],
            json!({
                "error": "failed_to_parse_agent_output",
                "raw_output": "The code looks similar overall.",
                "gemini_vs_user": [],
                "chatgpt_vs_user": [],
                "claude_vs_user": []
            })
        );
    }

    #[tokio::test]
    async fn live_analyze_drops_only_the_malformed_match() {
        let stub = GeminiStub {
            judge_reply: "{'gemini_vs_user': [{'user_line_number': 1, 'ai_line_number': 1, \
                          'line_content': 'x = 1'}], 'chatgpt_vs_user': [{'user_line_number': 1, \
                          'ai_line_number': None, 'line_content': 'x = 1'}], 'claude_vs_user': []}"
                .into(),
            ..working_stub()
        };
        let (status, body) = post_json(
            live_app(stub).await,
            "/analyze",
            json!({
                "question": "Q",
                "language": "python",
                "user_code": "x = 1",
                "gemini_code": "x = 1",
                "chatgpt_code": "x = 1",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["similar_lines"],
            json!({
                "gemini_vs_user": [{"user_line_number": 1, "ai_line_number": 1, "line_content": "x = 1"}],
                "chatgpt_vs_user": [],
                "claude_vs_user": []
            })
        );
    }

    #[tokio::test]
    async fn live_generate_failure_is_500() {
        let stub = GeminiStub {
            code_reply: None,
            ..working_stub()
        };
        let (status, body) = post_json(
            live_app(stub).await,
            "/generate",
            json!({"question": "Q", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn live_analyze_generation_failure_is_500() {
        let stub = GeminiStub {
            code_reply: None,
            ..working_stub()
        };
        let (status, body) = post_json(
            live_app(stub).await,
            "/analyze",
            json!({"question": "Q", "language": "python", "user_code": "x = 1"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn wrong_api_key_is_500() {
        let base_url = spawn_gemini_stub(working_stub()).await;
        let config = AppConfig {
            gemini_api_key: Some("wrong".into()),
            ..live_config(base_url)
        };
        let (status, body) = post_json(
            make_test_app_with(config),
            "/generate",
            json!({"question": "Q", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("401"));
    }
}
