#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, post_json};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    const FIND_MAX: &str =
        "def find_max(a, b):\n    if a > b:\n        return a\n    else:\n        return b";

    fn line(user: u64, ai: u64, content: &str) -> Value {
        json!({"user_line_number": user, "ai_line_number": ai, "line_content": content})
    }

    #[tokio::test]
    async fn analyze_identical_variants_matches_every_line() {
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({
                "question": "Return the larger of two numbers",
                "language": "python",
                "user_code": FIND_MAX,
                "gemini_code": FIND_MAX,
                "chatgpt_code": FIND_MAX,
                "claude_code": FIND_MAX,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let expected = json!([
            line(1, 1, "def find_max(a, b):"),
            line(2, 2, "if a > b:"),
            line(3, 3, "return a"),
            line(4, 4, "else:"),
            line(5, 5, "return b"),
        ]);
        for key in ["gemini_vs_user", "chatgpt_vs_user", "claude_vs_user"] {
            assert_eq!(body["similar_lines"][key], expected, "{key}");
        }
        assert!(body["similar_lines"].get("error").is_none());
    }

    #[tokio::test]
    async fn analyze_with_one_supplied_variant_treats_others_as_empty() {
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({
                "question": "Q",
                "language": "python",
                "user_code": "x = 1\ny = 2",
                "chatgpt_code": "```python\ny = 2\n```",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["generated_codes"],
            json!({"gemini": "", "chatgpt": "y = 2", "claude": ""})
        );
        assert_eq!(body["similar_lines"]["chatgpt_vs_user"], json!([line(2, 1, "y = 2")]));
        assert_eq!(body["similar_lines"]["gemini_vs_user"], json!([]));
        assert_eq!(body["similar_lines"]["claude_vs_user"], json!([]));
    }

    #[tokio::test]
    async fn analyze_accepts_legacy_gemini_field() {
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({
                "question": "Q",
                "language": "python",
                "user_code": "x = 1",
                "code_generator_code": "x = 1",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["generated_codes"]["gemini"], "x = 1");
        assert_eq!(body["similar_lines"]["gemini_vs_user"], json!([line(1, 1, "x = 1")]));
    }

    #[tokio::test]
    async fn analyze_without_variants_generates_mock_samples() {
        let user_code = "```python\ndef example(n):\n    return n\n```";
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({
                "question": "Q",
                "language": "python",
                "user_code": user_code,
                "gemini_code": "",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_code"], user_code);
        assert_eq!(
            body["generated_codes"]["claude"],
            "def example(n):\n    # mock implementation\n    return n\n"
        );
        assert_eq!(
            body["similar_lines"]["claude_vs_user"],
            json!([line(1, 1, "def example(n):"), line(2, 3, "return n")])
        );
    }

    #[tokio::test]
    async fn analyze_with_no_shared_lines_returns_empty_lists() {
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({
                "question": "Q",
                "language": "c",
                "user_code": "puts(\"hi\");",
                "gemini_code": "int a;",
                "chatgpt_code": "int b;",
                "claude_code": "int c;",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["similar_lines"],
            json!({"gemini_vs_user": [], "chatgpt_vs_user": [], "claude_vs_user": []})
        );
    }

    #[tokio::test]
    async fn analyze_requires_user_code() {
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({"question": "Q", "language": "python"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("user_code"));
    }

    #[tokio::test]
    async fn analyze_rejects_empty_language() {
        let (status, body) = post_json(
            make_test_app(),
            "/analyze",
            json!({"question": "Q", "language": "", "user_code": "x"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "language must not be empty");
    }
}
