#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn root_returns_plain_ok() {
        let (status, body) = get(make_test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("ok"));
    }

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let (status, body) = get(make_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "mock_mode": true}));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = get(make_test_app(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
