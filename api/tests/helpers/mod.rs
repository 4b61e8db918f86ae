pub mod app;
pub mod gemini_stub;

pub use app::{get, make_test_app, make_test_app_with, post_json};
pub use gemini_stub::{GeminiStub, spawn_gemini_stub};
