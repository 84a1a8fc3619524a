pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/text", post(handlers::handle_match_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::TfIdfScorer;
    use crate::skills::SkillVocabulary;

    const BOUNDARY: &str = "matcher-test-boundary";
    const RESUME: &str = "Experienced in Python, SQL and Docker for backend development";
    const JD: &str = "Looking for a candidate skilled in Python, AWS, Docker and Kubernetes";

    fn test_app() -> Router {
        let state = AppState {
            config: Config::default(),
            vocabulary: Arc::new(SkillVocabulary::new([
                "python",
                "sql",
                "docker",
                "aws",
                "kubernetes",
            ])),
            scorer: Arc::new(TfIdfScorer),
        };
        build_router(state)
    }

    /// Builds a multipart body. Each part is (name, optional file name, bytes).
    fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, file_name, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match file_name {
                Some(f) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_skills_in_load_order() {
        let request = Request::builder()
            .uri("/api/v1/skills")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 5);
        assert_eq!(body["skills"][0], "python");
    }

    #[tokio::test]
    async fn test_match_plain_text_upload() {
        let request = multipart_request(&[
            ("resume", Some("resume.txt"), RESUME.as_bytes()),
            ("jd_text", None, JD.as_bytes()),
        ]);
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK, "body: {body}");
        assert_eq!(body["missing_skills"], json!(["aws", "kubernetes"]));
        assert_eq!(body["resume_skills"], json!(["docker", "python", "sql"]));
        let score = body["score"].as_f64().unwrap();
        assert!(score > 0.0 && score < 100.0);
    }

    #[tokio::test]
    async fn test_match_without_jd_is_rejected() {
        let request = multipart_request(&[("resume", Some("resume.txt"), RESUME.as_bytes())]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_without_resume_is_rejected() {
        let request = multipart_request(&[("jd_text", None, JD.as_bytes())]);
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_match_unsupported_format() {
        let request = multipart_request(&[
            ("resume", Some("resume.odt"), RESUME.as_bytes()),
            ("jd_text", None, JD.as_bytes()),
        ]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_match_invalid_utf8_is_decode_error() {
        let request = multipart_request(&[
            ("resume", Some("resume.txt"), &b"py\xff\xfe"[..]),
            ("jd_text", None, JD.as_bytes()),
        ]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "DECODE_ERROR");
    }

    #[tokio::test]
    async fn test_match_text_endpoint() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "resume_text": RESUME, "jd_text": JD }).to_string(),
            ))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jd_skills"], json!(["aws", "docker", "kubernetes", "python"]));
        assert_eq!(body["scorer_backend"], "tfidf");
    }
}
