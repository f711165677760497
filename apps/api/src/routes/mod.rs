pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::query::handlers as query;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/shortlist", post(screening::handle_shortlist))
        // Candidate table API
        .route(
            "/api/v1/candidates/table",
            post(query::handle_table_preview),
        )
        .route("/api/v1/candidates/query", post(query::handle_query))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::testing::Utf8Extractor;

    const BOUNDARY: &str = "hireai-test-boundary";
    const JD: &str = "Looking for a Python developer with AWS and Docker experience";
    const CSV: &[u8] = b"Name,Experience\nAsha,2\nVikram,6\nMeera,9\n";

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn multipart_body(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!(
                            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                        )
                        .as_bytes(),
                    );
                }
                Part::File(name, filename, data) => {
                    body.extend_from_slice(
                        format!(
                            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            extractor: Arc::new(Utf8Extractor),
        })
    }

    async fn post_form(uri: &str, parts: &[Part<'_>]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_shortlist_returns_top_candidate() {
        let (status, body) = post_form(
            "/api/v1/shortlist",
            &[
                Part::Text("job_description", JD),
                Part::Text("num_candidates", "1"),
                Part::File("resumes", "asha.pdf", b"Asha Rao\nPython, AWS, Docker, Leadership"),
                Part::File("resumes", "vikram.pdf", b"Vikram Singh\nHTML, CSS"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK, "body: {body}");
        assert_eq!(body["uploaded"], 2);
        let candidates = body["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0]["Name"], "Asha Rao");
        assert_eq!(candidates[0]["Skills"], "Python, AWS, Docker");
        assert!(candidates[0].get("SkillMatchCount").is_none());
    }

    #[tokio::test]
    async fn test_shortlist_ignores_empty_file_parts() {
        let (status, body) = post_form(
            "/api/v1/shortlist",
            &[
                Part::Text("job_description", JD),
                Part::Text("num_candidates", "5"),
                Part::File("resumes", "empty.pdf", b""),
                Part::File("resumes", "asha.pdf", b"Asha Rao Python"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK, "body: {body}");
        assert_eq!(body["uploaded"], 1);
        assert_eq!(body["candidates"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_shortlist_requires_job_description() {
        let (status, body) = post_form(
            "/api/v1/shortlist",
            &[
                Part::Text("job_description", ""),
                Part::File("resumes", "asha.pdf", b"Asha Rao"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_shortlist_requires_resumes() {
        let (status, body) =
            post_form("/api/v1/shortlist", &[Part::Text("job_description", JD)]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_shortlist_aborts_on_unreadable_resume() {
        let (status, body) = post_form(
            "/api/v1/shortlist",
            &[
                Part::Text("job_description", JD),
                Part::File("resumes", "asha.pdf", b"Asha Rao Python"),
                Part::File("resumes", "broken.pdf", b"%BROKEN"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
        assert!(body.get("candidates").is_none());
    }

    #[tokio::test]
    async fn test_table_preview() {
        let (status, body) = post_form(
            "/api/v1/candidates/table",
            &[Part::File("csv", "candidates.csv", CSV)],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headers"][1], "Experience");
        assert_eq!(body["rows"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_query_filters_by_experience() {
        let (status, body) = post_form(
            "/api/v1/candidates/query",
            &[
                Part::File("csv", "candidates.csv", CSV),
                Part::Text("query", "5 years experience"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "filtered");
        let rows = body["table"]["rows"].as_array().unwrap();
        let experience: Vec<&str> = rows.iter().map(|r| r[1].as_str().unwrap()).collect();
        assert_eq!(experience, vec!["6", "9"]);
    }

    #[tokio::test]
    async fn test_query_unrecognized_is_not_an_error() {
        let (status, body) = post_form(
            "/api/v1/candidates/query",
            &[
                Part::File("csv", "candidates.csv", CSV),
                Part::Text("query", "experience level"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "unrecognized");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Query not recognized"));
    }

    #[tokio::test]
    async fn test_query_requires_csv() {
        let (status, body) = post_form(
            "/api/v1/candidates/query",
            &[Part::Text("query", "5 years")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
