//! Assertions on the `application/problem+json` error contract.
//!
//! Kept independent of backend types so the contract is checked from the
//! outside, the way a client sees it.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

const TYPE_PREFIX: &str = "https://lobby.local/errors/";

/// Client-side view of an error body.
#[derive(Debug, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert status, code and headers of an error response and return the parsed body.
///
/// Checks that:
/// - the content type is `application/problem+json`
/// - `x-trace-id` is present and equals the body's `trace_id`
/// - `x-request-id`, when the request-id middleware is mounted, carries the same id
/// - `type` is derived from `code`
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> Problem {
    assert_eq!(resp.status(), expected_status, "unexpected status");

    let headers = resp.headers().clone();
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let trace_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let problem: Problem = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "body is not problem details ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    });

    assert_eq!(problem.trace_id, trace_header, "body trace_id != x-trace-id");
    if let Some(request_id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        assert_eq!(request_id, trace_header, "x-request-id != x-trace-id");
    }

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("{TYPE_PREFIX}{expected_code}"));
    assert!(!problem.title.is_empty(), "title should not be empty");

    problem
}

/// Like [`assert_problem`], additionally requiring `detail` to contain `needle`.
pub async fn assert_problem_with_detail(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    needle: &str,
) -> Problem {
    let problem = assert_problem(resp, expected_status, expected_code).await;
    assert!(
        problem.detail.contains(needle),
        "expected detail to contain '{needle}', got '{}'",
        problem.detail
    );
    problem
}
