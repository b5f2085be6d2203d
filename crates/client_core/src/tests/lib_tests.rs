use super::*;

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use shared::{domain::QuestionKind, error::ErrorCode};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct ServerState {
    seen_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    seen_publications: Arc<Mutex<Vec<String>>>,
}

async fn list_reviews(
    State(state): State<ServerState>,
    Path(publication_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    state.seen_queries.lock().expect("lock").push(query);
    state
        .seen_publications
        .lock()
        .expect("lock")
        .push(publication_id.clone());
    if publication_id == "missing" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "data": {
            "reviews": [
                {"id": "r1", "user": {"name": "Ada"}, "comment": "clear", "replyCount": 1},
                {"id": "r2", "user": {"name": "Bo"}, "comment": "long", "replyCount": 0}
            ]
        }
    })))
}

async fn list_replies(Path(review_id): Path<String>) -> Json<Value> {
    Json(json!({
        "data": {
            "replies": [
                {"id": format!("{review_id}-a"), "user": {"name": "Cy"}, "comment": "agreed"}
            ]
        }
    }))
}

async fn list_questions(Path((centre_id, bank_id)): Path<(String, String)>) -> Json<Value> {
    Json(json!({
        "data": {
            "questions": [
                {
                    "question": {
                        "type": "objective",
                        "question": format!("<p>{centre_id}/{bank_id}</p>"),
                        "options": [
                            {"value": "3", "isCorrect": false},
                            {"value": "4", "isCorrect": true}
                        ]
                    },
                    "solution": {"text": "2 + 2"}
                }
            ]
        }
    }))
}

async fn broken_body() -> &'static str {
    "{\"data\": "
}

async fn spawn_content_server() -> std::io::Result<(String, ServerState)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let state = ServerState::default();
    let app = Router::new()
        .route("/api/reviews/:id", get(list_reviews))
        .route("/api/reviews/:id/replies", get(list_replies))
        .route(
            "/api/centre/:centre_id/question-bank/:bank_id/questions",
            get(list_questions),
        )
        .route("/broken/reviews/:id", get(broken_body))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), state))
}

#[tokio::test]
async fn fetches_reviews_in_date_order() {
    let (base, state) = spawn_content_server().await.expect("server");
    let source =
        HttpContentSource::new(&format!("{base}/api"), DEFAULT_REQUEST_TIMEOUT).expect("source");

    let reviews = source
        .reviews(&PublicationId::new("pub-1"))
        .await
        .expect("reviews");

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, ReviewId::new("r1"));
    let queries = state.seen_queries.lock().expect("lock");
    assert_eq!(queries[0].get("orderBy").map(String::as_str), Some("date"));
    assert_eq!(queries[0].get("order").map(String::as_str), Some("asc"));
}

#[tokio::test]
async fn reserved_characters_stay_inside_the_identity_segment() {
    let (base, state) = spawn_content_server().await.expect("server");
    let source =
        HttpContentSource::new(&format!("{base}/api"), DEFAULT_REQUEST_TIMEOUT).expect("source");

    source
        .reviews(&PublicationId::new("a?b#c/d"))
        .await
        .expect("reviews");

    let seen = state.seen_publications.lock().expect("lock");
    assert_eq!(seen.as_slice(), ["a?b#c/d".to_string()]);
    let queries = state.seen_queries.lock().expect("lock");
    assert_eq!(queries[0].get("order").map(String::as_str), Some("asc"));
    assert!(!queries[0].contains_key("b"));
}

#[test]
fn rejects_base_url_that_cannot_take_a_path() {
    let err = HttpContentSource::new("mailto:content@example.com", DEFAULT_REQUEST_TIMEOUT)
        .err()
        .expect("cannot-be-a-base");
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[tokio::test]
async fn fetches_replies_for_one_review() {
    let (base, _) = spawn_content_server().await.expect("server");
    let source =
        HttpContentSource::new(&format!("{base}/api/"), DEFAULT_REQUEST_TIMEOUT).expect("source");

    let replies = source.replies(&ReviewId::new("r1")).await.expect("replies");

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id.as_str(), "r1-a");
}

#[tokio::test]
async fn fetches_question_bank_entries() {
    let (base, _) = spawn_content_server().await.expect("server");
    let source =
        HttpContentSource::new(&format!("{base}/api"), DEFAULT_REQUEST_TIMEOUT).expect("source");

    let entries = source
        .questions(&CentreId::new("c1"), &QuestionBankId::new("qb1"))
        .await
        .expect("questions");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].question.kind, QuestionKind::Objective);
    assert_eq!(entries[0].question.question, "<p>c1/qb1</p>");
    assert!(entries[0].question.options[1].is_correct);
}

#[tokio::test]
async fn http_status_failures_carry_the_endpoint() {
    let (base, _) = spawn_content_server().await.expect("server");
    let source =
        HttpContentSource::new(&format!("{base}/api"), DEFAULT_REQUEST_TIMEOUT).expect("source");

    let err = source
        .reviews(&PublicationId::new("missing"))
        .await
        .expect_err("404");

    assert!(matches!(err, ClientError::Status { status: 404, .. }));
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(err.to_string().contains("/reviews/missing?orderBy=date&order=asc"));
}

#[tokio::test]
async fn truncated_bodies_are_decode_errors() {
    let (base, _) = spawn_content_server().await.expect("server");
    let source =
        HttpContentSource::new(&format!("{base}/broken"), DEFAULT_REQUEST_TIMEOUT).expect("source");

    let err = source
        .reviews(&PublicationId::new("pub-1"))
        .await
        .expect_err("decode");

    assert!(matches!(err, ClientError::Decode { .. }));
    assert_eq!(err.to_api_error().code, ErrorCode::Validation);
}

#[test]
fn rejects_unparseable_base_url() {
    let err = HttpContentSource::new("not a url", DEFAULT_REQUEST_TIMEOUT)
        .err()
        .expect("invalid url");
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[tokio::test]
async fn static_source_reports_unknown_publication() {
    let source = StaticContentSource::default()
        .with_reviews(PublicationId::new("p1"), Vec::new());

    assert!(source.reviews(&PublicationId::new("p1")).await.expect("known").is_empty());
    let err = source
        .reviews(&PublicationId::new("p2"))
        .await
        .expect_err("unknown");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(source.replies(&ReviewId::new("any")).await.expect("replies").is_empty());
}
