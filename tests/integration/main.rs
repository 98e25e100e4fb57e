//! End-to-end tests for the win record HTTP API.
//!
//! Each test builds a fresh router (and therefore a fresh store) and drives
//! it in-process with `tower::ServiceExt`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use futures::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use win_record::api::{create_router, AppState};
use win_record::WinRecord;

/// Send a request and return the status and decoded JSON body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_record(app: &Router) -> Value {
    let request = Request::builder()
        .uri("/api/win-record")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn post_body(app: &Router, body: String) -> Value {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/update-win-record")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn post_winner(app: &Router, winner: &str) -> Value {
    post_body(app, json!({ "winner": winner }).to_string()).await
}

#[tokio::test]
async fn initial_record_is_zero() {
    let app = create_router(AppState::new());

    assert_eq!(
        get_record(&app).await,
        json!({"playerWins": 0, "aiWins": 0, "ties": 0})
    );
}

#[tokio::test]
async fn player_win_is_counted() {
    let app = create_router(AppState::new());

    post_winner(&app, "Player").await;

    assert_eq!(
        get_record(&app).await,
        json!({"playerWins": 1, "aiWins": 0, "ties": 0})
    );
}

#[tokio::test]
async fn three_ai_wins() {
    let app = create_router(AppState::new());

    for _ in 0..3 {
        post_winner(&app, "AI").await;
    }

    assert_eq!(get_record(&app).await["aiWins"], json!(3));
}

#[tokio::test]
async fn unrecognized_winner_is_ignored() {
    let app = create_router(AppState::new());

    post_winner(&app, "Tie").await;
    let echoed = post_winner(&app, "Nobody").await;

    let expected = json!({"playerWins": 0, "aiWins": 0, "ties": 1});
    assert_eq!(echoed, expected);
    assert_eq!(get_record(&app).await, expected);
}

#[tokio::test]
async fn missing_winner_returns_current_counts() {
    let app = create_router(AppState::new());
    post_winner(&app, "Player").await;

    let echoed = post_body(&app, json!({"loser": "AI"}).to_string()).await;

    assert_eq!(echoed, json!({"playerWins": 1, "aiWins": 0, "ties": 0}));
}

#[tokio::test]
async fn total_counts_only_recognized_winners() {
    let app = create_router(AppState::new());
    let labels = [
        "Player", "AI", "other", "Tie", "tie", "Player", "", "AI", "PLAYER", "Tie", "Player",
    ];

    for label in labels {
        post_winner(&app, label).await;
    }

    let record: WinRecord = serde_json::from_value(get_record(&app).await).unwrap();
    let recognized = labels
        .iter()
        .filter(|l| matches!(**l, "Player" | "AI" | "Tie"))
        .count() as u64;

    assert_eq!(record.total(), recognized);
    assert_eq!(
        record,
        WinRecord {
            player_wins: 3,
            ai_wins: 2,
            ties: 2
        }
    );
}

#[tokio::test]
async fn every_short_sequence_counts_only_recognized_winners() {
    const LABELS: [&str; 4] = ["Player", "AI", "Tie", "Nobody"];
    const MAX_LEN: u32 = 5;

    for len in 0..=MAX_LEN {
        for index in 0..LABELS.len().pow(len) {
            // Decode `index` as a base-4 number, one digit per update.
            let sequence: Vec<&str> = (0..len)
                .map(|digit| LABELS[(index / LABELS.len().pow(digit)) % LABELS.len()])
                .collect();

            let app = create_router(AppState::new());
            for label in &sequence {
                post_winner(&app, label).await;
            }

            let record: WinRecord = serde_json::from_value(get_record(&app).await).unwrap();
            let count = |wanted: &str| sequence.iter().filter(|l| **l == wanted).count() as u64;

            assert_eq!(
                record,
                WinRecord {
                    player_wins: count("Player"),
                    ai_wins: count("AI"),
                    ties: count("Tie")
                },
                "sequence {sequence:?}"
            );
            assert_eq!(
                record.total(),
                sequence.len() as u64 - count("Nobody"),
                "sequence {sequence:?}"
            );
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_updates_are_not_lost() {
    let app = create_router(AppState::new());

    let requests = (0..100).map(|_| {
        let app = app.clone();
        tokio::spawn(async move { post_winner(&app, "Player").await })
    });
    for result in join_all(requests).await {
        result.unwrap();
    }

    assert_eq!(
        get_record(&app).await,
        json!({"playerWins": 100, "aiWins": 0, "ties": 0})
    );
}
