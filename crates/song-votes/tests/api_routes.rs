//! HTTP route tests against the in-memory storage gateway

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

use song_votes::{
    config::Config,
    models::{Recommendation, RecommendationCreateRequest},
    repositories::InMemoryRecommendationRepository,
    services::ScoringService,
    web::{AppState, create_router},
};

fn test_server_with(repo: InMemoryRecommendationRepository, test_routes: bool) -> TestServer {
    let mut config = Config::default();
    config.features.test_routes = test_routes;
    let service = ScoringService::new(Arc::new(repo));
    let app = create_router(AppState::new(Arc::new(service), config));
    TestServer::new(app).unwrap()
}

fn test_server() -> TestServer {
    test_server_with(InMemoryRecommendationRepository::new(), true)
}

fn song(name: &str) -> Value {
    json!({
        "name": name,
        "link": format!("https://www.youtube.com/watch?v={}", name.len()),
    })
}

async fn seed(repo: &InMemoryRecommendationRepository, name: &str, score: i32) -> Recommendation {
    repo.insert_with_score(
        RecommendationCreateRequest::new(name, format!("https://example.com/{name}")),
        score,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_create_returns_created_entity() {
    let server = test_server();

    let response = server.post("/recommendations").json(&song("Gilsons - Várias Queixas")).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Recommendation = response.json();
    assert_eq!(body.name, "Gilsons - Várias Queixas");
    assert_eq!(body.score, 0);
}

#[tokio::test]
async fn test_create_duplicate_name_is_unprocessable() {
    let server = test_server();
    server.post("/recommendations").json(&song("same")).await;

    let response = server.post("/recommendations").json(&song("same")).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Recommendations names must be unique");
}

#[tokio::test]
async fn test_create_invalid_body_is_unprocessable() {
    let server = test_server();

    let missing_link = server.post("/recommendations").json(&json!({ "name": "x" })).await;
    assert_eq!(missing_link.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let bad_link = server
        .post("/recommendations")
        .json(&json!({ "name": "x", "link": "youtube" }))
        .await;
    assert_eq!(bad_link.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_votes_update_score() {
    let repo = InMemoryRecommendationRepository::new();
    let created = seed(&repo, "song", 0).await;
    let server = test_server_with(repo, false);

    let upvoted = server
        .post(&format!("/recommendations/{}/upvote", created.id))
        .await;
    assert_eq!(upvoted.status_code(), StatusCode::OK);
    assert_eq!(upvoted.json::<Recommendation>().score, 1);

    let downvoted = server
        .post(&format!("/recommendations/{}/downvote", created.id))
        .await;
    assert_eq!(downvoted.status_code(), StatusCode::OK);
    let body: Value = downvoted.json();
    assert_eq!(body["outcome"], "updated");
    assert_eq!(body["score"], 0);
}

#[tokio::test]
async fn test_downvote_below_threshold_evicts() {
    let repo = InMemoryRecommendationRepository::new();
    let created = seed(&repo, "unpopular", -5).await;
    let server = test_server_with(repo, false);

    let response = server
        .post(&format!("/recommendations/{}/downvote", created.id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "outcome": "evicted", "id": created.id }));

    let lookup = server.get(&format!("/recommendations/{}", created.id)).await;
    assert_eq!(lookup.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_votes_on_missing_id_are_not_found() {
    let server = test_server();

    for path in [
        "/recommendations/999/upvote",
        "/recommendations/999/downvote",
    ] {
        let response = server.post(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{path}");
    }
    let response = server.get("/recommendations/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_defaults_to_ten_most_recent() {
    let repo = InMemoryRecommendationRepository::new();
    for i in 0..12 {
        seed(&repo, &format!("song-{i:02}"), 0).await;
    }
    let server = test_server_with(repo, false);

    let recent: Vec<Recommendation> = server.get("/recommendations").await.json();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].name, "song-11");

    let limited: Vec<Recommendation> = server
        .get("/recommendations")
        .add_query_param("limit", 3)
        .await
        .json();
    assert_eq!(limited.len(), 3);

    let all: Vec<Recommendation> = server
        .get("/recommendations")
        .add_query_param("all", true)
        .await
        .json();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].name, "song-00");
}

#[tokio::test]
async fn test_top_orders_by_score() {
    let repo = InMemoryRecommendationRepository::new();
    seed(&repo, "five", 5).await;
    seed(&repo, "fifty", 50).await;
    seed(&repo, "twenty", 20).await;
    let server = test_server_with(repo, false);

    let response = server.get("/recommendations/top/2").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let scores: Vec<i32> = response
        .json::<Vec<Recommendation>>()
        .into_iter()
        .map(|r| r.score)
        .collect();
    assert_eq!(scores, vec![50, 20]);
}

#[tokio::test]
async fn test_top_rejects_bad_amounts() {
    let server = test_server();

    let non_numeric = server.get("/recommendations/top/many").await;
    assert_eq!(non_numeric.status_code(), StatusCode::BAD_REQUEST);

    let zero = server.get("/recommendations/top/0").await;
    assert_eq!(zero.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let negative = server.get("/recommendations/top/-2").await;
    assert_eq!(negative.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_random_on_empty_store_is_not_found() {
    let server = test_server();

    let response = server.get("/recommendations/random").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_returns_a_member() {
    let repo = InMemoryRecommendationRepository::new();
    let only = seed(&repo, "only", 3).await;
    let server = test_server_with(repo, false);

    let response = server.get("/recommendations/random").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Recommendation>(), only);
}

#[tokio::test]
async fn test_truncate_then_health_reports_empty() {
    let repo = InMemoryRecommendationRepository::new();
    seed(&repo, "a", 0).await;
    seed(&repo, "b", 0).await;
    let server = test_server_with(repo, true);

    let health: Value = server.get("/health").await.json();
    assert_eq!(health, json!({ "status": "healthy", "recommendations": 2 }));

    let response = server.post("/e2e/truncate").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["recommendations"], 0);
}

#[tokio::test]
async fn test_truncate_is_hidden_without_feature() {
    let repo = InMemoryRecommendationRepository::new();
    seed(&repo, "kept", 0).await;
    let server = test_server_with(repo, false);

    let response = server.post("/e2e/truncate").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["recommendations"], 1);
}

#[tokio::test]
async fn test_malformed_ids_use_error_envelope() {
    let server = test_server();

    let responses = [
        server.get("/recommendations/abc").await,
        server.get("/recommendations/99999999999").await,
        server.post("/recommendations/abc/upvote").await,
        server.post("/recommendations/abc/downvote").await,
    ];

    for response in responses {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["details"]["field"], "id");
        assert!(body["timestamp"].is_string());
    }
}
