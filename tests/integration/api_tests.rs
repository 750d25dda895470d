//! API integration tests against a running server
//!
//! Start the server, then run: `cargo test -- --ignored`
//! `LIBRARY_API_URL` overrides the default base URL.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("LIBRARY_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Create an author through the API and return its generated id
async fn create_author(client: &Client, nick_name: &str) -> String {
    let response = client
        .post(format!("{}/author", base_url()))
        .json(&json!({
            "full_name": "John Doe",
            "nick_name": nick_name,
            "specialization": "Writer"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let authors: Value = client
        .get(format!("{}/authors", base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    authors
        .as_array()
        .expect("authors list")
        .iter()
        .find(|a| a["nick_name"] == nick_name)
        .and_then(|a| a["id"].as_str())
        .expect("created author listed with an id")
        .to_string()
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/healthz", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "OK");
}

#[tokio::test]
#[ignore]
async fn test_create_author_then_list() {
    let client = Client::new();
    let nick_name = unique("johndoe");

    let id = create_author(&client, &nick_name).await;
    assert!(!id.is_empty());

    let response = client
        .delete(format!("{}/author/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_delete_author_with_books() {
    let client = Client::new();
    let author_id = create_author(&client, &unique("herbert")).await;

    let response = client
        .post(format!("{}/book", base_url()))
        .json(&json!({
            "authors_id": author_id,
            "title": "Dune",
            "genre": "Science fiction",
            "isbn": "978-0441172719"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_str().expect("No book ID").to_string();

    let response = client
        .delete(format!("{}/author/{}", base_url(), author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "message": "author has related recordings and cannot be deleted" })
    );

    // Cleanup
    let _ = client
        .delete(format!("{}/book/{}", base_url(), book_id))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/author/{}", base_url(), author_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book() {
    let client = Client::new();

    let response = client
        .patch(format!("{}/book/{}", base_url(), uuid::Uuid::new_v4()))
        .json(&json!({ "title": "Nothing" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "book not found" }));
}

#[tokio::test]
#[ignore]
async fn test_member_without_loans() {
    let client = Client::new();

    let response = client
        .get(format!("{}/member/{}/borrowed", base_url(), uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "no books found for this member" }));
}

#[tokio::test]
#[ignore]
async fn test_malformed_body() {
    let client = Client::new();

    let response = client
        .post(format!("{}/member", base_url()))
        .header("content-type", "application/json")
        .body("{\"full_name\":")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "member creation failed" }));
}
