//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const ADMIN_LOGIN: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Unique suffix so fixtures don't collide across test runs
fn unique_tag() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos()
}

async fn create_author(client: &Client, tag: u128) -> i64 {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({
            "first_name": "Jules",
            "last_name": format!("Verne-{}", tag),
            "birth_date": "1828-02-08",
            "nationality": "FRA"
        }))
        .send()
        .await
        .expect("Failed to create author");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse author");
    body["id"].as_i64().expect("No author ID")
}

async fn create_book(client: &Client, author_id: i64, tag: u128) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({
            "title": format!("Twenty Thousand Leagues {}", tag),
            "author_id": author_id,
            "published_date": "1870-06-20",
            "category": "Adventure"
        }))
        .send()
        .await
        .expect("Failed to create book");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse book");
    body["id"].as_i64().expect("No book ID")
}

async fn create_user(client: &Client, tag: u128) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Reader",
            "email": format!("ada.reader+{}@example.org", tag)
        }))
        .send()
        .await
        .expect("Failed to create user");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse user");
    body["id"].as_i64().expect("No user ID")
}

async fn create_stock(client: &Client, book_id: i64, quantity: i64) {
    let response = client
        .post(format!("{}/stocks", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({
            "book_id": book_id,
            "stock_quantity": quantity
        }))
        .send()
        .await
        .expect("Failed to create stock");

    assert_eq!(response.status(), 201);
}

async fn stock_quantity(client: &Client, book_id: i64) -> i64 {
    let response = client
        .get(format!("{}/stocks/{}", BASE_URL, book_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to get stock");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse stock");
    body["stock_quantity"].as_i64().expect("No stock quantity")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_wrong_credentials() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some("wrong"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

/// End-to-end loan scenario: reserve the only copy, fail to reserve it
/// again, return it, and watch the stock come back.
#[tokio::test]
#[ignore]
async fn test_reservation_round_trip() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;
    let user_id = create_user(&client, tag).await;
    create_stock(&client, book_id, 1).await;

    // Reserve the only copy
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to create reservation");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse reservation");
    let reservation_id = body["id"].as_i64().expect("No reservation ID");
    assert_eq!(body["status"], "confirmed");
    assert!(body["return_date"].is_null());
    assert_eq!(stock_quantity(&client, book_id).await, 0);

    // Same user cannot borrow the same book twice
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send second reservation");

    assert_eq!(response.status(), 400);
    assert_eq!(stock_quantity(&client, book_id).await, 0);

    // Return the book
    let response = client
        .put(format!("{}/reservations/{}", BASE_URL, reservation_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to return reservation");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse return");
    assert_eq!(body["status"], "returned");
    assert!(body["return_date"].is_string());
    assert_eq!(stock_quantity(&client, book_id).await, 1);

    // A closed loan cannot be returned again; the stock stays put
    let response = client
        .put(format!("{}/reservations/{}", BASE_URL, reservation_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send duplicate return");

    assert_eq!(response.status(), 400);
    assert_eq!(stock_quantity(&client, book_id).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_reserve_exhausted_stock() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;
    let user_id = create_user(&client, tag).await;
    create_stock(&client, book_id, 1).await;

    // Drain the stock with another user's reservation
    let other_user = create_user(&client, tag + 1).await;
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": other_user }))
        .send()
        .await
        .expect("Failed to create reservation");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send reservation");

    assert_eq!(response.status(), 400);
    assert_eq!(stock_quantity(&client, book_id).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_reserve_unknown_user_is_not_found() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;
    create_stock(&client, book_id, 1).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": 99999999 }))
        .send()
        .await
        .expect("Failed to send reservation");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_return_mismatch_leaves_stock_unchanged() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;
    let user_id = create_user(&client, tag).await;
    create_stock(&client, book_id, 2).await;

    // No reservation with this triple exists
    let response = client
        .put(format!("{}/reservations/{}", BASE_URL, 99999999))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send return");

    assert_eq!(response.status(), 400);
    assert_eq!(stock_quantity(&client, book_id).await, 2);
}

#[tokio::test]
#[ignore]
async fn test_restock_adds_quantity() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;
    create_stock(&client, book_id, 3).await;

    let response = client
        .put(format!("{}/stocks/{}", BASE_URL, book_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "stock_quantity": 4 }))
        .send()
        .await
        .expect("Failed to send restock");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse stock");
    assert_eq!(body["stock_quantity"], 7);

    // Zero and negative additions are rejected
    let response = client
        .put(format!("{}/stocks/{}", BASE_URL, book_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .json(&json!({ "stock_quantity": 0 }))
        .send()
        .await
        .expect("Failed to send restock");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_delete_nonexistent_author_is_noop() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, 99999999))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_delete_author_blocked_by_stock() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;
    create_stock(&client, book_id, 1).await;

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, author_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(response.status(), 403);

    // Neither the author nor the book was deleted
    let response = client
        .get(format!("{}/authors/{}", BASE_URL, author_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to get author");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to get book");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_delete_author_cascades_to_books() {
    let client = Client::new();
    let tag = unique_tag();

    let author_id = create_author(&client, tag).await;
    let book_id = create_book(&client, author_id, tag).await;

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, author_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to get book");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_reservations_envelope() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reservations?skip=0&limit=10", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to list reservations");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse list");
    assert!(body["reservations"].is_array());
    assert!(body["number_of_reservations"].is_number());
    assert!(body["number_of_pages"].is_number());
    assert!(body["current_page"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_pager_limit_out_of_bounds() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books?skip=0&limit=5000", BASE_URL))
        .basic_auth(ADMIN_LOGIN, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to list books");

    assert_eq!(response.status(), 400);
}
