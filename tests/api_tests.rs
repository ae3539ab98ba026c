//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

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
async fn test_list_equipment() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_equipment() {
    let client = Client::new();

    // Create equipment
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Test Press",
            "serial_number": "TEST-PRESS-0001",
            "category": "Machinery",
            "department": "Production",
            "company": "GearKeep Inc",
            "technician": "Alice",
            "team": "Mech"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let equipment_id = body["id"].as_i64().expect("No equipment ID");

    // Delete equipment
    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_request_lifecycle() {
    let client = Client::new();

    // Create a request
    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Integration test request",
            "maintenance_for": "Equipment",
            "equipment": "Test Press",
            "maintenance_type": "Corrective",
            "priority": 2
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let request_id = body["id"].as_i64().expect("No request ID");
    assert_eq!(body["stage"], "New");

    // Move it through the board
    let response = client
        .put(format!("{}/requests/{}/stage", BASE_URL, request_id))
        .json(&json!({ "stage": "In Progress" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["stage"], "In Progress");

    // Delete it
    let response = client
        .delete(format!("{}/requests/{}", BASE_URL, request_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // Second delete is a 404
    let response = client
        .delete(format!("{}/requests/{}", BASE_URL, request_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_request_requires_subject() {
    let client = Client::new();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "",
            "maintenance_for": "Equipment",
            "equipment": "Test Press",
            "maintenance_type": "Corrective"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_board() {
    let client = Client::new();

    let response = client
        .get(format!("{}/requests/board", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let columns = body.as_array().expect("Board is not an array");
    assert_eq!(columns.len(), 4);
    assert_eq!(columns[0]["stage"], "New");
    assert_eq!(columns[3]["stage"], "Scrap");
}

#[tokio::test]
#[ignore]
async fn test_get_metrics() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reporting/metrics", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_requests"].is_number());
    assert!(body["avg_resolution_days"].is_number());
    assert!(body["compliance_rate"].is_number());
    assert!(body["critical_pending"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_get_charts() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reporting/charts", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"].as_array().unwrap().len(), 4);
    assert_eq!(body["priority"].as_array().unwrap().len(), 3);
    assert!(body["workload"].is_array());
    assert!(body["trend"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_team_member_roundtrip() {
    let client = Client::new();

    // Create a team
    let response = client
        .post(format!("{}/teams", BASE_URL))
        .json(&json!({
            "name": "Integration Crew",
            "members": ["Alice"],
            "specialization": "General Maintenance",
            "company": "GearKeep Inc"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let team_id = body["id"].as_i64().expect("No team ID");

    // Add a member
    let response = client
        .post(format!("{}/teams/{}/members", BASE_URL, team_id))
        .json(&json!({ "name": "Bob" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["members"], json!(["Alice", "Bob"]));

    // Duplicate member is rejected
    let response = client
        .post(format!("{}/teams/{}/members", BASE_URL, team_id))
        .json(&json!({ "name": "Bob" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Cleanup
    let _ = client
        .delete(format!("{}/teams/{}", BASE_URL, team_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_autofill_team() {
    let client = Client::new();

    let response = client
        .get(format!("{}/requests/autofill/team/Unknown%20Team", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["team"], "Unknown Team");
    assert_eq!(body["technician"], "");
}
