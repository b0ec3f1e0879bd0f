//! API contract tests for tank-service.
//!
//! Router-level tests exercise the failure paths that never reach MongoDB
//! (the driver connects lazily, so building state needs no live server).
//! The CRUD lifecycle tests run against a real MongoDB and are marked
//! ignored; point MONGODB_URI at an instance and run with `-- --ignored`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tank_service::config::{MongoConfig, SecurityConfig, TankConfig};
use tank_service::services::MongoDb;
use tank_service::startup::{build_router, AppState, Application};
use tower::util::ServiceExt;

fn test_config(port: u16) -> TankConfig {
    TankConfig {
        common: service_core::config::Config { port },
        mongodb: MongoConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
            database: "tank_service_test".to_string(),
        },
        security: SecurityConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

/// Build the router over a lazily-connecting client; no MongoDB required
/// for requests that fail before any store call.
async fn test_router() -> axum::Router {
    let config = test_config(0);
    let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
        .await
        .expect("client construction should not require a live server");
    build_router(AppState { config, db })
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn patch_with_malformed_id_is_a_bad_request() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            "/tank/not-a-hex-id",
            r#"{"location": "lab"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("Invalid tank id"));
}

#[tokio::test]
async fn delete_with_malformed_id_is_a_bad_request() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/tank/zzz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_profile_with_missing_field_is_unprocessable() {
    let app = test_router().await;

    // No role.
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/profile",
            r#"{"username": "marine", "color": "teal"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_profile_with_empty_username_is_unprocessable() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/profile",
            r#"{"username": "", "role": "admin", "color": "teal"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Validation error");
}

#[tokio::test]
async fn create_tank_with_missing_coordinates_is_unprocessable() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/tank",
            r#"{"location": "reef lab"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- Live-MongoDB lifecycle tests -----------------------------------------

struct TestApp {
    address: String,
    client: reqwest::Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let app = Application::build(test_config(0))
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());
        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    async fn create_tank(&self, location: &str, lat: f64, long: f64) -> serde_json::Value {
        let response = self
            .client
            .post(format!("{}/tank", self.address))
            .json(&serde_json::json!({ "location": location, "lat": lat, "long": long }))
            .send()
            .await
            .expect("Failed to create tank");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Tank response was not JSON")
    }

    async fn list_tanks(&self) -> serde_json::Value {
        let response = self
            .client
            .get(format!("{}/tank", self.address))
            .send()
            .await
            .expect("Failed to list tanks");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Listing was not JSON")
    }
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGODB_URI, default mongodb://127.0.0.1:27017)"]
async fn created_profile_appears_in_listing_with_generated_id() {
    let app = TestApp::spawn().await;
    let username = format!("keeper-{}", std::process::id());

    let response = app
        .client
        .post(format!("{}/profile", app.address))
        .json(&serde_json::json!({ "username": username, "role": "admin", "color": "teal" }))
        .send()
        .await
        .expect("Failed to create profile");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.unwrap();

    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(created["username"], username.as_str());
    assert!(created["last_updated"].is_string());

    let listing: serde_json::Value = app
        .client
        .get(format!("{}/profile", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let matching: Vec<_> = listing["profile"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["username"] == username.as_str())
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["id"], id);
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGODB_URI, default mongodb://127.0.0.1:27017)"]
async fn created_tank_round_trips_through_the_listing() {
    let app = TestApp::spawn().await;

    let created = app.create_tank("round-trip reef", 18.01, -76.79).await;
    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(created["location"], "round-trip reef");
    assert_eq!(created["lat"], 18.01);
    assert_eq!(created["long"], -76.79);

    let listing = app.list_tanks().await;
    let found = listing["tanks"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"] == id);
    assert!(found);
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGODB_URI, default mongodb://127.0.0.1:27017)"]
async fn patch_overwrites_omitted_fields_with_null() {
    let app = TestApp::spawn().await;

    let created = app.create_tank("pre-patch", 10.0, 20.0).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .client
        .patch(format!("{}/tank/{}", app.address, id))
        .json(&serde_json::json!({ "location": "post-patch" }))
        .send()
        .await
        .expect("Failed to patch tank");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let updated: serde_json::Value = response.json().await.unwrap();

    assert_eq!(updated["location"], "post-patch");
    // Omitted fields are written as null, not preserved.
    assert!(updated["lat"].is_null());
    assert!(updated["long"].is_null());
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGODB_URI, default mongodb://127.0.0.1:27017)"]
async fn patch_and_delete_of_unknown_id_return_not_found() {
    let app = TestApp::spawn().await;
    let unknown = mongodb::bson::oid::ObjectId::new().to_hex();

    let response = app
        .client
        .patch(format!("{}/tank/{}", app.address, unknown))
        .json(&serde_json::json!({ "location": "nowhere" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Tank not found");

    let response = app
        .client
        .delete(format!("{}/tank/{}", app.address, unknown))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGODB_URI, default mongodb://127.0.0.1:27017)"]
async fn deleted_tank_disappears_from_the_listing() {
    let app = TestApp::spawn().await;

    let created = app.create_tank("doomed", 0.5, 0.5).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .client
        .delete(format!("{}/tank/{}", app.address, id))
        .send()
        .await
        .expect("Failed to delete tank");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.bytes().await.unwrap().is_empty());

    let listing = app.list_tanks().await;
    let still_there = listing["tanks"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"] == id);
    assert!(!still_there);
}
