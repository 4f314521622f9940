use super::*;

/// Tests the API root links.
///
/// Expected: 200 with absolute collection urls
#[tokio::test]
async fn api_root_lists_collections() {
    let app = app().await;

    let response = app.get("/api", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["drone-categories"],
        "http://testserver/api/drone-categories"
    );
    assert_eq!(response.body["toys"], "http://testserver/api/toys");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

/// Tests that the OpenAPI document lists the drone routes.
///
/// Expected: 200 with `/api/drones/{id}` among the paths
#[tokio::test]
async fn serves_openapi_document() {
    let app = app().await;

    let response = app.get("/api/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/api/drones/{id}"].is_object());
}
