use super::*;

fn toy_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Talks",
        "toy_category": "Action figures",
        "release_date": "2016-10-02T01:11:00Z",
    })
}

/// Tests the toy CRUD cycle.
///
/// Expected: 201, listed as a plain array, 200 on replace, 204 on delete, then 404
#[tokio::test]
async fn toy_crud_cycle() {
    let app = app().await;

    let created = app.post("/api/toys", None, toy_body("Snoopy")).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["was_included_in_home"], false);
    let uri = format!("/api/toys/{}", created.body["pk"]);

    let listed = app.get("/api/toys", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let mut replacement = toy_body("Snoopy talking");
    replacement["was_included_in_home"] = json!(true);
    let replaced = app.send(Method::PUT, &uri, None, Some(replacement)).await;
    assert_eq!(replaced.status, StatusCode::OK);
    assert_eq!(replaced.body["name"], "Snoopy talking");
    assert_eq!(replaced.body["created"], created.body["created"]);

    let deleted = app.send(Method::DELETE, &uri, None, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    assert_eq!(app.get(&uri, None).await.status, StatusCode::NOT_FOUND);
}

/// Tests toy field validation.
///
/// Expected: 400 for a blank name
#[tokio::test]
async fn rejects_blank_name() {
    let app = app().await;

    let response = app.post("/api/toys", None, toy_body("")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"]["name"].is_array());
}

/// Tests that toys do not support partial updates.
///
/// Expected: 405
#[tokio::test]
async fn patch_is_not_allowed() {
    let app = app().await;
    let toy = factory::create_toy(&app.db).await.unwrap();

    let response = app
        .send(
            Method::PATCH,
            &format!("/api/toys/{}", toy.id),
            None,
            Some(json!({ "name": "Kite" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
