use super::*;

/// Tests recording a competition by pilot and drone name.
///
/// Expected: 201 with the names echoed back
#[tokio::test]
async fn creates_competition_by_names() {
    let app = app().await;
    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(&app.db)
        .await
        .unwrap();
    let pilot = factory::create_pilot(&app.db).await.unwrap();

    let response = app
        .post(
            "/api/competitions",
            None,
            json!({
                "distance_in_feet": 800,
                "distance_achievement_date": "2021-10-20T05:03:20Z",
                "pilot": pilot.name,
                "drone": drone.name,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["distance_in_feet"], 800);
    assert_eq!(response.body["pilot"], pilot.name.as_str());
    assert_eq!(response.body["drone"], drone.name.as_str());
}

/// Tests unknown related names and a negative distance.
///
/// Expected: 400 naming every offending field
#[tokio::test]
async fn rejects_unknown_names_and_negative_distance() {
    let app = app().await;

    let response = app
        .post(
            "/api/competitions",
            None,
            json!({
                "distance_in_feet": -5,
                "distance_achievement_date": "2021-10-20T05:03:20Z",
                "pilot": "Nobody",
                "drone": "Nothing",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"]["pilot"].is_array());
    assert!(response.body["fields"]["drone"].is_array());
    assert!(response.body["fields"]["distance_in_feet"].is_array());
}

/// Tests the distance range filter with the default ordering.
///
/// Expected: 200 with matching competitions, longest first
#[tokio::test]
async fn filters_by_min_distance() {
    let app = app().await;
    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(&app.db)
        .await
        .unwrap();
    let pilot = factory::create_pilot(&app.db).await.unwrap();

    for distance in [100, 500, 900] {
        factory::competition::CompetitionFactory::new(&app.db, pilot.id, drone.id)
            .distance_in_feet(distance)
            .build()
            .await
            .unwrap();
    }

    let response = app
        .get("/api/competitions?min_distance_in_feet=500", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 2);
    assert_eq!(response.body["results"][0]["distance_in_feet"], 900);
    assert_eq!(response.body["results"][1]["distance_in_feet"], 500);
}
