use super::*;

/// Tests that a pilot is returned with competitions longest distance first.
///
/// Expected: Ok with competitions ordered by distance descending
#[tokio::test]
async fn includes_competitions_by_distance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let pilot = factory::create_pilot(db).await?;

    for distance in [120, 800, 450] {
        factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
            .distance_in_feet(distance)
            .build()
            .await?;
    }

    let fetched = PilotRepository::new(db).get_by_id(pilot.id).await?.unwrap();

    let distances: Vec<i32> = fetched
        .competitions
        .iter()
        .map(|c| c.distance_in_feet)
        .collect();
    assert_eq!(distances, vec![800, 450, 120]);
    assert!(fetched.competitions.iter().all(|c| c.drone == drone.name));

    Ok(())
}

/// Tests fetching a pilot that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PilotRepository::new(db).get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
