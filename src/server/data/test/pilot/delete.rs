use super::*;

/// Tests that deleting a pilot removes their competitions.
///
/// Expected: Ok with pilot and competition gone, drone kept
#[tokio::test]
async fn deletes_pilot_and_competitions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, drone, competition) =
        factory::helpers::create_competition_with_dependencies(db).await?;

    PilotRepository::new(db).delete(pilot.id).await?;

    assert!(entity::prelude::Pilot::find_by_id(pilot.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Competition::find_by_id(competition.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
