use super::*;

/// Tests that deleting a drone removes its competitions.
///
/// Expected: Ok with the competition gone and the pilot kept
#[tokio::test]
async fn drone_deletion_cascades_to_competitions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, drone, competition) =
        factory::helpers::create_competition_with_dependencies(db).await?;

    entity::prelude::Drone::delete_by_id(drone.id).exec(db).await?;

    assert!(CompetitionRepository::new(db)
        .get_by_id(competition.id)
        .await?
        .is_none());
    assert!(entity::prelude::Pilot::find_by_id(pilot.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a single competition.
///
/// Expected: Ok with the competition gone
#[tokio::test]
async fn deletes_competition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, competition) = factory::helpers::create_competition_with_dependencies(db).await?;

    let repo = CompetitionRepository::new(db);
    repo.delete(competition.id).await?;

    assert!(repo.get_by_id(competition.id).await?.is_none());

    Ok(())
}
