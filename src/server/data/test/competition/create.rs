use super::*;

/// Tests recording a competition.
///
/// Expected: Ok with pilot and drone names resolved
#[tokio::test]
async fn creates_competition_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let pilot = factory::create_pilot(db).await?;
    let achieved = Utc.with_ymd_and_hms(2021, 10, 20, 5, 3, 20).unwrap();

    let competition = CompetitionRepository::new(db)
        .create(CompetitionChanges {
            distance_in_feet: 800,
            distance_achievement_date: achieved,
            pilot_id: pilot.id,
            drone_id: drone.id,
        })
        .await?;

    assert_eq!(competition.distance_in_feet, 800);
    assert_eq!(competition.distance_achievement_date, achieved);
    assert_eq!(competition.pilot, pilot.name);
    assert_eq!(competition.drone, drone.name);

    Ok(())
}
