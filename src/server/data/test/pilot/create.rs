use super::*;

/// Tests creating a pilot.
///
/// Expected: Ok with the gender stored as its one-letter code and no competitions
#[tokio::test]
async fn creates_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = PilotRepository::new(db)
        .create(PilotChanges {
            name: "Penelope".to_string(),
            gender: Gender::Female,
            races_count: 3,
        })
        .await?;

    assert_eq!(pilot.name, "Penelope");
    assert_eq!(pilot.gender, Gender::Female);
    assert_eq!(pilot.races_count, 3);
    assert!(pilot.competitions.is_empty());

    let db_pilot = entity::prelude::Pilot::find_by_id(pilot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_pilot.gender, "F");

    Ok(())
}
