use super::*;

fn page(limit: u64, offset: u64) -> PageRequest {
    PageRequest { limit, offset }
}

/// Tests filtering on the gender code.
///
/// Expected: Ok with only female pilots
#[tokio::test]
async fn filters_by_gender() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pilot::PilotFactory::new(db).gender("F").build().await?;
    factory::pilot::PilotFactory::new(db).gender("F").build().await?;
    factory::pilot::PilotFactory::new(db).gender("M").build().await?;

    let filter = PilotFilter {
        gender: Some("F".to_string()),
        ..Default::default()
    };
    let (pilots, total) = PilotRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 2);
    assert!(pilots.iter().all(|p| p.gender == Gender::Female));

    Ok(())
}

/// Tests ordering by races count, most races first.
///
/// Expected: Ok with pilots in descending races count order
#[tokio::test]
async fn orders_by_races_count_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for races in [5, 20, 12] {
        factory::pilot::PilotFactory::new(db)
            .races_count(races)
            .build()
            .await?;
    }

    let filter = PilotFilter {
        ordering: vec![OrderBy::desc(PilotOrderField::RacesCount)],
        ..Default::default()
    };
    let (pilots, _) = PilotRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    let counts: Vec<i32> = pilots.iter().map(|p| p.races_count).collect();
    assert_eq!(counts, vec![20, 12, 5]);

    Ok(())
}

/// Tests that each pilot on a page gets only their own competitions.
///
/// Expected: Ok with competitions attached to the right pilot
#[tokio::test]
async fn attaches_competitions_per_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let busy = factory::pilot::PilotFactory::new(db).name("Busy").build().await?;
    factory::pilot::PilotFactory::new(db).name("Idle").build().await?;

    factory::create_competition(db, busy.id, drone.id).await?;
    factory::create_competition(db, busy.id, drone.id).await?;

    let (pilots, _) = PilotRepository::new(db)
        .get_paginated(&PilotFilter::default(), page(10, 0))
        .await?;

    assert_eq!(pilots[0].name, "Busy");
    assert_eq!(pilots[0].competitions.len(), 2);
    assert_eq!(pilots[1].name, "Idle");
    assert!(pilots[1].competitions.is_empty());

    Ok(())
}
