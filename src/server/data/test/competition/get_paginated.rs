use super::*;

fn page(limit: u64, offset: u64) -> PageRequest {
    PageRequest { limit, offset }
}

/// Tests the distance range filters.
///
/// Expected: Ok with only competitions between 200 and 600 feet, inclusive
#[tokio::test]
async fn filters_by_distance_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let pilot = factory::create_pilot(db).await?;

    for distance in [100, 200, 450, 600, 900] {
        factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
            .distance_in_feet(distance)
            .build()
            .await?;
    }

    let filter = CompetitionFilter {
        min_distance_in_feet: Some(200),
        max_distance_in_feet: Some(600),
        ..Default::default()
    };
    let (competitions, total) = CompetitionRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 3);
    let distances: Vec<i32> = competitions.iter().map(|c| c.distance_in_feet).collect();
    assert_eq!(distances, vec![600, 450, 200]);

    Ok(())
}

/// Tests the achievement date range filters.
///
/// Expected: Ok with only the competition inside the window
#[tokio::test]
async fn filters_by_achievement_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let pilot = factory::create_pilot(db).await?;

    for month in [1, 6, 11] {
        factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
            .distance_achievement_date(Utc.with_ymd_and_hms(2021, month, 1, 0, 0, 0).unwrap())
            .build()
            .await?;
    }

    let filter = CompetitionFilter {
        from_achievement_date: Some(Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()),
        to_achievement_date: Some(Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    let (competitions, total) = CompetitionRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(
        competitions[0].distance_achievement_date,
        Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests filtering by pilot and drone name.
///
/// Expected: Ok with only the competition flown by that pilot with that drone
#[tokio::test]
async fn filters_by_pilot_and_drone_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, category, atom) = factory::helpers::create_drone_with_dependencies(db).await?;
    let wasp = factory::create_drone(db, category.id, owner.id).await?;
    let penelope = factory::create_pilot(db).await?;
    let peter = factory::create_pilot(db).await?;

    let target = factory::create_competition(db, penelope.id, atom.id).await?;
    factory::create_competition(db, penelope.id, wasp.id).await?;
    factory::create_competition(db, peter.id, atom.id).await?;

    let filter = CompetitionFilter {
        pilot_name: Some(penelope.name.clone()),
        drone_name: Some(atom.name.clone()),
        ..Default::default()
    };
    let (competitions, total) = CompetitionRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(competitions[0].id, target.id);

    Ok(())
}

/// Tests a drone name filter that matches no drone.
///
/// Expected: Ok with no competitions
#[tokio::test]
async fn unknown_drone_name_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_competition_with_dependencies(db).await?;

    let filter = CompetitionFilter {
        drone_name: Some("Nonexistent".to_string()),
        ..Default::default()
    };
    let (competitions, total) = CompetitionRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 0);
    assert!(competitions.is_empty());

    Ok(())
}

/// Tests that an explicit ordering replaces the default distance ordering.
///
/// Expected: Ok with competitions oldest first
#[tokio::test]
async fn orders_by_achievement_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_competition_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let pilot = factory::create_pilot(db).await?;

    for (distance, year) in [(900, 2022), (100, 2019), (500, 2020)] {
        factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
            .distance_in_feet(distance)
            .distance_achievement_date(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap())
            .build()
            .await?;
    }

    let filter = CompetitionFilter {
        ordering: vec![OrderBy::asc(CompetitionOrderField::DistanceAchievementDate)],
        ..Default::default()
    };
    let (competitions, _) = CompetitionRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    let distances: Vec<i32> = competitions.iter().map(|c| c.distance_in_feet).collect();
    assert_eq!(distances, vec![100, 500, 900]);

    Ok(())
}
