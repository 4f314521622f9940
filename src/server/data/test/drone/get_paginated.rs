use super::*;

fn page(limit: u64, offset: u64) -> PageRequest {
    PageRequest { limit, offset }
}

/// Tests the exact field filters.
///
/// Creates drones across two categories with different `has_it_competed` flags and
/// filters on both.
///
/// Expected: Ok with only the matching drone
#[tokio::test]
async fn filters_by_category_and_competed_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let quad = factory::create_category(db).await?;
    let hexa = factory::create_category(db).await?;

    let target = factory::drone::DroneFactory::new(db, quad.id, owner.id)
        .has_it_competed(true)
        .build()
        .await?;
    factory::drone::DroneFactory::new(db, quad.id, owner.id)
        .has_it_competed(false)
        .build()
        .await?;
    factory::drone::DroneFactory::new(db, hexa.id, owner.id)
        .has_it_competed(true)
        .build()
        .await?;

    let filter = DroneFilter {
        drone_category_id: Some(quad.id),
        has_it_competed: Some(true),
        ..Default::default()
    };
    let (drones, total) = DroneRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(drones[0].id, target.id);

    Ok(())
}

/// Tests ordering by manufacturing date, newest first.
///
/// Expected: Ok with drones in descending manufacturing date order
#[tokio::test]
async fn orders_by_manufacturing_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    for (name, year) in [("Old", 2015), ("New", 2022), ("Mid", 2018)] {
        factory::drone::DroneFactory::new(db, category.id, owner.id)
            .name(name)
            .manufacturing_date(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap())
            .build()
            .await?;
    }

    let filter = DroneFilter {
        ordering: vec![OrderBy::desc(DroneOrderField::ManufacturingDate)],
        ..Default::default()
    };
    let (drones, _) = DroneRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    let names: Vec<&str> = drones.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Mid", "Old"]);

    Ok(())
}

/// Tests the default ordering by name.
///
/// Expected: Ok with drones in ascending name order
#[tokio::test]
async fn orders_by_name_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    for name in ["Wasp", "Atom", "Kestrel"] {
        factory::drone::DroneFactory::new(db, category.id, owner.id)
            .name(name)
            .build()
            .await?;
    }

    let (drones, _) = DroneRepository::new(db)
        .get_paginated(&DroneFilter::default(), page(10, 0))
        .await?;

    let names: Vec<&str> = drones.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Atom", "Kestrel", "Wasp"]);

    Ok(())
}
