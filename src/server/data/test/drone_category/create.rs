use super::*;

/// Tests creating a drone category.
///
/// Verifies that the repository inserts the category and returns it with an empty
/// drone list.
///
/// Expected: Ok with category created
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    let category = repo.create("Quadcopter".to_string()).await?;

    assert_eq!(category.name, "Quadcopter");
    assert!(category.drone_ids.is_empty());

    let db_category = entity::prelude::DroneCategory::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());

    Ok(())
}

/// Tests creating a category with a name that is already taken.
///
/// Expected: Err from the unique index on name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    repo.create("Octocopter".to_string()).await?;
    let result = repo.create("Octocopter".to_string()).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a fetched category lists its drones ordered by name.
///
/// Expected: Ok with drone ids in name order
#[tokio::test]
async fn get_by_id_includes_drone_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let zephyr = factory::drone::DroneFactory::new(db, category.id, owner.id)
        .name("Zephyr")
        .build()
        .await?;
    let atom = factory::drone::DroneFactory::new(db, category.id, owner.id)
        .name("Atom")
        .build()
        .await?;

    let fetched = DroneCategoryRepository::new(db)
        .get_by_id(category.id)
        .await?
        .unwrap();

    assert_eq!(fetched.drone_ids, vec![atom.id, zephyr.id]);

    Ok(())
}
