use super::*;

/// Tests that deleting a category removes its drones with it.
///
/// Expected: Ok with category and drone gone
#[tokio::test]
async fn deletes_category_and_its_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, category, drone) =
        factory::helpers::create_drone_with_dependencies(db).await?;

    DroneCategoryRepository::new(db).delete(category.id).await?;

    assert!(entity::prelude::DroneCategory::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok, nothing to delete
#[tokio::test]
async fn delete_missing_category_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DroneCategoryRepository::new(db).delete(999).await;

    assert!(result.is_ok());

    Ok(())
}
