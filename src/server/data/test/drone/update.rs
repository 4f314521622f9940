use super::*;

/// Tests that an update rewrites the writable columns and keeps the owner.
///
/// Expected: Ok with new values and the original owner
#[tokio::test]
async fn updates_fields_and_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, drone) = factory::helpers::create_drone_with_dependencies(db).await?;
    let other_category = factory::create_category(db).await?;

    let updated = DroneRepository::new(db)
        .update(
            drone.id,
            DroneChanges {
                name: "Renamed".to_string(),
                drone_category_id: other_category.id,
                manufacturing_date: drone.manufacturing_date,
                has_it_competed: true,
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.drone_category_id, other_category.id);
    assert!(updated.has_it_competed);
    assert_eq!(updated.owner_id, owner.id);
    assert_eq!(updated.inserted_timestamp, drone.inserted_timestamp);

    Ok(())
}

/// Tests updating a drone that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let result = DroneRepository::new(db)
        .update(
            999,
            DroneChanges {
                name: "Ghost".to_string(),
                drone_category_id: category.id,
                manufacturing_date: Utc::now(),
                has_it_competed: false,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
