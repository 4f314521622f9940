use super::*;

/// Tests creating a drone for an owner.
///
/// Verifies that the returned drone carries the category name and the owner's username.
///
/// Expected: Ok with drone created and names resolved
#[tokio::test]
async fn creates_drone_with_resolved_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let category = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;

    let drone = DroneRepository::new(db)
        .create(
            DroneChanges {
                name: "Atom".to_string(),
                drone_category_id: category.id,
                manufacturing_date: Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap(),
                has_it_competed: false,
            },
            owner.id,
        )
        .await?;

    assert_eq!(drone.name, "Atom");
    assert_eq!(drone.owner_id, owner.id);
    assert_eq!(drone.owner, "alice");
    assert_eq!(drone.drone_category, "Quadcopter");

    let db_drone = entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_drone.owner_id, owner.id);

    Ok(())
}

/// Tests creating a drone in a category that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = DroneRepository::new(db)
        .create(
            DroneChanges {
                name: "Orphan".to_string(),
                drone_category_id: 999,
                manufacturing_date: Utc::now(),
                has_it_competed: false,
            },
            owner.id,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
