use super::*;

/// Tests grouping drones by owner.
///
/// Expected: Ok with each owner mapped to their own drones, owners without drones absent
#[tokio::test]
async fn groups_drones_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    factory::create_drone(db, category.id, alice.id).await?;
    factory::create_drone(db, category.id, alice.id).await?;
    let bobs = factory::create_drone(db, category.id, bob.id).await?;

    let grouped = DroneRepository::new(db)
        .get_by_owner_ids(&[alice.id, bob.id, carol.id])
        .await?;

    assert_eq!(grouped.get(&alice.id).map(Vec::len), Some(2));
    assert_eq!(grouped[&bob.id][0].id, bobs.id);
    assert!(!grouped.contains_key(&carol.id));

    Ok(())
}

/// Tests the empty input shortcut.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grouped = DroneRepository::new(db).get_by_owner_ids(&[]).await?;

    assert!(grouped.is_empty());

    Ok(())
}
