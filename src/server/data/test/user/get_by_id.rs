use super::*;

/// Tests that a user is returned with the drones they own.
///
/// Expected: Ok with owned drones in name order and other users' drones excluded
#[tokio::test]
async fn includes_owned_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    factory::drone::DroneFactory::new(db, category.id, owner.id)
        .name("Wasp")
        .build()
        .await?;
    factory::drone::DroneFactory::new(db, category.id, owner.id)
        .name("Atom")
        .build()
        .await?;
    factory::create_drone(db, category.id, other.id).await?;

    let user = UserRepository::new(db).get_by_id(owner.id).await?.unwrap();

    let names: Vec<&str> = user.drones.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Atom", "Wasp"]);

    Ok(())
}

/// Tests the username uniqueness check excluding the user being renamed.
///
/// Expected: Ok(false) for the user's own name, Ok(true) for another user's name
#[tokio::test]
async fn username_exists_ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.username_exists("alice", Some(alice.id)).await?);
    assert!(repo.username_exists("bob", Some(alice.id)).await?);
    assert!(repo.username_exists("alice", None).await?);

    Ok(())
}
