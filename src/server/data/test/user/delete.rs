use super::*;

/// Tests that deleting a user removes their token and drones.
///
/// Expected: Ok with user, token and drone gone, category kept
#[tokio::test]
async fn deletes_user_token_and_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, token, category, drone) =
        factory::helpers::create_drone_with_dependencies(db).await?;

    UserRepository::new(db).delete(owner.id).await?;

    assert!(entity::prelude::User::find_by_id(owner.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Token::find_by_id(token.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::DroneCategory::find_by_id(category.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
