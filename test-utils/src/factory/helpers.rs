//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities together
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with an API token.
///
/// # Returns
/// - `Ok((user, token))` - Created user and its token
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_token(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::token::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let token = crate::factory::token::create_token(db, user.id).await?;

    Ok((user, token))
}

/// Creates a drone with all of its dependencies.
///
/// Creates, in order:
/// 1. User (drone owner) and the owner's token
/// 2. Drone category
/// 3. Drone
///
/// # Returns
/// - `Ok((owner, token, category, drone))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_drone_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::token::Model,
        entity::drone_category::Model,
        entity::drone::Model,
    ),
    DbErr,
> {
    let (owner, token) = create_user_with_token(db).await?;
    let category = crate::factory::drone_category::create_category(db).await?;
    let drone = crate::factory::drone::create_drone(db, category.id, owner.id).await?;

    Ok((owner, token, category, drone))
}

/// Creates a competition with a fresh pilot and drone.
///
/// # Returns
/// - `Ok((pilot, drone, competition))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_competition_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::pilot::Model,
        entity::drone::Model,
        entity::competition::Model,
    ),
    DbErr,
> {
    let (_, _, _, drone) = create_drone_with_dependencies(db).await?;
    let pilot = crate::factory::pilot::create_pilot(db).await?;
    let competition =
        crate::factory::competition::create_competition(db, pilot.id, drone.id).await?;

    Ok((pilot, drone, competition))
}
