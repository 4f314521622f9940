use super::*;

/// Tests that replacing a key retires the old one.
///
/// Expected: Ok with the new key resolving and the old key not resolving
#[tokio::test]
async fn old_key_stops_resolving() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_user_with_token(db).await?;
    let new_key = "a".repeat(40);

    let repo = TokenRepository::new(db);
    let replaced = repo.replace(user.id, new_key.clone()).await?;

    assert_eq!(replaced.id, token.id);
    assert!(repo.find_identity(&token.key).await?.is_none());
    assert_eq!(
        repo.find_identity(&new_key).await?.map(|i| i.user_id),
        Some(user.id)
    );

    Ok(())
}

/// Tests replacing the key of a user who has no token yet.
///
/// Expected: Ok with a token created
#[tokio::test]
async fn creates_token_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TokenRepository::new(db);
    repo.replace(user.id, "b".repeat(40)).await?;

    assert!(repo.find_by_user(user.id).await?.is_some());

    Ok(())
}
