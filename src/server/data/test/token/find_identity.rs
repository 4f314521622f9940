use super::*;

/// Tests resolving a known key.
///
/// Expected: Ok with the identity of the token's user
#[tokio::test]
async fn resolves_key_to_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_user_with_token(db).await?;

    let identity = TokenRepository::new(db)
        .find_identity(&token.key)
        .await?
        .unwrap();

    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.username, user.username);

    Ok(())
}

/// Tests resolving a key no token has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_token(db).await?;

    let identity = TokenRepository::new(db)
        .find_identity(&"0".repeat(40))
        .await?;

    assert!(identity.is_none());

    Ok(())
}
