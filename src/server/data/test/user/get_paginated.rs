use super::*;

/// Tests that users are listed by username.
///
/// Expected: Ok with users in username order and the full total
#[tokio::test]
async fn lists_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["carol", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let (users, total) = UserRepository::new(db)
        .get_paginated(PageRequest {
            limit: 2,
            offset: 0,
        })
        .await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);

    Ok(())
}
