use crate::server::{data::toy::ToyRepository, model::toy::ToyParams};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(name: &str) -> ToyParams {
    ToyParams {
        name: name.to_string(),
        description: "Spins".to_string(),
        toy_category: "Action figures".to_string(),
        release_date: Utc.with_ymd_and_hms(2016, 10, 2, 1, 11, 0).unwrap(),
        was_included_in_home: false,
    }
}

/// Tests that toys are listed by name.
///
/// Expected: Ok with every toy in name order
#[tokio::test]
async fn lists_toys_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::toy::ToyFactory::new(db).name("Yo-yo").build().await?;
    factory::toy::ToyFactory::new(db).name("Kite").build().await?;

    let toys = ToyRepository::new(db).get_all().await?;

    let names: Vec<&str> = toys.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Kite", "Yo-yo"]);

    Ok(())
}

/// Tests replacing a toy while keeping its creation timestamp.
///
/// Expected: Ok with new fields and the original `created`
#[tokio::test]
async fn updates_toy_and_keeps_created() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ToyRepository::new(db);
    let toy = repo.create(params("Snoopy")).await?;

    let mut changed = params("Snoopy talking");
    changed.was_included_in_home = true;
    let updated = repo.update(toy.id, changed).await?;

    assert_eq!(updated.name, "Snoopy talking");
    assert!(updated.was_included_in_home);
    assert_eq!(updated.created, toy.created);

    Ok(())
}

/// Tests deleting a toy.
///
/// Expected: Ok with the toy gone
#[tokio::test]
async fn deletes_toy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let toy = factory::create_toy(db).await?;

    let repo = ToyRepository::new(db);
    repo.delete(toy.id).await?;

    assert!(repo.get_by_id(toy.id).await?.is_none());

    Ok(())
}
