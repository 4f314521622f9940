use super::*;

fn page(limit: u64, offset: u64) -> PageRequest {
    PageRequest { limit, offset }
}

/// Tests that the total counts every match while the page holds only `limit` rows.
///
/// Expected: Ok with 2 categories on the page and a total of 3
#[tokio::test]
async fn pages_with_total_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Hexacopter", "Octocopter", "Quadcopter"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = DroneCategoryRepository::new(db);
    let (first, total) = repo
        .get_paginated(&DroneCategoryFilter::default(), page(2, 0))
        .await?;
    let (second, _) = repo
        .get_paginated(&DroneCategoryFilter::default(), page(2, 2))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "Hexacopter");
    assert_eq!(first[1].name, "Octocopter");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Quadcopter");

    Ok(())
}

/// Tests case-insensitive prefix search on the name.
///
/// Expected: Ok with only the categories starting with "quad"
#[tokio::test]
async fn searches_by_name_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Quadcopter", "Quadplane", "Hexacopter"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let filter = DroneCategoryFilter {
        search: Some("quad".to_string()),
        ..Default::default()
    };
    let (categories, total) = DroneCategoryRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    assert_eq!(total, 2);
    assert!(categories.iter().all(|c| c.name.starts_with("Quad")));

    Ok(())
}

/// Tests that LIKE wildcards in the search text match only themselves.
///
/// Expected: Ok with no match for `%` or `_`, and only "50% Lift" for "50%"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Quadcopter", "Octocopter", "50% Lift", "500 Lift"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = DroneCategoryRepository::new(db);
    let search = |text: &str| DroneCategoryFilter {
        search: Some(text.to_string()),
        ..Default::default()
    };

    let (_, percent) = repo.get_paginated(&search("%"), page(10, 0)).await?;
    let (_, underscore) = repo.get_paginated(&search("_"), page(10, 0)).await?;
    let (_, backslash) = repo.get_paginated(&search("\\"), page(10, 0)).await?;
    let (literal, total) = repo.get_paginated(&search("50%"), page(10, 0)).await?;

    assert_eq!(percent, 0);
    assert_eq!(underscore, 0);
    assert_eq!(backslash, 0);
    assert_eq!(total, 1);
    assert_eq!(literal[0].name, "50% Lift");

    Ok(())
}

/// Tests case folding of the prefix search.
///
/// ASCII letters match in any case; other letters match in their stored case.
///
/// Expected: Ok with "Élan" found by "Él" and "QUAD" finding "Quadcopter"
#[tokio::test]
async fn search_folds_ascii_case_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Élan", "Quadcopter"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = DroneCategoryRepository::new(db);
    let search = |text: &str| DroneCategoryFilter {
        search: Some(text.to_string()),
        ..Default::default()
    };

    let (accented, _) = repo.get_paginated(&search("Él"), page(10, 0)).await?;
    let (upper, _) = repo.get_paginated(&search("QUAD"), page(10, 0)).await?;
    let (_, folded) = repo.get_paginated(&search("él"), page(10, 0)).await?;

    assert_eq!(accented[0].name, "Élan");
    assert_eq!(upper[0].name, "Quadcopter");
    assert_eq!(folded, 0);

    Ok(())
}

/// Tests descending ordering on the name.
///
/// Expected: Ok with categories in reverse name order
#[tokio::test]
async fn orders_by_name_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Alpha", "Charlie", "Bravo"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let filter = DroneCategoryFilter {
        ordering: vec![OrderBy::desc(DroneCategoryOrderField::Name)],
        ..Default::default()
    };
    let (categories, _) = DroneCategoryRepository::new(db)
        .get_paginated(&filter, page(10, 0))
        .await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);

    Ok(())
}

/// Tests an offset past the last row.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let (categories, total) = DroneCategoryRepository::new(db)
        .get_paginated(&DroneCategoryFilter::default(), page(4, 10))
        .await?;

    assert!(categories.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
