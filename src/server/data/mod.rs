//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

use sea_orm::{sea_query::LikeExpr, Order};

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod token;
pub mod toy;
pub mod user;

#[cfg(test)]
mod test;

/// Maps a descending flag to a SeaORM sort order.
pub(crate) fn direction(descending: bool) -> Order {
    if descending {
        Order::Desc
    } else {
        Order::Asc
    }
}

/// Builds a case-insensitive `LIKE` prefix pattern that matches `search` literally.
///
/// `%`, `_` and `\` in the input are escaped. SQLite only folds case for ASCII letters,
/// so non-ASCII characters must match in their stored case.
pub(crate) fn name_prefix(search: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search.len() + 1);
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

