//! SeaORM entities for the drones API.

pub mod prelude;

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod token;
pub mod toy;
pub mod user;
