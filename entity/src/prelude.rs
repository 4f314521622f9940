pub use super::competition::Entity as Competition;
pub use super::drone::Entity as Drone;
pub use super::drone_category::Entity as DroneCategory;
pub use super::pilot::Entity as Pilot;
pub use super::token::Entity as Token;
pub use super::toy::Entity as Toy;
pub use super::user::Entity as User;
