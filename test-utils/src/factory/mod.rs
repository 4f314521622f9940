//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories that need
//! a parent row take its id explicitly; `helpers` creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let category = factory::drone_category::create_category(&db).await?;
//! let drone = factory::drone::create_drone(&db, category.id, user.id).await?;
//!
//! let (owner, token, category, drone) = factory::helpers::create_drone_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let pilot = factory::pilot::PilotFactory::new(&db)
//!     .name("Penelope")
//!     .gender("F")
//!     .races_count(12)
//!     .build()
//!     .await?;
//! ```

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod helpers;
pub mod pilot;
pub mod token;
pub mod toy;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use competition::create_competition;
pub use drone::create_drone;
pub use drone_category::create_category;
pub use pilot::create_pilot;
pub use token::create_token;
pub use toy::create_toy;
pub use user::create_user;
