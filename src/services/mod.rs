//! Service layer for Ration
//!
//! The service layer holds the record log and the reporting logic built on
//! top of it: the shared date-window tracker plus the calorie and cash
//! reporters that compose it.

pub mod calories;
pub mod cash;
pub mod tracker;

pub use calories::CaloriesTracker;
pub use cash::CashTracker;
pub use tracker::Tracker;
