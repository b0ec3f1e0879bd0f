//! HTTP handlers for the aquarium API.

pub mod health;
pub mod profiles;
pub mod tanks;

pub use health::{health_check, readiness_check};
pub use profiles::{create_profile, list_profiles};
pub use tanks::{create_tank, delete_tank, list_tanks, update_tank};
