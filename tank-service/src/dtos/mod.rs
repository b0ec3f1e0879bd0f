pub mod profiles;
pub mod tanks;

pub use profiles::{CreateProfileRequest, ProfileCollection, ProfileResponse};
pub use tanks::{CreateTankRequest, TankCollection, TankResponse, UpdateTankRequest};
