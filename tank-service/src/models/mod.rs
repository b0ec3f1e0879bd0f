pub mod profile;
pub mod tank;

pub use profile::Profile;
pub use tank::Tank;
