pub mod animate;
pub mod constants;
pub mod error;
pub mod field;
pub mod params;
pub mod particle;
pub mod surface;

pub use animate::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use surface::*;
