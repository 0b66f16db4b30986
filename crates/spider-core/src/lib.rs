pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod force;
pub mod grid;
pub mod links;
pub mod noise;
pub mod particle;
pub mod scene;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use force::*;
pub use links::*;
pub use noise::*;
pub use particle::*;
pub use scene::*;
