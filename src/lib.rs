mod array;
mod grid;
mod modulo;
mod vec2;

pub mod error;

pub use array::*;
pub use grid::*;
pub use modulo::floor_mod;
pub use vec2::*;
