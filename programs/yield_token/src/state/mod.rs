use super::*;

pub mod holder;
pub mod reserve;

pub use holder::*;
pub use reserve::*;
