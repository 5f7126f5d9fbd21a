use super::*;

pub mod big_num;
pub mod ray;
pub mod safe_math;

pub use big_num::*;
pub use ray::*;
pub use safe_math::*;
