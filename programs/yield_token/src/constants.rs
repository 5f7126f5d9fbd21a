use super::*;

/// 1.0 in ray fixed-point (27 decimals). All liquidity indexes are ray values.
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const HALF_RAY: u128 = RAY / 2;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 8;

pub const RESERVE_SEED: &[u8] = b"reserve";
pub const HOLDER_SEED: &[u8] = b"holder";

const_assert_eq!(HALF_RAY * 2, RAY);
