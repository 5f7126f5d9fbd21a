use super::*;

pub mod approve;
pub mod burn;
pub mod initialize_decimals;
pub mod initialize_reserve;
pub mod mint;
pub mod mint_to_treasury;
pub mod set_transfer_restriction;
pub mod sync_index;
pub mod transfer;
pub mod transfer_on_liquidation;
pub mod transfer_underlying;

pub use approve::*;
pub use burn::*;
pub use initialize_decimals::*;
pub use initialize_reserve::*;
pub use mint::*;
pub use mint_to_treasury::*;
pub use set_transfer_restriction::*;
pub use sync_index::*;
pub use transfer::*;
pub use transfer_on_liquidation::*;
pub use transfer_underlying::*;
