use super::*;

#[event]
pub struct ReserveInitializedEvent {
    pub reserve: Pubkey,
    pub pool: Pubkey,
    pub underlying_mint: Pubkey,
    pub vault: Pubkey,
    pub treasury: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DecimalsInitializedEvent {
    pub reserve: Pubkey,
    pub decimals: u8,
    pub timestamp: i64,
}

#[event]
pub struct IndexSyncedEvent {
    pub reserve: Pubkey,
    pub old_index: u128,
    pub new_index: u128,
    pub timestamp: i64,
}

/// Emitted for both regular mints and treasury accrual. Carries the index
/// the conversion used so the scaled amount can be audited after the fact.
#[event]
pub struct MintEvent {
    pub reserve: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub index: u128,
    pub timestamp: i64,
}

#[event]
pub struct BurnEvent {
    pub reserve: Pubkey,
    pub caller: Pubkey,
    pub holder: Pubkey,
    /// Token account that received the underlying asset.
    pub recipient: Pubkey,
    pub amount: u64,
    pub index: u128,
    pub timestamp: i64,
}

/// Informational principal-move record; emitted by ordinary and liquidation
/// transfers alike.
#[event]
pub struct BalanceTransferEvent {
    pub reserve: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub index: u128,
    pub timestamp: i64,
}

#[event]
pub struct DelegateApprovedEvent {
    pub reserve: Pubkey,
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct DelegateRevokedEvent {
    pub reserve: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct TransferRestrictionUpdatedEvent {
    pub reserve: Pubkey,
    pub holder: Pubkey,
    pub restricted: bool,
    pub timestamp: i64,
}
