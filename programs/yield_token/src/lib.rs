use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};
use static_assertions::const_assert_eq;

pub mod accounting;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

pub use accounting::*;
pub use constants::*;
pub use error::YieldTokenError;
pub use events::*;
pub use instructions::*;
pub use math::*;
pub use state::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "yield_token",
    project_url: "https://github.com/yield-token-labs/yield_token",
    contacts: "email:security@yieldtoken.dev",
    policy: "Please report vulnerabilities privately before disclosure.",
    source_code: "https://github.com/yield-token-labs/yield_token",
    source_release: "v0.1.0"
}

declare_id!("CJVKNLhmpxyBNq6rg57usCz3bRzLiZpUTPEgcPYs4CCD");

#[program]
pub mod yield_token {
    use super::*;

    /// Create the reserve for an underlying asset: controlling pool,
    /// treasury, vault and metadata are fixed here for the token's lifetime.
    pub fn initialize_reserve(
        ctx: Context<InitializeReserve>,
        args: InitializeReserveArgs,
    ) -> Result<()> {
        InitializeReserve::handler(ctx, args)
    }

    /// One-time decimals setup, separate from reserve creation.
    pub fn initialize_decimals(ctx: Context<InitializeDecimals>, decimals: u8) -> Result<()> {
        handle_initialize_decimals(ctx, decimals)
    }

    /// Pool-pushed normalized income index update.
    pub fn sync_index(ctx: Context<SyncIndex>, new_index: u128) -> Result<()> {
        handle_sync_index(ctx, new_index)
    }

    /// Credit `amount` to a holder at the index the pool has computed.
    pub fn mint(ctx: Context<MintYieldToken>, amount: u64, index: u128) -> Result<()> {
        MintYieldToken::handler(ctx, amount, index)
    }

    /// Credit reserve-factor accrual to the treasury at the live index.
    pub fn mint_to_treasury(ctx: Context<MintToTreasury>, amount: u64) -> Result<()> {
        handle_mint_to_treasury(ctx, amount)
    }

    /// Debit `amount` from a holder and release the backing asset from the
    /// vault to the recipient.
    pub fn burn(ctx: Context<BurnYieldToken>, amount: u64, index: u128) -> Result<()> {
        BurnYieldToken::handler(ctx, amount, index)
    }

    /// Ordinary holder-to-holder transfer, subject to the eligibility check.
    pub fn transfer(ctx: Context<TransferYieldToken>, amount: u64) -> Result<()> {
        TransferYieldToken::handler(ctx, amount)
    }

    /// Privileged transfer for collateral seizure; skips the eligibility
    /// check.
    pub fn transfer_on_liquidation(
        ctx: Context<TransferOnLiquidation>,
        amount: u64,
    ) -> Result<()> {
        handle_transfer_on_liquidation(ctx, amount)
    }

    /// Move the real asset out of the vault; used by the pool to fund
    /// borrows and withdrawals.
    pub fn transfer_underlying(ctx: Context<TransferUnderlying>, amount: u64) -> Result<u64> {
        handle_transfer_underlying(ctx, amount)
    }

    pub fn approve(ctx: Context<ApproveDelegate>, delegate: Pubkey, amount: u64) -> Result<()> {
        handle_approve(ctx, delegate, amount)
    }

    pub fn revoke(ctx: Context<ApproveDelegate>) -> Result<()> {
        handle_revoke(ctx)
    }

    /// Pool-pushed eligibility verdict for a holder's balance decreases.
    pub fn set_transfer_restriction(
        ctx: Context<SetTransferRestriction>,
        restricted: bool,
    ) -> Result<()> {
        handle_set_transfer_restriction(ctx, restricted)
    }

    /// This program holds no lamport balance of its own and has no recovery
    /// path for misdirected funds; anything that is not a recognized
    /// instruction is rejected outright.
    pub fn fallback(
        _program_id: &Pubkey,
        _accounts: &[AccountInfo],
        _data: &[u8],
    ) -> Result<()> {
        Err(error!(YieldTokenError::UnsupportedAssetReceipt))
    }
}
