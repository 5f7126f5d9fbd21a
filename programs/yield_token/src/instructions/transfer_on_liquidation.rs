use super::*;

#[derive(Accounts)]
pub struct TransferOnLiquidation<'info> {
    #[account(
        mut,
        constraint = reserve.pool == pool.key() @ YieldTokenError::Unauthorized
    )]
    pub pool: Signer<'info>,

    #[account(
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref(), reserve.pool.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), from_account.owner.as_ref()],
        bump = from_account.bump,
    )]
    pub from_account: Box<Account<'info, HolderAccount>>,

    /// CHECK: The liquidator receiving the seized collateral. Must differ from
    /// the liquidated holder, otherwise to_account would alias from_account.
    #[account(
        constraint = recipient.key() != from_account.owner @ YieldTokenError::SelfTransferNotAllowed,
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = pool,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub to_account: Box<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

/// Collateral seizure. Same internal move as an ordinary transfer, but the
/// sender-eligibility check is skipped: liquidation is itself the authority
/// for taking the balance out of a restricted account.
pub fn handle_transfer_on_liquidation(
    ctx: Context<TransferOnLiquidation>,
    amount: u64,
) -> Result<()> {
    let reserve = &ctx.accounts.reserve;
    let from_account = &mut ctx.accounts.from_account;
    let to_account = &mut ctx.accounts.to_account;

    if to_account.owner == Pubkey::default() {
        to_account.bump = ctx.bumps.to_account;
        to_account.owner = ctx.accounts.recipient.key();
        to_account.reserve = reserve.key();
    }

    let index = reserve.liquidity_index;
    transfer_scaled(from_account, to_account, amount, index, true)?;

    emit!(BalanceTransferEvent {
        reserve: reserve.key(),
        from: from_account.owner,
        to: to_account.owner,
        amount,
        index,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
