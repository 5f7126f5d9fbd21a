use super::*;

#[derive(Accounts)]
pub struct MintToTreasury<'info> {
    #[account(
        mut,
        constraint = reserve.pool == pool.key() @ YieldTokenError::Unauthorized
    )]
    pub pool: Signer<'info>,

    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref(), reserve.pool.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(
        init_if_needed,
        payer = pool,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), reserve.treasury.as_ref()],
        bump,
        constraint = treasury_account.owner == Pubkey::default()
            || treasury_account.owner == reserve.treasury
            @ YieldTokenError::InvalidTreasuryHolder,
    )]
    pub treasury_account: Box<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

/// Reserve-factor accrual. Converts with the index stored on the reserve at
/// call time rather than a caller-supplied one; the pool has already synced
/// the index in the same transaction when it accrues.
pub fn handle_mint_to_treasury(ctx: Context<MintToTreasury>, amount: u64) -> Result<()> {
    let reserve = &mut ctx.accounts.reserve;
    let treasury_account = &mut ctx.accounts.treasury_account;

    if treasury_account.owner == Pubkey::default() {
        treasury_account.bump = ctx.bumps.treasury_account;
        treasury_account.owner = reserve.treasury;
        treasury_account.reserve = reserve.key();
    }

    let index = reserve.liquidity_index;
    mint_to_treasury_scaled(reserve, treasury_account, amount)?;

    emit!(MintEvent {
        reserve: reserve.key(),
        holder: reserve.treasury,
        amount,
        index,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
