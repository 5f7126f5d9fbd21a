use super::*;

#[derive(Accounts)]
pub struct SyncIndex<'info> {
    #[account(
        constraint = reserve.pool == pool.key() @ YieldTokenError::Unauthorized
    )]
    pub pool: Signer<'info>,

    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref(), reserve.pool.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Box<Account<'info, Reserve>>,
}

/// The pool pushes its freshly accrued normalized income index here. Reads of
/// "the current index" everywhere else in the program see this value.
pub fn handle_sync_index(ctx: Context<SyncIndex>, new_index: u128) -> Result<()> {
    let reserve = &mut ctx.accounts.reserve;
    let old_index = reserve.liquidity_index;

    reserve.apply_index(new_index)?;

    emit!(IndexSyncedEvent {
        reserve: reserve.key(),
        old_index,
        new_index,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
