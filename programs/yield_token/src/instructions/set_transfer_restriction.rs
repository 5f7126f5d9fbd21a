use super::*;

#[derive(Accounts)]
pub struct SetTransferRestriction<'info> {
    #[account(
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
        seeds = [HOLDER_SEED, reserve.key().as_ref(), holder_account.owner.as_ref()],
        bump = holder_account.bump,
    )]
    pub holder_account: Box<Account<'info, HolderAccount>>,
}

/// The pool's balance-decrease eligibility verdict, pushed into holder state.
/// While set, ordinary transfers out of this account are rejected; the
/// liquidation path ignores it.
pub fn handle_set_transfer_restriction(
    ctx: Context<SetTransferRestriction>,
    restricted: bool,
) -> Result<()> {
    let holder_account = &mut ctx.accounts.holder_account;
    holder_account.transfer_restricted = restricted;

    emit!(TransferRestrictionUpdatedEvent {
        reserve: ctx.accounts.reserve.key(),
        holder: holder_account.owner,
        restricted,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
