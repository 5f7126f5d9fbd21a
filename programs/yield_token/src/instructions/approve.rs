use super::*;

#[derive(Accounts)]
pub struct ApproveDelegate<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref(), reserve.pool.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), owner.key().as_ref()],
        bump = holder_account.bump,
        constraint = holder_account.owner == owner.key() @ YieldTokenError::Unauthorized,
    )]
    pub holder_account: Box<Account<'info, HolderAccount>>,
}

pub fn handle_approve(
    ctx: Context<ApproveDelegate>,
    delegate: Pubkey,
    amount: u64,
) -> Result<()> {
    let holder_account = &mut ctx.accounts.holder_account;

    holder_account.delegate = Some(delegate);
    holder_account.delegated_amount = amount;

    emit!(DelegateApprovedEvent {
        reserve: ctx.accounts.reserve.key(),
        owner: holder_account.owner,
        delegate,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn handle_revoke(ctx: Context<ApproveDelegate>) -> Result<()> {
    let holder_account = &mut ctx.accounts.holder_account;

    holder_account.delegate = None;
    holder_account.delegated_amount = 0;

    emit!(DelegateRevokedEvent {
        reserve: ctx.accounts.reserve.key(),
        owner: holder_account.owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
