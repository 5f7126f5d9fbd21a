use super::*;

#[derive(Accounts)]
pub struct TransferYieldToken<'info> {
    /// The holder, or a delegate the holder has approved.
    #[account(mut)]
    pub authority: Signer<'info>,

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

    /// CHECK: Any address other than the sender may receive a transfer. A
    /// matching recipient would make to_account alias from_account, and the
    /// later write-back on exit would clobber the debit.
    #[account(
        constraint = recipient.key() != from_account.owner @ YieldTokenError::SelfTransferNotAllowed,
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub to_account: Box<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

impl TransferYieldToken<'_> {
    pub fn handler(ctx: Context<Self>, amount: u64) -> Result<()> {
        let reserve = &ctx.accounts.reserve;
        let from_account = &mut ctx.accounts.from_account;
        let to_account = &mut ctx.accounts.to_account;

        from_account.authorize_spend(&ctx.accounts.authority.key(), amount)?;

        if to_account.owner == Pubkey::default() {
            to_account.bump = ctx.bumps.to_account;
            to_account.owner = ctx.accounts.recipient.key();
            to_account.reserve = reserve.key();
        }

        let index = reserve.liquidity_index;
        transfer_scaled(from_account, to_account, amount, index, false)?;

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
}
