use super::*;

#[derive(Accounts)]
pub struct MintYieldToken<'info> {
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

    /// CHECK: Any address may receive a mint; the pool vouches for it.
    pub holder: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = pool,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), holder.key().as_ref()],
        bump,
    )]
    pub holder_account: Box<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

impl MintYieldToken<'_> {
    pub fn handler(ctx: Context<Self>, amount: u64, index: u128) -> Result<()> {
        require!(index >= RAY, YieldTokenError::InvalidIndex);

        let reserve = &mut ctx.accounts.reserve;
        let holder_account = &mut ctx.accounts.holder_account;

        if holder_account.owner == Pubkey::default() {
            holder_account.bump = ctx.bumps.holder_account;
            holder_account.owner = ctx.accounts.holder.key();
            holder_account.reserve = reserve.key();
        }

        mint_scaled(reserve, holder_account, amount, index)?;

        emit!(MintEvent {
            reserve: reserve.key(),
            holder: ctx.accounts.holder.key(),
            amount,
            index,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
