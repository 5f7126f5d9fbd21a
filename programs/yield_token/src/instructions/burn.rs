use super::*;

#[derive(Accounts)]
pub struct BurnYieldToken<'info> {
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

    /// CHECK: The holder whose balance is burned.
    pub holder: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, reserve.key().as_ref(), holder.key().as_ref()],
        bump = holder_account.bump,
    )]
    pub holder_account: Box<Account<'info, HolderAccount>>,

    #[account(
        constraint = underlying_mint.key() == reserve.underlying_mint
    )]
    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = underlying_mint,
        associated_token::authority = reserve,
        associated_token::token_program = token_program,
        constraint = vault.key() == reserve.vault
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the real asset backing the burned balance.
    #[account(
        mut,
        constraint = recipient_underlying.mint == reserve.underlying_mint
    )]
    pub recipient_underlying: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl BurnYieldToken<'_> {
    pub fn handler(ctx: Context<Self>, amount: u64, index: u128) -> Result<()> {
        require!(index >= RAY, YieldTokenError::InvalidIndex);

        let reserve = &mut ctx.accounts.reserve;
        let holder_account = &mut ctx.accounts.holder_account;

        // Ledger debit first; the asset leaves the vault only after the
        // accounting is final.
        burn_scaled(reserve, holder_account, amount, index)?;

        let underlying_mint = reserve.underlying_mint;
        let pool = reserve.pool;
        let reserve_seeds = &[
            RESERVE_SEED,
            underlying_mint.as_ref(),
            pool.as_ref(),
            &[reserve.bump],
        ];
        let reserve_signer = &[&reserve_seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.vault.to_account_info(),
                    mint: ctx.accounts.underlying_mint.to_account_info(),
                    to: ctx.accounts.recipient_underlying.to_account_info(),
                    authority: reserve.to_account_info(),
                },
                reserve_signer,
            ),
            amount,
            ctx.accounts.underlying_mint.decimals,
        )?;

        emit!(BurnEvent {
            reserve: reserve.key(),
            caller: ctx.accounts.pool.key(),
            holder: ctx.accounts.holder.key(),
            recipient: ctx.accounts.recipient_underlying.key(),
            amount,
            index,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
