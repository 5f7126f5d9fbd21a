use super::*;

#[derive(Accounts)]
pub struct TransferUnderlying<'info> {
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

    #[account(
        mut,
        constraint = target.mint == reserve.underlying_mint
    )]
    pub target: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Moves the real asset out of the vault to fund a borrow or withdrawal.
/// Touches no token accounting; returns the amount moved.
pub fn handle_transfer_underlying(ctx: Context<TransferUnderlying>, amount: u64) -> Result<u64> {
    require!(amount > 0, YieldTokenError::InvalidAmount);

    let reserve = &ctx.accounts.reserve;
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
                to: ctx.accounts.target.to_account_info(),
                authority: reserve.to_account_info(),
            },
            reserve_signer,
        ),
        amount,
        ctx.accounts.underlying_mint.decimals,
    )?;

    Ok(amount)
}
