use super::*;

#[derive(Accounts)]
pub struct InitializeDecimals<'info> {
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

pub fn handle_initialize_decimals(ctx: Context<InitializeDecimals>, decimals: u8) -> Result<()> {
    let reserve = &mut ctx.accounts.reserve;

    require!(
        !reserve.decimals_initialized,
        YieldTokenError::DecimalsAlreadyInitialized
    );

    reserve.decimals = decimals;
    reserve.decimals_initialized = true;

    emit!(DecimalsInitializedEvent {
        reserve: reserve.key(),
        decimals,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
