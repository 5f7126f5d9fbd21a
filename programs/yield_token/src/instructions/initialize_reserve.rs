use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeReserveArgs {
    pub name: String,
    pub symbol: String,
    /// The controlling pool, fixed for the token's lifetime.
    pub pool: Pubkey,
    /// Recipient of reserve-factor accrual.
    pub treasury: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: InitializeReserveArgs)]
pub struct InitializeReserve<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    // Seeding by pool as well as mint keeps the address space per pool.
    // Anyone may create a reserve, but only for a pool key they name, so a
    // third party cannot occupy the reserve another pool would derive.
    #[account(
        init,
        payer = payer,
        space = 8 + Reserve::INIT_SPACE,
        seeds = [RESERVE_SEED, underlying_mint.key().as_ref(), args.pool.as_ref()],
        bump,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault holding the real asset, owned by the reserve PDA.
    #[account(
        init,
        payer = payer,
        associated_token::mint = underlying_mint,
        associated_token::authority = reserve,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl InitializeReserve<'_> {
    pub fn handler(ctx: Context<Self>, args: InitializeReserveArgs) -> Result<()> {
        let reserve = &mut ctx.accounts.reserve;

        reserve.bump = ctx.bumps.reserve;
        reserve.pool = args.pool;
        reserve.underlying_mint = ctx.accounts.underlying_mint.key();
        reserve.vault = ctx.accounts.vault.key();
        reserve.treasury = args.treasury;
        reserve.name =
            pack_bytes(&args.name).ok_or_else(|| error!(YieldTokenError::NameTooLong))?;
        reserve.symbol =
            pack_bytes(&args.symbol).ok_or_else(|| error!(YieldTokenError::SymbolTooLong))?;
        // decimals arrive later through `initialize_decimals`
        reserve.decimals = 0;
        reserve.decimals_initialized = false;
        reserve.liquidity_index = RAY;
        reserve.total_scaled_supply = 0;

        emit!(ReserveInitializedEvent {
            reserve: reserve.key(),
            pool: reserve.pool,
            underlying_mint: reserve.underlying_mint,
            vault: reserve.vault,
            treasury: reserve.treasury,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
