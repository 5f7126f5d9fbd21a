use super::*;

#[account]
#[derive(InitSpace)]
pub struct Reserve {
    pub bump: u8,
    /// The controlling pool. The only signer allowed on supply-mutating
    /// instructions.
    pub pool: Pubkey,
    /// Mint of the real asset this token wraps.
    pub underlying_mint: Pubkey,
    /// Token account (owned by this reserve PDA) holding the real asset.
    pub vault: Pubkey,
    /// Recipient of reserve-factor accrual minted via `mint_to_treasury`.
    pub treasury: Pubkey,
    pub name: [u8; 32],
    pub symbol: [u8; 8],
    /// Set once by `initialize_decimals`, zero until then.
    pub decimals: u8,
    pub decimals_initialized: bool,
    /// Normalized income index in ray, pushed by the pool. Starts at RAY and
    /// never decreases.
    pub liquidity_index: u128,
    /// Sum of all holders' scaled balances.
    pub total_scaled_supply: u128,
}

impl Reserve {
    /// Aggregate effective supply at the given index.
    ///
    /// Short-circuits to zero when nothing is outstanding so callers do not
    /// pay for a conversion they do not need.
    pub fn effective_total_supply(&self, index: u128) -> Result<u64> {
        if self.total_scaled_supply == 0 {
            return Ok(0);
        }

        let supply = ray_mul(self.total_scaled_supply, index)?;
        u64::try_from(supply).map_err(|_| error!(YieldTokenError::ArithmeticOverflow))
    }

    /// Validate and store a new liquidity index pushed by the pool.
    pub fn apply_index(&mut self, new_index: u128) -> Result<()> {
        require!(new_index >= RAY, YieldTokenError::InvalidIndex);
        require!(
            new_index >= self.liquidity_index,
            YieldTokenError::IndexDecreased
        );
        self.liquidity_index = new_index;
        Ok(())
    }
}

/// Pack a UTF-8 string into a fixed, zero-padded byte array, or None if it
/// does not fit.
pub fn pack_bytes<const N: usize>(value: &str) -> Option<[u8; N]> {
    let raw = value.as_bytes();
    if raw.len() > N {
        return None;
    }

    let mut packed = [0u8; N];
    packed[..raw.len()].copy_from_slice(raw);
    Some(packed)
}
