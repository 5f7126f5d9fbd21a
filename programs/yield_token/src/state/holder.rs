use super::*;

/// Per-holder principal ledger entry. Created implicitly on first credit.
///
/// Only the scaled balance is stored; the effective balance is derived from
/// it at the current liquidity index on every read.
#[account]
#[derive(InitSpace)]
pub struct HolderAccount {
    pub bump: u8,
    pub owner: Pubkey,
    pub reserve: Pubkey,
    /// Principal in ray-scaled units. Constant while interest accrues.
    pub scaled_balance: u128,
    /// Optional spender approved by the owner, SPL-token style.
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
    /// Set by the pool while this balance collateralizes a position.
    /// Ordinary transfers out are rejected while it is set.
    pub transfer_restricted: bool,
}

impl HolderAccount {
    /// The redeemable balance at the given index: `scaled * index`, ray math.
    pub fn effective_balance(&self, index: u128) -> Result<u64> {
        let balance = ray_mul(self.scaled_balance, index)?;
        u64::try_from(balance).map_err(|_| error!(YieldTokenError::ArithmeticOverflow))
    }

    /// Check that `signer` may spend `amount` from this account, consuming
    /// delegated allowance when the signer is the delegate.
    pub fn authorize_spend(&mut self, signer: &Pubkey, amount: u64) -> Result<()> {
        if *signer == self.owner {
            return Ok(());
        }

        require!(
            self.delegate == Some(*signer),
            YieldTokenError::InvalidDelegate
        );
        self.delegated_amount = self
            .delegated_amount
            .checked_sub(amount)
            .ok_or_else(|| error!(YieldTokenError::DelegatedAmountExceeded))?;
        Ok(())
    }
}
