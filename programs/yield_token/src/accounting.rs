//! Scaled-balance accounting.
//!
//! All supply-affecting arithmetic lives here, parameterized by the index it
//! must use, so the whole module runs deterministically off-chain. The
//! instruction handlers are thin glue around these functions.

use super::*;

/// Credit `amount` (effective units) to a holder at the given index.
///
/// Returns the scaled amount credited. Calling twice mints twice; there is
/// no idempotency here.
pub fn mint_scaled(
    reserve: &mut Reserve,
    holder: &mut HolderAccount,
    amount: u64,
    index: u128,
) -> Result<u128> {
    require!(amount > 0, YieldTokenError::InvalidAmount);

    let scaled = ray_div(amount as u128, index)?;
    require!(scaled > 0, YieldTokenError::InvalidAmount);

    holder.scaled_balance = holder.scaled_balance.safe_add(scaled)?;
    reserve.total_scaled_supply = reserve.total_scaled_supply.safe_add(scaled)?;
    Ok(scaled)
}

/// Credit accrued reserve-factor income to the treasury holder.
///
/// Unlike `mint_scaled` this converts with the live stored index and plain
/// floor division. The asymmetry is inherited from the reserve-accrual path
/// and kept as its own code path; see DESIGN.md.
pub fn mint_to_treasury_scaled(
    reserve: &mut Reserve,
    treasury_holder: &mut HolderAccount,
    amount: u64,
) -> Result<u128> {
    require!(amount > 0, YieldTokenError::InvalidAmount);

    let scaled = (amount as u128)
        .safe_mul(RAY)?
        .safe_div(reserve.liquidity_index)?;
    require!(scaled > 0, YieldTokenError::InvalidAmount);

    treasury_holder.scaled_balance = treasury_holder.scaled_balance.safe_add(scaled)?;
    reserve.total_scaled_supply = reserve.total_scaled_supply.safe_add(scaled)?;
    Ok(scaled)
}

/// Debit `amount` (effective units) from a holder at the given index.
///
/// The balance check is against the effective, index-adjusted balance, not
/// the raw principal. Returns the scaled amount debited.
pub fn burn_scaled(
    reserve: &mut Reserve,
    holder: &mut HolderAccount,
    amount: u64,
    index: u128,
) -> Result<u128> {
    require!(amount > 0, YieldTokenError::InvalidAmount);
    require!(
        amount <= holder.effective_balance(index)?,
        YieldTokenError::InsufficientBalance
    );

    let scaled = ray_div(amount as u128, index)?;

    holder.scaled_balance = holder
        .scaled_balance
        .checked_sub(scaled)
        .ok_or_else(|| error!(YieldTokenError::InsufficientBalance))?;
    reserve.total_scaled_supply = reserve.total_scaled_supply.safe_sub(scaled)?;
    Ok(scaled)
}

/// Move `amount` (effective units) of principal between two holders.
///
/// Both the ordinary and the liquidation transfer route through here; the
/// liquidation path sets `bypass_eligibility` because seizing collateral is
/// its own authority. The eligibility check runs before any index math so a
/// rejected transfer does no conversion work.
pub fn transfer_scaled(
    from: &mut HolderAccount,
    to: &mut HolderAccount,
    amount: u64,
    index: u128,
    bypass_eligibility: bool,
) -> Result<u128> {
    require!(amount > 0, YieldTokenError::InvalidAmount);

    if !bypass_eligibility {
        require!(
            !from.transfer_restricted,
            YieldTokenError::TransferNotAllowed
        );
    }

    let scaled = ray_div(amount as u128, index)?;

    from.scaled_balance = from
        .scaled_balance
        .checked_sub(scaled)
        .ok_or_else(|| error!(YieldTokenError::InsufficientBalance))?;
    to.scaled_balance = to.scaled_balance.safe_add(scaled)?;
    Ok(scaled)
}
