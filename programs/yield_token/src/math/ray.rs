use super::*;

/// Multiply two ray fixed-point values, rounding half up.
///
/// `ray_mul(principal, index)` is the only sanctioned conversion from a
/// scaled principal back to an effective amount.
pub fn ray_mul(a: u128, b: u128) -> Result<u128> {
    let product = U256::from(a) * U256::from(b);
    let rounded = product
        .checked_add(U256::from(HALF_RAY))
        .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))?;

    (rounded / U256::from(RAY))
        .to_u128()
        .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))
}

/// Divide two ray fixed-point values, rounding half up.
///
/// `ray_div(amount, index)` is the only sanctioned conversion from an
/// effective amount to a scaled principal.
pub fn ray_div(a: u128, b: u128) -> Result<u128> {
    require!(b != 0, YieldTokenError::DivisionByZero);

    let scaled = U256::from(a) * U256::from(RAY);
    let rounded = scaled
        .checked_add(U256::from(b / 2))
        .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))?;

    (rounded / U256::from(b))
        .to_u128()
        .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))
}
