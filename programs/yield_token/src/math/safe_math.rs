use super::*;

/// Checked arithmetic that surfaces a distinguishable error instead of
/// wrapping or panicking.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
}

macro_rules! impl_safe_math {
    ($t:ty) => {
        impl SafeMath for $t {
            fn safe_add(self, rhs: Self) -> Result<Self> {
                self.checked_add(rhs)
                    .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))
            }

            fn safe_sub(self, rhs: Self) -> Result<Self> {
                self.checked_sub(rhs)
                    .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))
            }

            fn safe_mul(self, rhs: Self) -> Result<Self> {
                self.checked_mul(rhs)
                    .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))
            }

            fn safe_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(error!(YieldTokenError::DivisionByZero));
                }
                self.checked_div(rhs)
                    .ok_or_else(|| error!(YieldTokenError::ArithmeticOverflow))
            }
        }
    };
}

impl_safe_math!(u64);
impl_safe_math!(u128);
