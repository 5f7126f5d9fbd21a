use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, used for ray multiply/divide intermediates.
    pub struct U256(4);
}

impl U256 {
    /// Convert back to u128, or None if the value does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        if *self > U256::from(u128::MAX) {
            None
        } else {
            Some(self.as_u128())
        }
    }
}
