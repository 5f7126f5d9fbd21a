use super::*;

#[error_code]
pub enum YieldTokenError {
    #[msg("Caller is not the controlling pool")]
    Unauthorized,
    #[msg("Insufficient balance for the requested operation")]
    InsufficientBalance,
    #[msg("Transfer is not allowed while the balance backs a position")]
    TransferNotAllowed,
    #[msg("There has been an arithmetic overflow error")]
    ArithmeticOverflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("This program does not accept direct asset deposits")]
    UnsupportedAssetReceipt,
    #[msg("Liquidity index must be non-decreasing")]
    IndexDecreased,
    #[msg("Please enter a valid amount greater than zero")]
    InvalidAmount,
    #[msg("Liquidity index must be at least one ray")]
    InvalidIndex,
    #[msg("Name is too long")]
    NameTooLong,
    #[msg("Symbol is too long")]
    SymbolTooLong,
    #[msg("Decimals have already been initialized")]
    DecimalsAlreadyInitialized,
    #[msg("Holder account does not belong to the configured treasury")]
    InvalidTreasuryHolder,
    #[msg("Signer is neither the owner nor the approved delegate")]
    InvalidDelegate,
    #[msg("Amount exceeds the delegated allowance")]
    DelegatedAmountExceeded,
    #[msg("Sender and recipient must be different holders")]
    SelfTransferNotAllowed,
}
