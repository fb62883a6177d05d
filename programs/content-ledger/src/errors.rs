use anchor_lang::prelude::*;

#[error_code]
pub enum ContentLedgerError {
    // Authorization
    #[msg("Caller is not authorized for this action")]
    NotAuthorized,

    // Lookup errors
    #[msg("Referenced content, purchase or subscription does not exist")]
    NotFound,

    // Ledger state errors
    #[msg("Content already purchased and not refunded")]
    AlreadyPurchased,
    #[msg("Purchase has already been refunded")]
    AlreadyRefunded,
    #[msg("No subscription exists for this content")]
    NoActiveSubscription,

    // Input validation errors
    #[msg("Pricing model must be Free (0), OneTimePurchase (1) or Subscription (2)")]
    InvalidPricingModel,
    #[msg("Price must be greater than 0 for paid content")]
    InvalidPrice,
    #[msg("Subscription period must be at least one day")]
    InvalidSubscriptionPeriod,
    #[msg("Platform fee cannot exceed 1000 bps (10%)")]
    InvalidFee,
    #[msg("Title must be 64 bytes or less")]
    TitleTooLong,
    #[msg("Amount must be greater than 0")]
    InvalidAmount,

    // Refund window errors
    #[msg("Refunds are disabled for this content")]
    RefundDisabled,
    #[msg("Refund window has closed")]
    RefundExpired,

    // Value transfer errors
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Recipient account does not match the recorded admin or owner")]
    InvalidRecipient,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

#[cfg(test)]
pub(crate) fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(_) => u32::MAX,
    }
}

#[cfg(test)]
pub(crate) fn code_of(err: ContentLedgerError) -> u32 {
    error_code(err.into())
}
