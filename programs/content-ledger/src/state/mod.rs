pub mod fee_policy;
pub mod content_pricing;
pub mod purchase;
pub mod subscription;
pub mod vault;

pub use fee_policy::{
    FeePolicy, FeeQuote, FEE_POLICY_SEED,
    BPS_DENOMINATOR, DEFAULT_PLATFORM_FEE_BPS, MAX_PLATFORM_FEE_BPS,
};
pub use content_pricing::{
    ContentPricing, PricingModel, PricingTerms, CONTENT_PRICING_SEED,
    MAX_TITLE_LEN, SECONDS_PER_DAY, SECONDS_PER_HOUR,
};
pub use purchase::{Purchase, PURCHASE_SEED};
pub use subscription::{Subscription, SUBSCRIPTION_SEED};
pub use vault::{Vault, VAULT_SEED};

/// Serialized account bytes, for asserting a failed call left a record alone
#[cfg(test)]
pub(crate) fn snapshot<T: anchor_lang::AccountSerialize>(record: &T) -> Vec<u8> {
    let mut data = Vec::new();
    record.try_serialize(&mut data).unwrap();
    data
}
