use anchor_lang::prelude::*;
use crate::errors::ContentLedgerError;

pub const CONTENT_PRICING_SEED: &[u8] = b"content_pricing";

pub const MAX_TITLE_LEN: usize = 64;

/// Ledger time is the cluster unix timestamp (seconds)
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Pricing model selection (0 = free, 1 = one-time purchase, 2 = subscription)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum PricingModel {
    Free,
    OneTimePurchase,
    Subscription,
}

impl TryFrom<u8> for PricingModel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(PricingModel::Free),
            1 => Ok(PricingModel::OneTimePurchase),
            2 => Ok(PricingModel::Subscription),
            _ => err!(ContentLedgerError::InvalidPricingModel),
        }
    }
}

/// Pricing terms submitted on create/update
#[derive(Clone, Debug)]
pub struct PricingTerms {
    pub title: String,
    pub pricing_model: u8,
    pub price: u64,
    pub subscription_period_days: u32,
    pub refund_window_hours: u32,
}

impl PricingTerms {
    /// Validate raw terms, decoding the pricing model
    pub fn validate(&self) -> Result<PricingModel> {
        let model = PricingModel::try_from(self.pricing_model)?;
        require!(self.title.len() <= MAX_TITLE_LEN, ContentLedgerError::TitleTooLong);
        require!(
            model == PricingModel::Free || self.price > 0,
            ContentLedgerError::InvalidPrice
        );
        require!(
            model != PricingModel::Subscription || self.subscription_period_days > 0,
            ContentLedgerError::InvalidSubscriptionPeriod
        );
        Ok(model)
    }
}

/// Pricing record for one piece of content
/// PDA seeds: ["content_pricing", content_id]
#[account]
#[derive(InitSpace)]
pub struct ContentPricing {
    /// Caller-allocated content identifier
    pub content_id: [u8; 32],
    /// Account allowed to change pricing
    pub owner: Pubkey,
    #[max_len(64)]
    pub title: String,
    pub pricing_model: PricingModel,
    /// Price in lamports (per period for subscriptions)
    pub price: u64,
    /// Subscription length in days (0 unless subscription)
    pub subscription_period_days: u32,
    /// Refund window in hours after purchase (0 = refunds disabled)
    pub refund_window_hours: u32,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl ContentPricing {
    /// Write a fresh record. Any previous record at this id is replaced,
    /// including its owner.
    pub fn create(
        &mut self,
        content_id: [u8; 32],
        owner: Pubkey,
        terms: PricingTerms,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        let model = terms.validate()?;

        self.content_id = content_id;
        self.owner = owner;
        self.created_at = now;
        self.bump = bump;
        self.apply(model, terms, now);
        Ok(())
    }

    /// Owner-only update. Owner and created_at are preserved.
    pub fn update(&mut self, caller: &Pubkey, terms: PricingTerms, now: i64) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ContentLedgerError::NotAuthorized);
        let model = terms.validate()?;

        self.apply(model, terms, now);
        Ok(())
    }

    fn apply(&mut self, model: PricingModel, terms: PricingTerms, now: i64) {
        self.title = terms.title;
        self.pricing_model = model;
        self.price = terms.price;
        self.subscription_period_days = terms.subscription_period_days;
        self.refund_window_hours = terms.refund_window_hours;
        self.updated_at = now;
    }

    /// The creator share may only be paid to the recorded owner
    pub fn require_owner(&self, recipient: &Pubkey) -> Result<()> {
        require_keys_eq!(*recipient, self.owner, ContentLedgerError::InvalidRecipient);
        Ok(())
    }

    pub fn require_model(&self, model: PricingModel) -> Result<()> {
        require!(self.pricing_model == model, ContentLedgerError::InvalidPricingModel);
        Ok(())
    }

    /// Subscription length in ledger-time units
    pub fn period_seconds(&self) -> Result<i64> {
        (self.subscription_period_days as i64)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or_else(|| error!(ContentLedgerError::ArithmeticOverflow))
    }

    /// Refund window in ledger-time units
    pub fn refund_window_seconds(&self) -> Result<i64> {
        (self.refund_window_hours as i64)
            .checked_mul(SECONDS_PER_HOUR)
            .ok_or_else(|| error!(ContentLedgerError::ArithmeticOverflow))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::{code_of, error_code};

    pub(crate) fn empty_pricing() -> ContentPricing {
        ContentPricing {
            content_id: [0; 32],
            owner: Pubkey::default(),
            title: String::new(),
            pricing_model: PricingModel::Free,
            price: 0,
            subscription_period_days: 0,
            refund_window_hours: 0,
            created_at: 0,
            updated_at: 0,
            bump: 0,
        }
    }

    pub(crate) fn terms(model: u8, price: u64, period_days: u32, refund_hours: u32) -> PricingTerms {
        PricingTerms {
            title: "Field Recordings Vol. 1".to_string(),
            pricing_model: model,
            price,
            subscription_period_days: period_days,
            refund_window_hours: refund_hours,
        }
    }

    pub(crate) fn priced(model: u8, price: u64, period_days: u32, refund_hours: u32) -> ContentPricing {
        let mut pricing = empty_pricing();
        pricing
            .create([1; 32], Pubkey::new_unique(), terms(model, price, period_days, refund_hours), 0, 254)
            .unwrap();
        pricing
    }

    fn create_err(terms: PricingTerms) -> u32 {
        let mut pricing = empty_pricing();
        error_code(pricing.create([1; 32], Pubkey::new_unique(), terms, 0, 0).unwrap_err())
    }

    #[test]
    fn test_pricing_model_decoding() {
        assert_eq!(PricingModel::try_from(0).unwrap(), PricingModel::Free);
        assert_eq!(PricingModel::try_from(1).unwrap(), PricingModel::OneTimePurchase);
        assert_eq!(PricingModel::try_from(2).unwrap(), PricingModel::Subscription);
        assert_eq!(
            error_code(PricingModel::try_from(3).unwrap_err()),
            code_of(ContentLedgerError::InvalidPricingModel)
        );
    }

    #[test]
    fn test_create_validation() {
        assert_eq!(create_err(terms(7, 100, 0, 0)), code_of(ContentLedgerError::InvalidPricingModel));
        assert_eq!(create_err(terms(1, 0, 0, 0)), code_of(ContentLedgerError::InvalidPrice));
        assert_eq!(create_err(terms(2, 0, 30, 0)), code_of(ContentLedgerError::InvalidPrice));
        assert_eq!(create_err(terms(2, 100, 0, 0)), code_of(ContentLedgerError::InvalidSubscriptionPeriod));

        let mut long_title = terms(0, 0, 0, 0);
        long_title.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(create_err(long_title), code_of(ContentLedgerError::TitleTooLong));
    }

    #[test]
    fn test_free_content_accepts_zero_price() {
        let pricing = priced(0, 0, 0, 0);
        assert_eq!(pricing.pricing_model, PricingModel::Free);
        assert_eq!(pricing.price, 0);
    }

    #[test]
    fn test_create_overwrites_existing_record() {
        let mut pricing = priced(1, 500, 0, 24);
        let new_owner = Pubkey::new_unique();

        pricing.create([1; 32], new_owner, terms(2, 50, 7, 0), 900, 254).unwrap();
        assert_eq!(pricing.owner, new_owner);
        assert_eq!(pricing.created_at, 900);
        assert_eq!(pricing.pricing_model, PricingModel::Subscription);
    }

    #[test]
    fn test_update_preserves_owner_and_created_at() {
        let mut pricing = priced(1, 500, 0, 24);
        let owner = pricing.owner;

        pricing.update(&owner, terms(2, 75, 30, 0), 5_000).unwrap();
        assert_eq!(pricing.owner, owner);
        assert_eq!(pricing.created_at, 0);
        assert_eq!(pricing.updated_at, 5_000);
        assert_eq!(pricing.pricing_model, PricingModel::Subscription);
        assert_eq!(pricing.price, 75);
        assert_eq!(pricing.subscription_period_days, 30);
    }

    #[test]
    fn test_update_rejects_non_owner_and_invalid_terms() {
        let mut pricing = priced(1, 500, 0, 24);
        let owner = pricing.owner;

        let err = pricing.update(&Pubkey::new_unique(), terms(1, 10, 0, 0), 10).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::NotAuthorized));

        let err = pricing.update(&owner, terms(1, 0, 0, 0), 10).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::InvalidPrice));

        // Record untouched by failed updates
        assert_eq!(pricing.price, 500);
        assert_eq!(pricing.updated_at, 0);
    }

    #[test]
    fn test_creator_share_goes_to_owner_only() {
        let mut pricing = priced(1, 500, 0, 24);
        let owner = pricing.owner;
        pricing.require_owner(&owner).unwrap();

        let err = pricing.require_owner(&Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::InvalidRecipient));

        // Overwriting the row moves the recipient to the new owner
        let new_owner = Pubkey::new_unique();
        pricing.create([1; 32], new_owner, terms(1, 500, 0, 24), 900, 254).unwrap();
        let err = pricing.require_owner(&owner).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::InvalidRecipient));
        pricing.require_owner(&new_owner).unwrap();
    }

    #[test]
    fn test_time_conversions() {
        let pricing = priced(2, 100, 7, 48);
        assert_eq!(pricing.period_seconds().unwrap(), 7 * 86_400);
        assert_eq!(pricing.refund_window_seconds().unwrap(), 48 * 3_600);
    }
}
