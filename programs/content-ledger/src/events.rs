use anchor_lang::prelude::*;
use crate::state::FeeQuote;

// ============================================================================
// FEE POLICY EVENTS
// ============================================================================

#[event]
pub struct FeePolicyInitialized {
    pub admin: Pubkey,
    pub platform_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct FeeRateUpdated {
    pub admin: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

#[event]
pub struct ContentPricingCreated {
    pub content_id: [u8; 32],
    pub owner: Pubkey,
    /// 0 = free, 1 = one-time purchase, 2 = subscription
    pub pricing_model: u8,
    pub price: u64,
    pub subscription_period_days: u32,
    pub refund_window_hours: u32,
    pub timestamp: i64,
}

#[event]
pub struct ContentPricingUpdated {
    pub content_id: [u8; 32],
    pub owner: Pubkey,
    pub pricing_model: u8,
    pub price: u64,
    pub subscription_period_days: u32,
    pub refund_window_hours: u32,
    pub timestamp: i64,
}

// ============================================================================
// PAYMENT EVENTS
// ============================================================================

/// Breakdown of a payment routed through the vault
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct FeeSplit {
    /// Admin share (lamports)
    pub platform_share: u64,
    /// Content owner share (lamports)
    pub creator_share: u64,
}

impl From<FeeQuote> for FeeSplit {
    fn from(quote: FeeQuote) -> Self {
        FeeSplit {
            platform_share: quote.platform_share,
            creator_share: quote.creator_share,
        }
    }
}

#[event]
pub struct ContentPurchased {
    pub content_id: [u8; 32],
    pub buyer: Pubkey,
    pub owner: Pubkey,
    pub price: u64,
    pub split: FeeSplit,
    pub timestamp: i64,
}

/// Emitted when a buyer is refunded from the vault.
/// Shares disbursed at purchase time are not reclaimed.
#[event]
pub struct PurchaseRefunded {
    pub content_id: [u8; 32],
    pub buyer: Pubkey,
    pub amount: u64,
    pub purchased_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct Subscribed {
    pub content_id: [u8; 32],
    pub subscriber: Pubkey,
    pub owner: Pubkey,
    pub price: u64,
    pub split: FeeSplit,
    pub auto_renew: bool,
    pub start_at: i64,
    pub end_at: i64,
}

#[event]
pub struct SubscriptionRenewed {
    pub content_id: [u8; 32],
    pub subscriber: Pubkey,
    pub owner: Pubkey,
    pub price: u64,
    pub split: FeeSplit,
    pub previous_end_at: i64,
    pub end_at: i64,
}

#[event]
pub struct AutoRenewCancelled {
    pub content_id: [u8; 32],
    pub subscriber: Pubkey,
    /// Access continues until this time
    pub end_at: i64,
    pub timestamp: i64,
}
