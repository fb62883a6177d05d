use anchor_lang::prelude::*;

pub mod state;
pub mod errors;
pub mod events;
pub mod access;
pub mod contexts;
pub mod utils;

pub use contexts::*;
use state::{ContentPricing, FeeQuote, PricingTerms, Purchase, Subscription};

declare_id!("Em2p7a6Tas3hgiVTXC7jxkXcnnNtCWc399KmeBDhtdeh");

#[program]
pub mod content_ledger {
    use super::*;

    // ============================================
    // FEE POLICY
    // ============================================

    /// Create the fee policy (default rate, signer as admin) and custody vault
    pub fn initialize_fee_policy(ctx: Context<InitializeFeePolicy>) -> Result<()> {
        contexts::fee_policy::handle_initialize_fee_policy(ctx)
    }

    /// Change the platform fee (admin only, max 1000 bps)
    pub fn set_fee_rate(ctx: Context<UpdateFeePolicy>, new_fee_bps: u16) -> Result<()> {
        contexts::fee_policy::handle_set_fee_rate(ctx, new_fee_bps)
    }

    /// Hand the admin role to another account (admin only, immediate)
    pub fn transfer_admin(ctx: Context<UpdateFeePolicy>, new_admin: Pubkey) -> Result<()> {
        contexts::fee_policy::handle_transfer_admin(ctx, new_admin)
    }

    /// Deposit lamports into custody
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        contexts::fee_policy::handle_fund_vault(ctx, amount)
    }

    pub fn get_platform_fee_rate(ctx: Context<ReadFeePolicy>) -> Result<u16> {
        contexts::fee_policy::handle_get_platform_fee_rate(ctx)
    }

    pub fn quote_fee(ctx: Context<ReadFeePolicy>, payment: u64) -> Result<FeeQuote> {
        contexts::fee_policy::handle_quote_fee(ctx, payment)
    }

    // ============================================
    // CONTENT PRICING
    // ============================================

    /// Create pricing for a content id; the signer becomes owner
    /// pricing_model: 0 = free, 1 = one-time purchase, 2 = subscription
    pub fn create_content_pricing(
        ctx: Context<CreateContentPricing>,
        content_id: [u8; 32],
        title: String,
        pricing_model: u8,
        price: u64,
        subscription_period_days: u32,
        refund_window_hours: u32,
    ) -> Result<()> {
        let terms = PricingTerms {
            title,
            pricing_model,
            price,
            subscription_period_days,
            refund_window_hours,
        };
        contexts::pricing::handle_create_content_pricing(ctx, content_id, terms)
    }

    /// Update pricing (owner only)
    pub fn update_content_pricing(
        ctx: Context<UpdateContentPricing>,
        content_id: [u8; 32],
        title: String,
        pricing_model: u8,
        price: u64,
        subscription_period_days: u32,
        refund_window_hours: u32,
    ) -> Result<()> {
        let terms = PricingTerms {
            title,
            pricing_model,
            price,
            subscription_period_days,
            refund_window_hours,
        };
        contexts::pricing::handle_update_content_pricing(ctx, content_id, terms)
    }

    pub fn get_content_pricing(
        ctx: Context<ReadContentPricing>,
        content_id: [u8; 32],
    ) -> Result<ContentPricing> {
        contexts::pricing::handle_get_content_pricing(ctx, content_id)
    }

    // ============================================
    // PURCHASES
    // ============================================

    /// Buy one-time access; price is split between admin and owner
    pub fn purchase_content(ctx: Context<PurchaseContent>, content_id: [u8; 32]) -> Result<()> {
        contexts::purchase::handle_purchase_content(ctx, content_id)
    }

    /// Refund the full price paid while the refund window is open
    pub fn request_refund(ctx: Context<RequestRefund>, content_id: [u8; 32]) -> Result<()> {
        contexts::purchase::handle_request_refund(ctx, content_id)
    }

    pub fn get_purchase(
        ctx: Context<ReadPurchase>,
        content_id: [u8; 32],
        account: Pubkey,
    ) -> Result<Purchase> {
        contexts::purchase::handle_get_purchase(ctx, content_id, account)
    }

    // ============================================
    // SUBSCRIPTIONS
    // ============================================

    pub fn subscribe(
        ctx: Context<Subscribe>,
        content_id: [u8; 32],
        auto_renew: bool,
    ) -> Result<()> {
        contexts::subscription::handle_subscribe(ctx, content_id, auto_renew)
    }

    /// Extend the subscription by one period counted from now
    pub fn renew_subscription(ctx: Context<RenewSubscription>, content_id: [u8; 32]) -> Result<()> {
        contexts::subscription::handle_renew_subscription(ctx, content_id)
    }

    pub fn cancel_auto_renew(ctx: Context<CancelAutoRenew>, content_id: [u8; 32]) -> Result<()> {
        contexts::subscription::handle_cancel_auto_renew(ctx, content_id)
    }

    pub fn get_subscription(
        ctx: Context<ReadSubscription>,
        content_id: [u8; 32],
        account: Pubkey,
    ) -> Result<Subscription> {
        contexts::subscription::handle_get_subscription(ctx, content_id, account)
    }

    // ============================================
    // ACCESS
    // ============================================

    /// Whether `account` may consume the content right now
    pub fn check_access(
        ctx: Context<CheckAccess>,
        content_id: [u8; 32],
        account: Pubkey,
    ) -> Result<bool> {
        contexts::check_access::handle_check_access(ctx, content_id, account)
    }
}
