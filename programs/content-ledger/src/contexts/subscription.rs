use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ContentLedgerError;
use crate::events::{AutoRenewCancelled, FeeSplit, Subscribed, SubscriptionRenewed};
use crate::utils::{load_record, settle_payment, store_record};

// ============================================================================
// SUBSCRIBE
// ============================================================================

/// Start (or restart) a subscription for one period
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct Subscribe<'info> {
    #[account(
        seeds = [FEE_POLICY_SEED],
        bump = fee_policy.bump
    )]
    pub fee_policy: Account<'info, FeePolicy>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        seeds = [CONTENT_PRICING_SEED, content_id.as_ref()],
        bump
    )]
    pub content_pricing: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = subscriber,
        space = 8 + Subscription::INIT_SPACE,
        seeds = [SUBSCRIPTION_SEED, content_id.as_ref(), subscriber.key().as_ref()],
        bump
    )]
    pub subscription: Account<'info, Subscription>,

    /// CHECK: Platform share recipient, verified against fee_policy.admin in handler
    #[account(mut)]
    pub admin: UncheckedAccount<'info>,

    /// CHECK: Creator share recipient, verified against content_pricing.owner in handler
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub subscriber: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_subscribe(
    ctx: Context<Subscribe>,
    content_id: [u8; 32],
    auto_renew: bool,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let subscriber = ctx.accounts.subscriber.key();

    let pricing = load_record::<ContentPricing>(&ctx.accounts.content_pricing)?
        .ok_or_else(|| error!(ContentLedgerError::NotFound))?;
    pricing.require_model(PricingModel::Subscription)?;

    let price = pricing.price;
    let period_seconds = pricing.period_seconds()?;
    let quote = settle_payment(
        &ctx.accounts.fee_policy,
        &pricing,
        &ctx.accounts.subscriber,
        &mut ctx.accounts.vault,
        &ctx.accounts.admin,
        &ctx.accounts.owner,
        &ctx.accounts.system_program,
    )?;

    let bump = ctx.bumps.subscription;
    let subscription = &mut ctx.accounts.subscription;
    subscription.start(
        content_id,
        subscriber,
        price,
        period_seconds,
        auto_renew,
        timestamp,
        bump,
    )?;

    msg!("Subscribed {} until {}", subscriber, subscription.end_at);

    emit!(Subscribed {
        content_id,
        subscriber,
        owner: pricing.owner,
        price,
        split: FeeSplit::from(quote),
        auto_renew,
        start_at: subscription.start_at,
        end_at: subscription.end_at,
    });

    Ok(())
}

// ============================================================================
// RENEW
// ============================================================================

/// Pay for another period, counted from now
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct RenewSubscription<'info> {
    #[account(
        seeds = [FEE_POLICY_SEED],
        bump = fee_policy.bump
    )]
    pub fee_policy: Account<'info, FeePolicy>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        seeds = [CONTENT_PRICING_SEED, content_id.as_ref()],
        bump
    )]
    pub content_pricing: UncheckedAccount<'info>,

    /// CHECK: Loaded in handler so a missing record surfaces as NoActiveSubscription
    #[account(
        mut,
        seeds = [SUBSCRIPTION_SEED, content_id.as_ref(), subscriber.key().as_ref()],
        bump
    )]
    pub subscription: UncheckedAccount<'info>,

    /// CHECK: Platform share recipient, verified against fee_policy.admin in handler
    #[account(mut)]
    pub admin: UncheckedAccount<'info>,

    /// CHECK: Creator share recipient, verified against content_pricing.owner in handler
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub subscriber: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_renew_subscription(ctx: Context<RenewSubscription>, content_id: [u8; 32]) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let subscriber = ctx.accounts.subscriber.key();

    let pricing = load_record::<ContentPricing>(&ctx.accounts.content_pricing)?
        .ok_or_else(|| error!(ContentLedgerError::NotFound))?;
    let mut subscription = load_record::<Subscription>(&ctx.accounts.subscription)?
        .filter(Subscription::is_recorded)
        .ok_or_else(|| error!(ContentLedgerError::NoActiveSubscription))?;
    pricing.require_model(PricingModel::Subscription)?;

    let price = pricing.price;
    let period_seconds = pricing.period_seconds()?;
    let quote = settle_payment(
        &ctx.accounts.fee_policy,
        &pricing,
        &ctx.accounts.subscriber,
        &mut ctx.accounts.vault,
        &ctx.accounts.admin,
        &ctx.accounts.owner,
        &ctx.accounts.system_program,
    )?;

    let previous_end_at = subscription.end_at;
    subscription.renew(price, period_seconds, timestamp)?;
    store_record(&ctx.accounts.subscription, &subscription)?;

    msg!("Subscription renewed by {}: {} -> {}", subscriber, previous_end_at, subscription.end_at);

    emit!(SubscriptionRenewed {
        content_id,
        subscriber,
        owner: pricing.owner,
        price,
        split: FeeSplit::from(quote),
        previous_end_at,
        end_at: subscription.end_at,
    });

    Ok(())
}

// ============================================================================
// CANCEL AUTO-RENEW
// ============================================================================

/// Stop future renewals; paid-for access runs to end_at
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct CancelAutoRenew<'info> {
    /// CHECK: Loaded in handler so a missing record surfaces as NoActiveSubscription
    #[account(
        mut,
        seeds = [SUBSCRIPTION_SEED, content_id.as_ref(), subscriber.key().as_ref()],
        bump
    )]
    pub subscription: UncheckedAccount<'info>,

    pub subscriber: Signer<'info>,
}

pub fn handle_cancel_auto_renew(ctx: Context<CancelAutoRenew>, content_id: [u8; 32]) -> Result<()> {
    let subscriber = ctx.accounts.subscriber.key();

    let mut subscription = load_record::<Subscription>(&ctx.accounts.subscription)?
        .ok_or_else(|| error!(ContentLedgerError::NoActiveSubscription))?;
    subscription.cancel_auto_renew()?;
    store_record(&ctx.accounts.subscription, &subscription)?;

    msg!("Auto-renew cancelled by {}", subscriber);

    emit!(AutoRenewCancelled {
        content_id,
        subscriber,
        end_at: subscription.end_at,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

// ============================================================================
// VIEW
// ============================================================================

#[derive(Accounts)]
#[instruction(content_id: [u8; 32], account: Pubkey)]
pub struct ReadSubscription<'info> {
    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        seeds = [SUBSCRIPTION_SEED, content_id.as_ref(), account.as_ref()],
        bump
    )]
    pub subscription: UncheckedAccount<'info>,
}

pub fn handle_get_subscription(
    ctx: Context<ReadSubscription>,
    _content_id: [u8; 32],
    _account: Pubkey,
) -> Result<Subscription> {
    load_record::<Subscription>(&ctx.accounts.subscription)?
        .filter(Subscription::is_recorded)
        .ok_or_else(|| error!(ContentLedgerError::NotFound))
}
