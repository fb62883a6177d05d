use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ContentLedgerError;
use crate::events::{ContentPricingCreated, ContentPricingUpdated};
use crate::utils::{load_record, store_record};

/// Create pricing for a content id. The signer becomes owner.
/// An existing record at the same id is overwritten.
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct CreateContentPricing<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + ContentPricing::INIT_SPACE,
        seeds = [CONTENT_PRICING_SEED, content_id.as_ref()],
        bump
    )]
    pub content_pricing: Account<'info, ContentPricing>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_create_content_pricing(
    ctx: Context<CreateContentPricing>,
    content_id: [u8; 32],
    terms: PricingTerms,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let pricing = &mut ctx.accounts.content_pricing;
    pricing.create(content_id, owner, terms, timestamp, ctx.bumps.content_pricing)?;

    msg!("Content pricing created by {}", owner);
    msg!("  Model: {:?}, price: {} lamports", pricing.pricing_model, pricing.price);

    emit!(ContentPricingCreated {
        content_id,
        owner,
        pricing_model: pricing.pricing_model as u8,
        price: pricing.price,
        subscription_period_days: pricing.subscription_period_days,
        refund_window_hours: pricing.refund_window_hours,
        timestamp,
    });

    Ok(())
}

/// Owner-only pricing update
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct UpdateContentPricing<'info> {
    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        mut,
        seeds = [CONTENT_PRICING_SEED, content_id.as_ref()],
        bump
    )]
    pub content_pricing: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

pub fn handle_update_content_pricing(
    ctx: Context<UpdateContentPricing>,
    content_id: [u8; 32],
    terms: PricingTerms,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.owner.key();

    let mut pricing = load_record::<ContentPricing>(&ctx.accounts.content_pricing)?
        .ok_or_else(|| error!(ContentLedgerError::NotFound))?;
    pricing.update(&caller, terms, timestamp)?;
    store_record(&ctx.accounts.content_pricing, &pricing)?;

    msg!("Content pricing updated by {}", caller);

    emit!(ContentPricingUpdated {
        content_id,
        owner: pricing.owner,
        pricing_model: pricing.pricing_model as u8,
        price: pricing.price,
        subscription_period_days: pricing.subscription_period_days,
        refund_window_hours: pricing.refund_window_hours,
        timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct ReadContentPricing<'info> {
    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        seeds = [CONTENT_PRICING_SEED, content_id.as_ref()],
        bump
    )]
    pub content_pricing: UncheckedAccount<'info>,
}

pub fn handle_get_content_pricing(
    ctx: Context<ReadContentPricing>,
    _content_id: [u8; 32],
) -> Result<ContentPricing> {
    load_record::<ContentPricing>(&ctx.accounts.content_pricing)?
        .ok_or_else(|| error!(ContentLedgerError::NotFound))
}
