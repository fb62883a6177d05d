use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ContentLedgerError;
use crate::events::{ContentPurchased, FeeSplit, PurchaseRefunded};
use crate::utils::{disburse_from_vault, load_record, settle_payment, store_record};

// ============================================================================
// PURCHASE
// ============================================================================

/// One-time purchase: buyer pays the vault, vault splits to admin and owner
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct PurchaseContent<'info> {
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

    /// Buyer's purchase record for this content
    /// Reused after a refund
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Purchase::INIT_SPACE,
        seeds = [PURCHASE_SEED, content_id.as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub purchase: Account<'info, Purchase>,

    /// CHECK: Platform share recipient, verified against fee_policy.admin in handler
    #[account(mut)]
    pub admin: UncheckedAccount<'info>,

    /// CHECK: Creator share recipient, verified against content_pricing.owner in handler
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_purchase_content(ctx: Context<PurchaseContent>, content_id: [u8; 32]) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let buyer = ctx.accounts.buyer.key();

    let pricing = load_record::<ContentPricing>(&ctx.accounts.content_pricing)?
        .ok_or_else(|| error!(ContentLedgerError::NotFound))?;
    pricing.require_model(PricingModel::OneTimePurchase)?;
    ctx.accounts.purchase.ensure_can_purchase()?;

    let price = pricing.price;
    let quote = settle_payment(
        &ctx.accounts.fee_policy,
        &pricing,
        &ctx.accounts.buyer,
        &mut ctx.accounts.vault,
        &ctx.accounts.admin,
        &ctx.accounts.owner,
        &ctx.accounts.system_program,
    )?;

    let bump = ctx.bumps.purchase;
    ctx.accounts.purchase.record(content_id, buyer, price, timestamp, bump)?;

    msg!("Content purchased by {} for {} lamports", buyer, price);
    msg!("  Platform: {}, creator: {}", quote.platform_share, quote.creator_share);

    emit!(ContentPurchased {
        content_id,
        buyer,
        owner: pricing.owner,
        price,
        split: FeeSplit::from(quote),
        timestamp,
    });

    Ok(())
}

// ============================================================================
// REFUND
// ============================================================================

/// Refund the full price paid, from the vault, inside the refund window.
/// Shares already disbursed to admin and owner are not reclaimed.
#[derive(Accounts)]
#[instruction(content_id: [u8; 32])]
pub struct RequestRefund<'info> {
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

    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        mut,
        seeds = [PURCHASE_SEED, content_id.as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub purchase: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,
}

pub fn handle_request_refund(ctx: Context<RequestRefund>, content_id: [u8; 32]) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let buyer = ctx.accounts.buyer.key();

    let mut purchase = load_record::<Purchase>(&ctx.accounts.purchase)?
        .filter(Purchase::is_recorded)
        .ok_or_else(|| error!(ContentLedgerError::NotFound))?;
    require!(!purchase.refunded, ContentLedgerError::AlreadyRefunded);

    let pricing = load_record::<ContentPricing>(&ctx.accounts.content_pricing)?
        .ok_or_else(|| error!(ContentLedgerError::NotFound))?;
    let amount = purchase.refund(pricing.refund_window_seconds()?, timestamp)?;

    disburse_from_vault(&ctx.accounts.vault, &ctx.accounts.buyer, amount)?;
    ctx.accounts.vault.record_refund(amount)?;
    store_record(&ctx.accounts.purchase, &purchase)?;

    msg!("Refunded {} lamports to buyer {}", amount, buyer);

    emit!(PurchaseRefunded {
        content_id,
        buyer,
        amount,
        purchased_at: purchase.purchased_at,
        timestamp,
    });

    Ok(())
}

// ============================================================================
// VIEW
// ============================================================================

#[derive(Accounts)]
#[instruction(content_id: [u8; 32], account: Pubkey)]
pub struct ReadPurchase<'info> {
    /// CHECK: Loaded in handler so a missing record surfaces as NotFound
    #[account(
        seeds = [PURCHASE_SEED, content_id.as_ref(), account.as_ref()],
        bump
    )]
    pub purchase: UncheckedAccount<'info>,
}

pub fn handle_get_purchase(
    ctx: Context<ReadPurchase>,
    _content_id: [u8; 32],
    _account: Pubkey,
) -> Result<Purchase> {
    load_record::<Purchase>(&ctx.accounts.purchase)?
        .filter(Purchase::is_recorded)
        .ok_or_else(|| error!(ContentLedgerError::NotFound))
}
