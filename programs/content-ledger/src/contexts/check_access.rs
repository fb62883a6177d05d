use anchor_lang::prelude::*;
use crate::access::has_access;
use crate::state::*;
use crate::utils::load_record;

/// Read-only access check for the content delivery layer.
/// Records that were never created count as absent.
#[derive(Accounts)]
#[instruction(content_id: [u8; 32], account: Pubkey)]
pub struct CheckAccess<'info> {
    /// CHECK: May be uninitialized (content missing -> no access)
    #[account(
        seeds = [CONTENT_PRICING_SEED, content_id.as_ref()],
        bump
    )]
    pub content_pricing: UncheckedAccount<'info>,

    /// CHECK: May be uninitialized
    #[account(
        seeds = [PURCHASE_SEED, content_id.as_ref(), account.as_ref()],
        bump
    )]
    pub purchase: UncheckedAccount<'info>,

    /// CHECK: May be uninitialized
    #[account(
        seeds = [SUBSCRIPTION_SEED, content_id.as_ref(), account.as_ref()],
        bump
    )]
    pub subscription: UncheckedAccount<'info>,
}

pub fn handle_check_access(
    ctx: Context<CheckAccess>,
    _content_id: [u8; 32],
    account: Pubkey,
) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;

    let pricing = load_record::<ContentPricing>(&ctx.accounts.content_pricing)?;
    let purchase = load_record::<Purchase>(&ctx.accounts.purchase)?;
    let subscription = load_record::<Subscription>(&ctx.accounts.subscription)?;

    let granted = has_access(pricing.as_ref(), purchase.as_ref(), subscription.as_ref(), now);
    msg!("Access for {}: {}", account, granted);

    Ok(granted)
}
