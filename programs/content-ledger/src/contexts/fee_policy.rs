use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ContentLedgerError;
use crate::events::{AdminTransferred, FeePolicyInitialized, FeeRateUpdated, VaultFunded};
use crate::utils::collect_into_vault;

// ============================================================================
// INITIALIZE (once, at deployment)
// ============================================================================

/// Create the fee policy and the custody vault.
/// The deploying signer becomes admin and funds the vault's rent reserve.
#[derive(Accounts)]
pub struct InitializeFeePolicy<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + FeePolicy::INIT_SPACE,
        seeds = [FEE_POLICY_SEED],
        bump
    )]
    pub fee_policy: Account<'info, FeePolicy>,

    #[account(
        init,
        payer = admin,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_fee_policy(ctx: Context<InitializeFeePolicy>) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let fee_policy = &mut ctx.accounts.fee_policy;
    fee_policy.initialize(admin, timestamp, ctx.bumps.fee_policy);

    let vault = &mut ctx.accounts.vault;
    vault.total_received = 0;
    vault.total_disbursed = 0;
    vault.total_refunded = 0;
    vault.created_at = timestamp;
    vault.bump = ctx.bumps.vault;

    msg!("Fee policy initialized, admin: {}", admin);
    msg!("  Platform fee: {} bps", fee_policy.platform_fee_bps);

    emit!(FeePolicyInitialized {
        admin,
        platform_fee_bps: fee_policy.platform_fee_bps,
        timestamp,
    });

    Ok(())
}

// ============================================================================
// ADMIN OPERATIONS
// ============================================================================

/// Admin-gated fee policy change (fee rate or admin handover)
#[derive(Accounts)]
pub struct UpdateFeePolicy<'info> {
    #[account(
        mut,
        seeds = [FEE_POLICY_SEED],
        bump = fee_policy.bump
    )]
    pub fee_policy: Account<'info, FeePolicy>,

    pub admin: Signer<'info>,
}

pub fn handle_set_fee_rate(ctx: Context<UpdateFeePolicy>, new_fee_bps: u16) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let old_fee_bps = ctx.accounts.fee_policy.set_fee_rate(&admin, new_fee_bps, timestamp)?;

    msg!("Platform fee changed: {} -> {} bps", old_fee_bps, new_fee_bps);

    emit!(FeeRateUpdated {
        admin,
        old_fee_bps,
        new_fee_bps,
        timestamp,
    });

    Ok(())
}

pub fn handle_transfer_admin(ctx: Context<UpdateFeePolicy>, new_admin: Pubkey) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.admin.key();

    let old_admin = ctx.accounts.fee_policy.transfer_admin(&caller, new_admin, timestamp)?;

    msg!("Admin transferred: {} -> {}", old_admin, new_admin);

    emit!(AdminTransferred {
        old_admin,
        new_admin,
        timestamp,
    });

    Ok(())
}

// ============================================================================
// VAULT FUNDING
// ============================================================================

/// Deposit lamports into custody (covers refunds of already-disbursed payments)
#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, ContentLedgerError::InvalidAmount);

    collect_into_vault(
        &ctx.accounts.funder,
        &ctx.accounts.vault,
        &ctx.accounts.system_program,
        amount,
    )?;
    ctx.accounts.vault.record_deposit(amount)?;

    msg!("Vault funded with {} lamports by {}", amount, ctx.accounts.funder.key());

    emit!(VaultFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

// ============================================================================
// VIEWS
// ============================================================================

#[derive(Accounts)]
pub struct ReadFeePolicy<'info> {
    #[account(
        seeds = [FEE_POLICY_SEED],
        bump = fee_policy.bump
    )]
    pub fee_policy: Account<'info, FeePolicy>,
}

pub fn handle_get_platform_fee_rate(ctx: Context<ReadFeePolicy>) -> Result<u16> {
    Ok(ctx.accounts.fee_policy.platform_fee_bps)
}

pub fn handle_quote_fee(ctx: Context<ReadFeePolicy>, payment: u64) -> Result<FeeQuote> {
    Ok(ctx.accounts.fee_policy.quote_fee(payment))
}
