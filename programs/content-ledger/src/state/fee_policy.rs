use anchor_lang::prelude::*;
use crate::errors::ContentLedgerError;

pub const FEE_POLICY_SEED: &[u8] = b"fee_policy";

/// Fee rates in basis points (100 = 1%, 10000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;
/// Platform fee applied at deployment: 2.5%
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 250;
/// Hard ceiling on the platform fee: 10%
pub const MAX_PLATFORM_FEE_BPS: u16 = 1000;

/// Split of a single payment between the platform and the content owner
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeQuote {
    pub platform_share: u64,
    pub creator_share: u64,
}

/// Platform fee policy
/// PDA seeds: ["fee_policy"]
/// Only one instance exists, controlled by admin
#[account]
#[derive(InitSpace)]
pub struct FeePolicy {
    /// Admin who can change the fee rate and hand over the role
    pub admin: Pubkey,
    /// Platform fee in basis points (0-1000)
    pub platform_fee_bps: u16,
    /// Timestamp when the policy was created
    pub created_at: i64,
    /// Timestamp of the last fee or admin change
    pub updated_at: i64,
    pub bump: u8,
}

impl FeePolicy {
    pub fn validate_fee(bps: u16) -> bool {
        bps <= MAX_PLATFORM_FEE_BPS
    }

    /// Split a payment at the given rate.
    /// The platform share is floored; the creator absorbs the remainder so
    /// platform_share + creator_share == payment.
    /// Rates above 100% are treated as 100%.
    pub fn quote(payment: u64, fee_bps: u16) -> FeeQuote {
        let fee_bps = (fee_bps as u64).min(BPS_DENOMINATOR);
        let platform_share = (payment as u128 * fee_bps as u128 / BPS_DENOMINATOR as u128) as u64;
        FeeQuote {
            platform_share,
            creator_share: payment - platform_share,
        }
    }

    pub fn quote_fee(&self, payment: u64) -> FeeQuote {
        Self::quote(payment, self.platform_fee_bps)
    }

    pub fn initialize(&mut self, admin: Pubkey, now: i64, bump: u8) {
        self.admin = admin;
        self.platform_fee_bps = DEFAULT_PLATFORM_FEE_BPS;
        self.created_at = now;
        self.updated_at = now;
        self.bump = bump;
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, ContentLedgerError::NotAuthorized);
        Ok(())
    }

    /// The platform share may only be paid to the current admin
    pub fn require_admin_recipient(&self, recipient: &Pubkey) -> Result<()> {
        require_keys_eq!(*recipient, self.admin, ContentLedgerError::InvalidRecipient);
        Ok(())
    }

    /// Replace the fee rate. Returns the previous rate.
    pub fn set_fee_rate(&mut self, caller: &Pubkey, new_bps: u16, now: i64) -> Result<u16> {
        self.require_admin(caller)?;
        require!(Self::validate_fee(new_bps), ContentLedgerError::InvalidFee);

        let old_bps = self.platform_fee_bps;
        self.platform_fee_bps = new_bps;
        self.updated_at = now;
        Ok(old_bps)
    }

    /// Hand the admin role to `new_admin`. Takes effect immediately.
    pub fn transfer_admin(&mut self, caller: &Pubkey, new_admin: Pubkey, now: i64) -> Result<Pubkey> {
        self.require_admin(caller)?;

        let old_admin = self.admin;
        self.admin = new_admin;
        self.updated_at = now;
        Ok(old_admin)
    }
}
