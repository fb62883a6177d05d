use anchor_lang::prelude::*;
use crate::errors::ContentLedgerError;
use crate::state::fee_policy::FeeQuote;

pub const VAULT_SEED: &[u8] = b"vault";

/// Program custody for payments and refunds
/// PDA seeds: ["vault"]
///
/// Payments land here and are disbursed to admin and owner in the same
/// instruction. Refunds are paid back out of whatever the vault holds above
/// its rent-exempt reserve, so a purchase followed by a refund leaves the
/// vault short by the amount already disbursed.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// Lamports received from buyers, subscribers and deposits
    pub total_received: u64,
    /// Lamports paid out as platform and creator shares
    pub total_disbursed: u64,
    /// Lamports returned to buyers
    pub total_refunded: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Vault {
    /// Lamports that can leave the vault without touching the rent reserve
    pub fn available(lamports: u64, rent_reserve: u64) -> u64 {
        lamports.saturating_sub(rent_reserve)
    }

    pub fn ensure_available(lamports: u64, rent_reserve: u64, amount: u64) -> Result<()> {
        require!(
            Self::available(lamports, rent_reserve) >= amount,
            ContentLedgerError::InsufficientFunds
        );
        Ok(())
    }

    /// A payer must hold the whole amount before anything moves
    pub fn ensure_payer_funds(payer_lamports: u64, amount: u64) -> Result<()> {
        require!(payer_lamports >= amount, ContentLedgerError::InsufficientFunds);
        Ok(())
    }

    /// Vault balance after paying out `amount` without dipping into the reserve
    pub fn debit(lamports: u64, rent_reserve: u64, amount: u64) -> Result<u64> {
        Self::ensure_available(lamports, rent_reserve, amount)?;
        lamports
            .checked_sub(amount)
            .ok_or_else(|| error!(ContentLedgerError::InsufficientFunds))
    }

    /// Balance of an account after receiving `amount`
    pub fn credit(lamports: u64, amount: u64) -> Result<u64> {
        checked_total(lamports, amount)
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_received = checked_total(self.total_received, amount)?;
        Ok(())
    }

    /// A payment that was received and split in full
    pub fn record_payment(&mut self, quote: &FeeQuote) -> Result<()> {
        let amount = checked_total(quote.platform_share, quote.creator_share)?;
        self.total_received = checked_total(self.total_received, amount)?;
        self.total_disbursed = checked_total(self.total_disbursed, amount)?;
        Ok(())
    }

    pub fn record_refund(&mut self, amount: u64) -> Result<()> {
        self.total_refunded = checked_total(self.total_refunded, amount)?;
        Ok(())
    }
}

fn checked_total(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| error!(ContentLedgerError::ArithmeticOverflow))
}
