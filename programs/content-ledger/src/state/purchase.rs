use anchor_lang::prelude::*;
use crate::errors::ContentLedgerError;

pub const PURCHASE_SEED: &[u8] = b"purchase";

/// One-time purchase of a content item by a buyer
/// PDA seeds: ["purchase", content_id, buyer]
/// At most one live (non-refunded) record per pair; a refunded record is
/// overwritten on repurchase.
#[account]
#[derive(InitSpace)]
pub struct Purchase {
    pub content_id: [u8; 32],
    pub buyer: Pubkey,
    /// Lamports paid at purchase time (refunded in full)
    pub price_paid: u64,
    pub purchased_at: i64,
    /// Monotone false -> true for a given purchase
    pub refunded: bool,
    pub bump: u8,
}

impl Purchase {
    /// Freshly allocated accounts are zeroed and carry no buyer
    pub fn is_recorded(&self) -> bool {
        self.buyer != Pubkey::default()
    }

    pub fn is_live(&self) -> bool {
        self.is_recorded() && !self.refunded
    }

    pub fn ensure_can_purchase(&self) -> Result<()> {
        require!(!self.is_live(), ContentLedgerError::AlreadyPurchased);
        Ok(())
    }

    pub fn record(&mut self, content_id: [u8; 32], buyer: Pubkey, price_paid: u64, now: i64, bump: u8) -> Result<()> {
        self.ensure_can_purchase()?;

        self.content_id = content_id;
        self.buyer = buyer;
        self.price_paid = price_paid;
        self.purchased_at = now;
        self.refunded = false;
        self.bump = bump;
        Ok(())
    }

    /// Last ledger time at which a refund is still accepted (inclusive)
    pub fn refund_deadline(&self, refund_window_seconds: i64) -> Result<i64> {
        self.purchased_at
            .checked_add(refund_window_seconds)
            .ok_or_else(|| error!(ContentLedgerError::ArithmeticOverflow))
    }

    /// Mark the purchase refunded if the window allows it.
    /// Returns the lamports owed back to the buyer.
    pub fn refund(&mut self, refund_window_seconds: i64, now: i64) -> Result<u64> {
        require!(!self.refunded, ContentLedgerError::AlreadyRefunded);
        require!(refund_window_seconds > 0, ContentLedgerError::RefundDisabled);
        let deadline = self.refund_deadline(refund_window_seconds)?;
        require!(now <= deadline, ContentLedgerError::RefundExpired);

        self.refunded = true;
        Ok(self.price_paid)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::{code_of, error_code};
    use crate::state::SECONDS_PER_HOUR;

    pub(crate) fn empty_purchase() -> Purchase {
        Purchase {
            content_id: [0; 32],
            buyer: Pubkey::default(),
            price_paid: 0,
            purchased_at: 0,
            refunded: false,
            bump: 0,
        }
    }

    pub(crate) fn purchased(price: u64, at: i64) -> Purchase {
        let mut purchase = empty_purchase();
        purchase.record([1; 32], Pubkey::new_unique(), price, at, 253).unwrap();
        purchase
    }

    #[test]
    fn test_fresh_account_is_not_recorded() {
        let purchase = empty_purchase();
        assert!(!purchase.is_recorded());
        assert!(!purchase.is_live());
        purchase.ensure_can_purchase().unwrap();
    }

    #[test]
    fn test_repurchase_while_live_fails() {
        let mut purchase = purchased(1000, 10);
        let buyer = purchase.buyer;

        let err = purchase.record([1; 32], buyer, 1000, 20, 253).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::AlreadyPurchased));
        assert_eq!(purchase.purchased_at, 10);
    }

    #[test]
    fn test_repurchase_after_refund_succeeds() {
        let window = 24 * SECONDS_PER_HOUR;
        let mut purchase = purchased(1000, 10);
        let buyer = purchase.buyer;

        assert_eq!(purchase.refund(window, 11).unwrap(), 1000);
        assert!(!purchase.is_live());

        purchase.record([1; 32], buyer, 1200, 12, 253).unwrap();
        assert!(purchase.is_live());
        assert_eq!(purchase.price_paid, 1200);
        assert_eq!(purchase.purchased_at, 12);
    }

    #[test]
    fn test_refund_window_boundary_is_inclusive() {
        let window = 48 * SECONDS_PER_HOUR;
        let purchase = purchased(1000, 1_000);
        let deadline = purchase.refund_deadline(window).unwrap();
        assert_eq!(deadline, 1_000 + 48 * 3_600);

        let mut at_deadline = purchase.clone();
        assert_eq!(at_deadline.refund(window, deadline).unwrap(), 1000);
        assert!(at_deadline.refunded);

        let mut after_deadline = purchase.clone();
        let err = after_deadline.refund(window, deadline + 1).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::RefundExpired));
        assert!(!after_deadline.refunded);
    }

    #[test]
    fn test_refund_disabled_when_window_is_zero() {
        let mut purchase = purchased(1000, 10);
        let err = purchase.refund(0, 10).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::RefundDisabled));
        assert!(!purchase.refunded);
    }

    #[test]
    fn test_second_refund_fails() {
        let window = SECONDS_PER_HOUR;
        let mut purchase = purchased(1000, 10);
        purchase.refund(window, 10).unwrap();

        let err = purchase.refund(window, 10).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::AlreadyRefunded));
        assert!(purchase.refunded);
    }
}
