use anchor_lang::prelude::*;
use crate::errors::ContentLedgerError;

pub const SUBSCRIPTION_SEED: &[u8] = b"subscription";

/// Recurring access grant for one subscriber to one content item
/// PDA seeds: ["subscription", content_id, subscriber]
///
/// Active while now < end_at. Renewal only moves end_at; cancellation only
/// clears auto_renew. No re-billing happens without an explicit renew call.
#[account]
#[derive(InitSpace)]
pub struct Subscription {
    pub content_id: [u8; 32],
    pub subscriber: Pubkey,
    /// Lamports charged for the most recent period
    pub price_per_period: u64,
    pub start_at: i64,
    pub end_at: i64,
    pub auto_renew: bool,
    pub last_renewed_at: i64,
    pub bump: u8,
}

impl Subscription {
    pub fn is_recorded(&self) -> bool {
        self.subscriber != Pubkey::default()
    }

    pub fn is_active(&self, now: i64) -> bool {
        self.is_recorded() && now < self.end_at
    }

    /// Start (or restart) a subscription at `now`.
    /// An existing record is overwritten: remaining time is not carried over.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &mut self,
        content_id: [u8; 32],
        subscriber: Pubkey,
        price: u64,
        period_seconds: i64,
        auto_renew: bool,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        let end_at = Self::period_end(now, period_seconds)?;

        self.content_id = content_id;
        self.subscriber = subscriber;
        self.price_per_period = price;
        self.start_at = now;
        self.end_at = end_at;
        self.auto_renew = auto_renew;
        self.last_renewed_at = now;
        self.bump = bump;
        Ok(())
    }

    /// Extend access to one full period counted from `now`.
    /// Renewing early forfeits the unused part of the current period.
    pub fn renew(&mut self, price: u64, period_seconds: i64, now: i64) -> Result<()> {
        require!(self.is_recorded(), ContentLedgerError::NoActiveSubscription);
        let end_at = Self::period_end(now, period_seconds)?;

        self.price_per_period = price;
        self.end_at = end_at;
        self.last_renewed_at = now;
        Ok(())
    }

    pub fn cancel_auto_renew(&mut self) -> Result<()> {
        require!(self.is_recorded(), ContentLedgerError::NoActiveSubscription);
        self.auto_renew = false;
        Ok(())
    }

    fn period_end(now: i64, period_seconds: i64) -> Result<i64> {
        now.checked_add(period_seconds)
            .ok_or_else(|| error!(ContentLedgerError::ArithmeticOverflow))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::{code_of, error_code};
    use crate::state::{snapshot, SECONDS_PER_DAY};

    pub(crate) const WEEK: i64 = 7 * SECONDS_PER_DAY;

    pub(crate) fn empty_subscription() -> Subscription {
        Subscription {
            content_id: [0; 32],
            subscriber: Pubkey::default(),
            price_per_period: 0,
            start_at: 0,
            end_at: 0,
            auto_renew: false,
            last_renewed_at: 0,
            bump: 0,
        }
    }

    pub(crate) fn subscribed(at: i64, auto_renew: bool) -> Subscription {
        let mut sub = empty_subscription();
        sub.start([1; 32], Pubkey::new_unique(), 300, WEEK, auto_renew, at, 252).unwrap();
        sub
    }

    #[test]
    fn test_active_until_end_exclusive() {
        let sub = subscribed(1_000, true);
        assert_eq!(sub.start_at, 1_000);
        assert_eq!(sub.end_at, 1_000 + 7 * 86_400);
        assert_eq!(sub.last_renewed_at, 1_000);

        assert!(sub.is_active(1_000));
        assert!(sub.is_active(sub.end_at - 1));
        assert!(!sub.is_active(sub.end_at));
        assert!(!empty_subscription().is_active(0));
    }

    #[test]
    fn test_resubscribe_restarts_clock() {
        let mut sub = subscribed(1_000, true);
        let subscriber = sub.subscriber;

        sub.start([1; 32], subscriber, 300, WEEK, false, 2_000, 252).unwrap();
        assert_eq!(sub.start_at, 2_000);
        assert_eq!(sub.end_at, 2_000 + WEEK);
        assert!(!sub.auto_renew);
    }

    #[test]
    fn test_renew_extends_from_now_not_from_end() {
        let mut sub = subscribed(0, true);
        let start = sub.start_at;

        // Early renewal: three days in
        let now = 3 * SECONDS_PER_DAY;
        sub.renew(350, WEEK, now).unwrap();
        assert_eq!(sub.end_at, now + WEEK);
        assert_eq!(sub.start_at, start);
        assert_eq!(sub.last_renewed_at, now);
        assert_eq!(sub.price_per_period, 350);

        // Renewal after expiry reactivates
        let later = sub.end_at + 10;
        assert!(!sub.is_active(later));
        sub.renew(350, WEEK, later).unwrap();
        assert!(sub.is_active(later));
        assert!(sub.end_at >= sub.start_at);
    }

    #[test]
    fn test_cancel_keeps_paid_access() {
        let mut sub = subscribed(0, true);
        let end_at = sub.end_at;

        sub.cancel_auto_renew().unwrap();
        assert!(!sub.auto_renew);
        assert_eq!(sub.end_at, end_at);
        assert!(sub.is_active(end_at - 1));
    }

    #[test]
    fn test_missing_subscription() {
        let mut sub = empty_subscription();
        let err = sub.renew(300, WEEK, 0).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::NoActiveSubscription));
        let err = sub.cancel_auto_renew().unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::NoActiveSubscription));
    }

    #[test]
    fn test_period_end_overflow() {
        let mut sub = subscribed(1_000, true);
        let before = snapshot(&sub);

        let err = sub
            .start([1; 32], Pubkey::new_unique(), 500, WEEK, false, i64::MAX - 1, 0)
            .unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::ArithmeticOverflow));
        assert_eq!(snapshot(&sub), before);

        let err = sub.renew(500, WEEK, i64::MAX - 1).unwrap_err();
        assert_eq!(error_code(err), code_of(ContentLedgerError::ArithmeticOverflow));
        assert_eq!(snapshot(&sub), before);
    }
}
