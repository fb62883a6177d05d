use crate::state::{ContentPricing, PricingModel, Purchase, Subscription};

/// Whether `account` may consume content right now.
///
/// `purchase` and `subscription` must be the records keyed by the same
/// content id and account as `pricing`; missing records are `None`.
pub fn has_access(
    pricing: Option<&ContentPricing>,
    purchase: Option<&Purchase>,
    subscription: Option<&Subscription>,
    now: i64,
) -> bool {
    let Some(pricing) = pricing else {
        return false;
    };

    match pricing.pricing_model {
        PricingModel::Free => true,
        PricingModel::OneTimePurchase => purchase.is_some_and(Purchase::is_live),
        PricingModel::Subscription => subscription.is_some_and(|sub| sub.is_active(now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::content_pricing::tests::priced;
    use crate::state::purchase::tests::purchased;
    use crate::state::subscription::tests::{subscribed, WEEK};
    use crate::state::SECONDS_PER_HOUR;

    #[test]
    fn test_missing_content_denies() {
        let purchase = purchased(1000, 0);
        let sub = subscribed(0, true);
        assert!(!has_access(None, Some(&purchase), Some(&sub), 1));
    }

    #[test]
    fn test_free_content_open_to_everyone() {
        let pricing = priced(0, 0, 0, 0);
        assert!(has_access(Some(&pricing), None, None, 0));
        assert!(has_access(Some(&pricing), None, None, i64::MAX));
    }

    #[test]
    fn test_one_time_purchase_access() {
        let pricing = priced(1, 1000, 0, 24);
        assert!(!has_access(Some(&pricing), None, None, 0));

        let mut purchase = purchased(1000, 0);
        assert!(has_access(Some(&pricing), Some(&purchase), None, 0));
        // Purchases never expire on their own
        assert!(has_access(Some(&pricing), Some(&purchase), None, 10 * WEEK));

        purchase.refund(24 * SECONDS_PER_HOUR, 1).unwrap();
        assert!(!has_access(Some(&pricing), Some(&purchase), None, 2));
    }

    #[test]
    fn test_subscription_expiry_boundary() {
        let pricing = priced(2, 300, 7, 0);
        let sub = subscribed(5_000, false);
        assert_eq!(sub.end_at, 5_000 + pricing.period_seconds().unwrap());

        assert!(has_access(Some(&pricing), None, Some(&sub), sub.end_at - 1));
        assert!(!has_access(Some(&pricing), None, Some(&sub), sub.end_at));
        assert!(!has_access(Some(&pricing), None, None, 5_000));
    }

    #[test]
    fn test_access_follows_current_model() {
        // A purchase does not unlock content that is now sold by subscription
        let pricing = priced(2, 300, 7, 0);
        let purchase = purchased(1000, 0);
        assert!(!has_access(Some(&pricing), Some(&purchase), None, 1));

        // and a subscription does not unlock content sold outright
        let pricing = priced(1, 1000, 0, 0);
        let sub = subscribed(0, true);
        assert!(!has_access(Some(&pricing), None, Some(&sub), 1));
    }
}
