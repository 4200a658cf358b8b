use serde::{Deserialize, Serialize};

use crate::constants::prices;
use crate::error::Result;
use crate::locale::Locale;
use crate::table::TierTable;
use crate::tier::SubscriptionTier;

/// Price of one tier, one amount per [`Locale`].
///
/// Amounts are whole units of the locale's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceEntry {
    pub en: u32,
    pub tr: u32,
}

impl PriceEntry {
    pub const ZERO: PriceEntry = PriceEntry::new(0, 0);

    pub const fn new(en: u32, tr: u32) -> Self {
        Self { en, tr }
    }

    pub const fn amount(&self, locale: Locale) -> u32 {
        match locale {
            Locale::En => self.en,
            Locale::Tr => self.tr,
        }
    }

    pub fn is_free(&self) -> bool {
        Locale::ALL.into_iter().all(|locale| self.amount(locale) == 0)
    }
}

const fn tier_price(tier: SubscriptionTier) -> PriceEntry {
    match tier {
        SubscriptionTier::None | SubscriptionTier::Free => PriceEntry::ZERO,
        SubscriptionTier::Basic => PriceEntry::new(prices::en::BASIC, prices::tr::BASIC),
        SubscriptionTier::Premium => PriceEntry::new(prices::en::PREMIUM, prices::tr::PREMIUM),
        SubscriptionTier::Vip => PriceEntry::new(prices::en::VIP, prices::tr::VIP),
    }
}

const fn build_prices() -> [PriceEntry; SubscriptionTier::COUNT] {
    let mut entries = [PriceEntry::ZERO; SubscriptionTier::COUNT];
    let mut i = 0;
    while i < SubscriptionTier::COUNT {
        entries[i] = tier_price(SubscriptionTier::ALL[i]);
        i += 1;
    }
    entries
}

/// Price of every subscription tier.
pub static SUBSCRIPTION_PRICES: TierTable<PriceEntry> = TierTable::new(build_prices());

// Free tiers cost nothing and paid tiers get strictly pricier with rank,
// checked per locale at compile time.
const _: () = {
    let entries = build_prices();
    let mut l = 0;
    while l < Locale::COUNT {
        let locale = Locale::ALL[l];
        let mut i = 0;
        while i < SubscriptionTier::COUNT {
            let tier = SubscriptionTier::ALL[i];
            let amount = entries[i].amount(locale);
            if !tier.is_paid() {
                assert!(amount == 0, "unpaid tier with non-zero price");
            } else if i > 0 && SubscriptionTier::ALL[i - 1].is_paid() {
                assert!(
                    amount > entries[i - 1].amount(locale),
                    "paid tier prices must increase with rank"
                );
            }
            i += 1;
        }
        l += 1;
    }
};

/// Stored price pair for `tier`.
pub fn price_of(tier: SubscriptionTier) -> PriceEntry {
    SUBSCRIPTION_PRICES[tier]
}

/// Price for an untyped tier identifier such as `"PREMIUM"`.
pub fn lookup_price(key: &str) -> Result<PriceEntry> {
    SUBSCRIPTION_PRICES.lookup(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_per_locale() {
        let entry = PriceEntry::new(29, 299);
        assert_eq!(entry.amount(Locale::En), 29);
        assert_eq!(entry.amount(Locale::Tr), 299);
    }

    #[test]
    fn test_is_free() {
        assert!(PriceEntry::ZERO.is_free());
        assert!(!PriceEntry::new(0, 1).is_free());
    }

    #[test]
    fn test_table_matches_const_builder() {
        for tier in SubscriptionTier::ALL {
            assert_eq!(price_of(tier), tier_price(tier));
        }
    }
}
