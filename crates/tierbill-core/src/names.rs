use crate::constants::names;
use crate::error::Result;
use crate::table::TierTable;
use crate::tier::SubscriptionTier;

const fn tier_name(tier: SubscriptionTier) -> &'static str {
    match tier {
        SubscriptionTier::None => names::NONE,
        SubscriptionTier::Free => names::FREE,
        SubscriptionTier::Basic => names::BASIC,
        SubscriptionTier::Premium => names::PREMIUM,
        SubscriptionTier::Vip => names::VIP,
    }
}

const fn build_names() -> [&'static str; SubscriptionTier::COUNT] {
    let mut entries = [""; SubscriptionTier::COUNT];
    let mut i = 0;
    while i < SubscriptionTier::COUNT {
        entries[i] = tier_name(SubscriptionTier::ALL[i]);
        assert!(!entries[i].is_empty(), "tier name must not be empty");
        i += 1;
    }
    entries
}

/// Display label of every subscription tier. Not localized.
pub static TIER_NAMES: TierTable<&'static str> = TierTable::new(build_names());

pub fn name_of(tier: SubscriptionTier) -> &'static str {
    TIER_NAMES[tier]
}

/// Name for an untyped tier identifier such as `"VIP"`.
pub fn lookup_name(key: &str) -> Result<&'static str> {
    TIER_NAMES.lookup(key).copied()
}
