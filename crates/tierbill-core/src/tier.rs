use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TierError;

/// Subscription tier, ordered from lowest to highest rank.
///
/// The set is closed: every table in this crate is keyed on all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionTier {
    /// No subscription at all.
    None,
    Free,
    Basic,
    Premium,
    Vip,
}

impl SubscriptionTier {
    pub const COUNT: usize = 5;

    /// Every tier in rank order.
    pub const ALL: [SubscriptionTier; Self::COUNT] = [
        Self::None,
        Self::Free,
        Self::Basic,
        Self::Premium,
        Self::Vip,
    ];

    /// Position of this tier in [`Self::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Canonical identifier, as used in serialized data.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Free => "FREE",
            Self::Basic => "BASIC",
            Self::Premium => "PREMIUM",
            Self::Vip => "VIP",
        }
    }

    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Basic | Self::Premium | Self::Vip)
    }

    pub fn paid() -> impl Iterator<Item = SubscriptionTier> {
        Self::ALL.into_iter().filter(|tier| tier.is_paid())
    }
}

const _: () = {
    let mut i = 0;
    while i < SubscriptionTier::COUNT {
        assert!(SubscriptionTier::ALL[i].index() == i, "tier order out of sync with ALL");
        i += 1;
    }
};

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::names::name_of(*self))
    }
}

impl FromStr for SubscriptionTier {
    type Err = TierError;

    /// Accepts the identifier in any letter case (`"PREMIUM"`, `"premium"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| TierError::unknown_tier(s))
    }
}

impl TryFrom<u8> for SubscriptionTier {
    type Error = TierError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(rank as usize)
            .copied()
            .ok_or_else(|| TierError::unknown_tier(rank.to_string()))
    }
}
