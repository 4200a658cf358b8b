use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;

use crate::error::Result;
use crate::tier::SubscriptionTier;

/// Read-only mapping with exactly one entry per [`SubscriptionTier`].
///
/// Entries are stored in [`SubscriptionTier::ALL`] order, so the array
/// length alone guarantees that no tier is missing and none is extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable<T> {
    entries: [T; SubscriptionTier::COUNT],
}

impl<T> TierTable<T> {
    /// `entries[i]` belongs to `SubscriptionTier::ALL[i]`.
    pub const fn new(entries: [T; SubscriptionTier::COUNT]) -> Self {
        Self { entries }
    }

    pub fn get(&self, tier: SubscriptionTier) -> &T {
        &self.entries[tier.index()]
    }

    /// Look up by tier identifier, e.g. `"PREMIUM"`.
    pub fn lookup(&self, key: &str) -> Result<&T> {
        match key.parse::<SubscriptionTier>() {
            Ok(tier) => Ok(self.get(tier)),
            Err(e) => {
                tracing::debug!("Rejected tier table lookup for {:?}", key);
                Err(e)
            }
        }
    }

    /// Look up by tier rank, as stored by systems that persist the ordinal.
    pub fn lookup_rank(&self, rank: u8) -> Result<&T> {
        let tier = SubscriptionTier::try_from(rank).inspect_err(|_| {
            tracing::debug!("Rejected tier table lookup for rank {}", rank);
        })?;
        Ok(self.get(tier))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubscriptionTier, &T)> {
        SubscriptionTier::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Index<SubscriptionTier> for TierTable<T> {
    type Output = T;

    fn index(&self, tier: SubscriptionTier) -> &T {
        self.get(tier)
    }
}

impl<T: Serialize> Serialize for TierTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (tier, entry) in self.iter() {
            map.serialize_entry(&tier, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TierError;

    fn ranks() -> TierTable<u8> {
        TierTable::new([0, 1, 2, 3, 4])
    }

    #[test]
    fn test_get_and_index_agree() {
        let table = ranks();
        for tier in SubscriptionTier::ALL {
            assert_eq!(table.get(tier), &tier.rank());
            assert_eq!(table[tier], tier.rank());
        }
    }

    #[test]
    fn test_iter_follows_tier_order() {
        let tiers: Vec<_> = ranks().iter().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, SubscriptionTier::ALL.to_vec());
        assert_eq!(ranks().len(), SubscriptionTier::COUNT);
        assert!(!ranks().is_empty());
    }

    #[test]
    fn test_lookup_by_key_and_rank() {
        let table = ranks();
        assert_eq!(*table.lookup("basic").unwrap(), 2);
        assert_eq!(*table.lookup_rank(3).unwrap(), 3);
        assert!(matches!(table.lookup("platinum"), Err(TierError::UnknownTier(_))));
        assert!(matches!(table.lookup_rank(9), Err(TierError::UnknownTier(_))));
    }
}
