use crate::error::{Result, TierError};
use crate::locale::Locale;
use crate::names::TIER_NAMES;
use crate::pricing::{PriceEntry, SUBSCRIPTION_PRICES};
use crate::table::TierTable;
use crate::tier::SubscriptionTier;

/// Check a price table: unpaid tiers are free in every locale and each
/// paid tier costs strictly more than the paid tier below it, per locale.
pub fn validate_prices(table: &TierTable<PriceEntry>) -> Result<()> {
    for locale in Locale::ALL {
        let mut previous: Option<(SubscriptionTier, u32)> = None;
        for (tier, entry) in table.iter() {
            let amount = entry.amount(locale);
            if !tier.is_paid() {
                if amount != 0 {
                    return Err(TierError::InvalidTable(format!(
                        "{} must be free in '{}', found {}",
                        tier.as_str(),
                        locale,
                        amount
                    )));
                }
                continue;
            }
            if let Some((lower, lower_amount)) = previous {
                if amount <= lower_amount {
                    return Err(TierError::InvalidTable(format!(
                        "{} ({}) must cost more than {} ({}) in '{}'",
                        tier.as_str(),
                        amount,
                        lower.as_str(),
                        lower_amount,
                        locale
                    )));
                }
            }
            previous = Some((tier, amount));
        }
    }
    Ok(())
}

pub fn validate_names(table: &TierTable<&str>) -> Result<()> {
    for (tier, name) in table.iter() {
        if name.trim().is_empty() {
            return Err(TierError::InvalidTable(format!(
                "{} has an empty display name",
                tier.as_str()
            )));
        }
    }
    Ok(())
}

/// Validate the built-in [`SUBSCRIPTION_PRICES`] and [`TIER_NAMES`] tables.
pub fn validate_tables() -> Result<()> {
    validate_prices(&SUBSCRIPTION_PRICES)?;
    validate_names(&TIER_NAMES)?;
    tracing::debug!("Tier tables valid ({} tiers)", SUBSCRIPTION_PRICES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert!(validate_tables().is_ok());
    }

    #[test]
    fn test_rejects_priced_free_tier() {
        let table = TierTable::new([
            PriceEntry::ZERO,
            PriceEntry::new(1, 0),
            PriceEntry::new(29, 299),
            PriceEntry::new(99, 999),
            PriceEntry::new(199, 1999),
        ]);
        let err = validate_prices(&table).unwrap_err();
        assert!(err.to_string().contains("FREE must be free in 'en'"));
    }

    #[test]
    fn test_rejects_non_increasing_prices_in_one_locale() {
        // en is fine, tr is flat between PREMIUM and VIP.
        let table = TierTable::new([
            PriceEntry::ZERO,
            PriceEntry::ZERO,
            PriceEntry::new(29, 299),
            PriceEntry::new(99, 999),
            PriceEntry::new(199, 999),
        ]);
        let err = validate_prices(&table).unwrap_err();
        assert!(matches!(err, TierError::InvalidTable(_)));
        assert!(err.to_string().contains("VIP (999) must cost more than PREMIUM (999) in 'tr'"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let table = TierTable::new(["None", "Free", " ", "Premium", "VIP"]);
        assert!(matches!(validate_names(&table), Err(TierError::InvalidTable(_))));
    }
}
