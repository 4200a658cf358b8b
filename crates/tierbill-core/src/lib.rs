//! Tierbill — subscription tier pricing tables.
//!
//! Two immutable tables keyed on the closed [`SubscriptionTier`] set:
//! - [`SUBSCRIPTION_PRICES`]: the price of each tier, one amount per [`Locale`].
//! - [`TIER_NAMES`]: the display label of each tier.
//!
//! Both are `static` data built at compile time; adding a tier without
//! covering it in both tables fails the build.

pub mod config;
pub mod constants;
pub mod error;
pub mod locale;
pub mod names;
pub mod pricing;
pub mod table;
pub mod tier;
pub mod validate;

pub use config::{OutputFormat, Settings};
pub use error::{Result, TierError};
pub use locale::Locale;
pub use names::{lookup_name, name_of, TIER_NAMES};
pub use pricing::{lookup_price, price_of, PriceEntry, SUBSCRIPTION_PRICES};
pub use table::TierTable;
pub use tier::SubscriptionTier;
pub use validate::validate_tables;
