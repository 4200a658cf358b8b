use anyhow::Result;
use clap::Subcommand;
use serde_json::{json, Map, Value};

use tierbill_core::{
    name_of, price_of, validate_tables, Locale, OutputFormat, PriceEntry, Settings,
    SubscriptionTier, TierError,
};

/// Exit status for an unknown tier or locale argument.
pub const EXIT_UNKNOWN_KEY: i32 = 2;
/// Exit status for any other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every tier with its name and prices.
    List,
    /// Show the price of a tier.
    Price {
        /// Tier identifier (none, free, basic, premium, vip)
        tier: String,
        /// Only show the amount for this locale (en, tr)
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Show the display name of a tier.
    Name {
        /// Tier identifier (none, free, basic, premium, vip)
        tier: String,
    },
    /// Verify the built-in tables.
    Check,
}

/// Run a command and return its rendered output.
pub fn run(command: &Command, settings: &Settings) -> Result<String> {
    let format = settings.display.format;
    let locales = settings.display.unique_locales();

    let output = match command {
        Command::List => render_list(format, &locales)?,
        Command::Price { tier, locale } => {
            let tier: SubscriptionTier = tier.parse()?;
            let entry = price_of(tier);
            match locale {
                Some(code) => {
                    let locale: Locale = code.parse()?;
                    render_amount(format, tier, locale, entry.amount(locale))?
                }
                None => render_price(format, tier, &entry, &locales)?,
            }
        }
        Command::Name { tier } => {
            let tier: SubscriptionTier = tier.parse()?;
            match format {
                OutputFormat::Text => name_of(tier).to_string(),
                OutputFormat::Json => serde_json::to_string_pretty(&json!({
                    "tier": tier,
                    "name": name_of(tier),
                }))?,
            }
        }
        Command::Check => {
            validate_tables()?;
            match format {
                OutputFormat::Text => format!(
                    "OK: {} tiers, {} locales",
                    SubscriptionTier::COUNT,
                    Locale::COUNT
                ),
                OutputFormat::Json => serde_json::to_string_pretty(&json!({
                    "valid": true,
                    "tiers": SubscriptionTier::COUNT,
                    "locales": Locale::COUNT,
                }))?,
            }
        }
    };

    tracing::debug!("Rendered {:?} as {:?}", command, format);
    Ok(output)
}

/// Process exit status for a failed command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TierError>() {
        Some(e) if e.is_lookup() => EXIT_UNKNOWN_KEY,
        _ => EXIT_FAILURE,
    }
}

fn amounts(entry: &PriceEntry, locales: &[Locale]) -> Value {
    let mut map = Map::new();
    for locale in locales {
        map.insert(locale.code().to_string(), json!(entry.amount(*locale)));
    }
    Value::Object(map)
}

fn render_list(format: OutputFormat, locales: &[Locale]) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("{:<10} {:<10}", "TIER", "NAME");
            for locale in locales {
                out.push_str(&format!(" {:>6}", locale.code()));
            }
            for tier in SubscriptionTier::ALL {
                out.push('\n');
                out.push_str(&format!("{:<10} {:<10}", tier.as_str(), name_of(tier)));
                let entry = price_of(tier);
                for locale in locales {
                    out.push_str(&format!(" {:>6}", entry.amount(*locale)));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let rows: Vec<Value> = SubscriptionTier::ALL
                .into_iter()
                .map(|tier| {
                    json!({
                        "tier": tier,
                        "name": name_of(tier),
                        "prices": amounts(&price_of(tier), locales),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
    }
}

fn render_price(
    format: OutputFormat,
    tier: SubscriptionTier,
    entry: &PriceEntry,
    locales: &[Locale],
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let parts: Vec<String> = locales
                .iter()
                .map(|locale| format!("{} {}", locale.code(), entry.amount(*locale)))
                .collect();
            Ok(format!("{}: {}", name_of(tier), parts.join(", ")))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "tier": tier,
            "prices": amounts(entry, locales),
        }))?),
    }
}

fn render_amount(
    format: OutputFormat,
    tier: SubscriptionTier,
    locale: Locale,
    amount: u32,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(amount.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "tier": tier,
            "locale": locale,
            "amount": amount,
        }))?),
    }
}
