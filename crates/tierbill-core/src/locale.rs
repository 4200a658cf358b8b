use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TierError;

/// Pricing context a tier price is quoted in.
///
/// Not a full i18n locale: it only selects which amount of a
/// [`PriceEntry`](crate::pricing::PriceEntry) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Tr,
}

impl Locale {
    pub const COUNT: usize = 2;

    pub const ALL: [Locale; Self::COUNT] = [Self::En, Self::Tr];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| TierError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("TR".parse::<Locale>().unwrap(), Locale::Tr);
        assert!(matches!("de".parse::<Locale>(), Err(TierError::UnknownLocale(_))));
    }

    #[test]
    fn test_display_is_code() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string(), locale.code());
        }
    }
}
