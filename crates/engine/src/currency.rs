use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO-like currency code used for all monetary values.
///
/// The back office is effectively mono-currency (default `PHP`), but the
/// engine models currency explicitly to keep the data model future-proof.
///
/// ## Minor units
///
/// Monetary values are stored as an `i64` number of **minor units** (see
/// `Money`). `minor_units()` returns how many decimal digits are used when
/// converting between:
/// - major units (human input/output, e.g. `350.00 PHP`)
/// - minor units (stored integers, e.g. `35000`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Php,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Php => "PHP",
        }
    }

    /// Symbol used when formatting amounts for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Php => "₱",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Php => 2,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PHP" => Ok(Currency::Php),
            other => Err(EngineError::InvalidAmount(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_code_case_insensitively() {
        assert_eq!(Currency::try_from("PHP").unwrap(), Currency::Php);
        assert_eq!(Currency::try_from(" php ").unwrap(), Currency::Php);
        assert!(Currency::try_from("USD").is_err());
    }

    #[test]
    fn minor_units_match_stored_precision() {
        assert_eq!(Currency::Php.minor_units(), 2);
        assert_eq!(Currency::Php.code(), "PHP");
    }
}
