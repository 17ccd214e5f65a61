//! Supported currencies and their fixed exchange rates
//!
//! Rates are expressed in rubles, the base currency of every tracker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use crate::error::TrackerError;

/// A currency the cash tracker can report in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Russian ruble (base currency)
    #[default]
    Rub,
    /// US dollar
    Usd,
    /// Euro
    Eur,
}

/// Lookup row: code, display name, rate in rubles
struct CurrencyInfo {
    code: &'static str,
    name: &'static str,
    rate: Amount,
}

const RUB: CurrencyInfo = CurrencyInfo {
    code: "rub",
    name: "руб",
    rate: Amount::from_units(1),
};

const USD: CurrencyInfo = CurrencyInfo {
    code: "usd",
    name: "USD",
    rate: Amount::from_hundredths(7288),
};

const EUR: CurrencyInfo = CurrencyInfo {
    code: "eur",
    name: "Euro",
    rate: Amount::from_hundredths(8547),
};

impl Currency {
    /// Every supported currency
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    fn info(self) -> &'static CurrencyInfo {
        match self {
            Self::Rub => &RUB,
            Self::Usd => &USD,
            Self::Eur => &EUR,
        }
    }

    /// Look up a currency by its lowercase code
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnsupportedCurrency`] carrying `code` if it is
    /// not `rub`, `usd` or `eur`.
    pub fn from_code(code: &str) -> Result<Self, TrackerError> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| TrackerError::UnsupportedCurrency(code.to_string()))
    }

    /// Short code (`rub`, `usd`, `eur`)
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Name used in report messages
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Price of one unit in rubles
    pub fn rate(self) -> Amount {
        self.info().rate
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
