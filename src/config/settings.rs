//! User settings for Ration
//!
//! Daily limits and the preferred report currency. Settings are plain
//! values; nothing here touches the filesystem.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Amount, Currency};
use crate::services::{CaloriesTracker, CashTracker};

/// User settings for Ration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Daily calorie budget (kCal)
    #[serde(default = "default_calorie_limit")]
    pub calorie_limit: Amount,

    /// Daily spending budget (rubles)
    #[serde(default = "default_cash_limit")]
    pub cash_limit: Amount,

    /// Currency used for cash reports
    #[serde(default)]
    pub default_currency: Currency,
}

fn default_schema_version() -> u32 {
    1
}

fn default_calorie_limit() -> Amount {
    Amount::from_units(2000)
}

fn default_cash_limit() -> Amount {
    Amount::from_units(1000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            calorie_limit: default_calorie_limit(),
            cash_limit: default_cash_limit(),
            default_currency: Currency::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        serde_json::from_str(json)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Build a calorie tracker with the configured limit
    pub fn calories_tracker(&self) -> CaloriesTracker {
        CaloriesTracker::new(self.calorie_limit)
    }

    /// Build a cash tracker with the configured limit
    pub fn cash_tracker(&self) -> CashTracker {
        CashTracker::new(self.cash_limit)
    }

    /// Report today's remaining cash in the configured currency
    pub fn cash_report(&self, tracker: &CashTracker) -> String {
        tracker.today_cash_remained_in(self.default_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cash::NO_MONEY;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.calorie_limit, Amount::from_units(2000));
        assert_eq!(settings.cash_limit, Amount::from_units(1000));
        assert_eq!(settings.default_currency, Currency::Rub);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings {
            cash_limit: Amount::from_units(1500),
            default_currency: Currency::Usd,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let loaded = Settings::from_json(r#"{ "default_currency": "eur" }"#).unwrap();
        assert_eq!(loaded.default_currency, Currency::Eur);
        assert_eq!(loaded.calorie_limit, Amount::from_units(2000));
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_unknown_currency_is_config_error() {
        let err = Settings::from_json(r#"{ "default_currency": "gbp" }"#).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_trackers_use_limits() {
        let settings = Settings {
            calorie_limit: Amount::from_units(1800),
            ..Settings::default()
        };
        assert_eq!(settings.calories_tracker().limit(), Amount::from_units(1800));
        assert_eq!(settings.cash_tracker().limit(), Amount::from_units(1000));
    }

    #[test]
    fn test_cash_report_uses_default_currency() {
        let settings = Settings {
            cash_limit: Amount::zero(),
            default_currency: Currency::Eur,
            ..Settings::default()
        };
        let tracker = settings.cash_tracker();
        assert_eq!(settings.cash_report(&tracker), NO_MONEY);
    }
}
