use pcoart_types::{Address, SECONDS_PER_YEAR, TimeUnit, to_seconds};
use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcoSettingsConfig {
    /// Component owner; defaults to the role admin via the permissions
    /// cascade when left unset.
    #[serde(default)]
    pub owner: Option<Address>,
    pub cycle_value: u32,
    pub cycle_unit: TimeUnit,
    /// Honorarium rate per stewardship cycle, as a UI percent.
    pub rate_percent: f64,
}

impl PcoSettingsConfig {
    pub(crate) fn validate(&self) -> Result<(), WizardError> {
        if self.cycle_value == 0 {
            return Err(WizardError::validation(
                "cycle_value",
                "cycle must be at least one unit",
            ));
        }
        if !self.rate_percent.is_finite() || !(0.0..=100.0).contains(&self.rate_percent) {
            return Err(WizardError::validation(
                "rate_percent",
                "rate must be between 0 and 100 percent",
            ));
        }
        Ok(())
    }

    pub fn cycle_seconds(&self) -> u64 {
        to_seconds(self.cycle_value, self.cycle_unit)
    }

    /// Rate scaled to a 365-day year, truncated to two decimals for display.
    /// A zero-length cycle displays as zero rather than dividing.
    pub fn annualized_rate_percent(&self) -> f64 {
        let cycle = self.cycle_seconds();
        if cycle == 0 {
            return 0.0;
        }
        truncate_2dp(self.rate_percent * (SECONDS_PER_YEAR as f64 / cycle as f64))
    }
}

fn truncate_2dp(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}
