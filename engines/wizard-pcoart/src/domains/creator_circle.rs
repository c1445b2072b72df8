use std::collections::HashSet;

use pcoart_types::Address;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ALLOCATION_ENTRIES;
use crate::errors::WizardError;

/// One creator-circle member's share, in relative units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub subscriber: Address,
    pub units: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorCircleConfig {
    #[serde(default)]
    pub owner: Option<Address>,
    /// Distribution token; `None` pays out in the chain's native unit.
    #[serde(default)]
    pub token: Option<Address>,
    pub allocations: Vec<AllocationEntry>,
}

impl CreatorCircleConfig {
    pub(crate) fn validate(&self) -> Result<(), WizardError> {
        if self.allocations.is_empty() {
            return Err(WizardError::validation(
                "allocations",
                "at least one recipient is required",
            ));
        }
        if self.allocations.len() > MAX_ALLOCATION_ENTRIES {
            return Err(WizardError::validation(
                "allocations",
                format!("at most {MAX_ALLOCATION_ENTRIES} recipients"),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.allocations {
            if !seen.insert(entry.subscriber) {
                return Err(WizardError::validation(
                    "allocations",
                    format!("duplicate recipient {}", entry.subscriber),
                ));
            }
        }
        if self.total_units() == 0 {
            return Err(WizardError::validation(
                "allocations",
                "at least one recipient needs nonzero units",
            ));
        }
        Ok(())
    }

    /// Append a recipient after the last index.
    pub fn with_recipient(mut self, entry: AllocationEntry) -> Self {
        self.allocations.push(entry);
        self
    }

    pub fn total_units(&self) -> u64 {
        self.allocations.iter().map(|e| e.units).sum()
    }

    /// Share of the honorarium for the entry at `index`, as a percent.
    /// `None` while the unit sum is zero, so an empty table never shows NaN.
    pub fn allocation_percentage(&self, index: usize) -> Option<f64> {
        let total = self.total_units();
        if total == 0 {
            return None;
        }
        self.allocations
            .get(index)
            .map(|e| e.units as f64 / total as f64 * 100.0)
    }
}
