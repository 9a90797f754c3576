use serde::{Deserialize, Serialize};

use invcalc_core::{DomainError, DomainResult};

/// Running totals over every submitted inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_value: f64,
    pub count: u64,
}

impl GlobalStats {
    /// Add one submission. Negative or non-finite values are rejected so
    /// the totals never go down, as is any value that would push the total
    /// past the largest finite f64.
    pub fn record(&mut self, inventory_value: f64) -> DomainResult<()> {
        if !inventory_value.is_finite() {
            return Err(DomainError::validation("inventory value must be a number"));
        }
        if inventory_value < 0.0 {
            return Err(DomainError::validation("inventory value cannot be negative"));
        }
        let total_value = self.total_value + inventory_value;
        if !total_value.is_finite() {
            return Err(DomainError::validation("inventory value would overflow the total"));
        }
        self.total_value = total_value;
        self.count += 1;
        Ok(())
    }
}
