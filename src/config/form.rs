//! Input form limits and defaults

use std::ops::RangeInclusive;

/// Bounds and starting value for one integer spin field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntField {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl IntField {
    pub const fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.range().contains(&value)
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// The Master Form Configuration
pub struct FormConfig {
    // Pre-filled in both ticker inputs on first launch
    pub default_ticker: &'static str,
    // Fit section
    pub use_new_data: bool,
    pub n_observations: IntField,
    // GARCH order (forwarded opaquely to the service)
    pub p: IntField,
    // ARCH order
    pub q: IntField,
    // Predict section
    pub n_days: IntField,
}

pub const FORM: FormConfig = FormConfig {
    default_ticker: "SHOPERSTOP.BSE",
    use_new_data: false,
    n_observations: IntField {
        min: 100,
        max: 10_000,
        default: 2000,
    },
    p: IntField {
        min: 1,
        max: 5,
        default: 1,
    },
    q: IntField {
        min: 1,
        max: 5,
        default: 1,
    },
    n_days: IntField {
        min: 1,
        max: 30,
        default: 5,
    },
};
