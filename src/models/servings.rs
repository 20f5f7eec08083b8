//! Servings control model
//!
//! Bounded serving counter and the scale factor it implies.

use serde::{Deserialize, Serialize};

use crate::scaling::parse_int_prefix;

/// Fewest servings the control allows
pub const MIN_SERVINGS: u32 = 1;
/// Most servings the control allows
pub const MAX_SERVINGS: u32 = 20;

/// Current and original serving counts for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingsControl {
    original: u32,
    current: u32,
}

impl ServingsControl {
    /// Start at the recipe's own serving count
    pub fn new(original: u32) -> Self {
        let original = original.max(MIN_SERVINGS);
        Self {
            original,
            current: clamp_servings(i64::from(original)),
        }
    }

    /// Build from the page's raw servings attributes
    ///
    /// A missing or non-positive original falls back to 1; a missing or
    /// zero current value falls back to the original.
    pub fn from_attributes(original: Option<&str>, current: Option<&str>) -> Self {
        let original = original
            .and_then(parse_int_prefix)
            .filter(|n| *n >= i64::from(MIN_SERVINGS))
            .map(|n| n.min(i64::from(u32::MAX)) as u32)
            .unwrap_or(MIN_SERVINGS);

        let mut control = Self::new(original);
        if let Some(input) = current {
            control.set_input(input);
        }
        control
    }

    pub fn original(&self) -> u32 {
        self.original
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Re-read the servings input, falling back to the original count
    pub fn set_input(&mut self, input: &str) {
        let requested = match parse_int_prefix(input) {
            Some(n) if n != 0 => n,
            _ => i64::from(self.original),
        };
        self.current = clamp_servings(requested);
    }

    /// Add one serving unless already at the maximum
    pub fn increment(&mut self) -> bool {
        if self.current < MAX_SERVINGS {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Remove one serving unless already at the minimum
    pub fn decrement(&mut self) -> bool {
        if self.current > MIN_SERVINGS {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Current servings divided by original servings
    pub fn scale_factor(&self) -> f64 {
        f64::from(self.current) / f64::from(self.original)
    }
}

fn clamp_servings(n: i64) -> u32 {
    n.clamp(i64::from(MIN_SERVINGS), i64::from(MAX_SERVINGS)) as u32
}
