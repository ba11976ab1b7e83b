//! Sampling options for a generation request.

use serde::{Deserialize, Serialize};

/// Sampling options sent alongside a prompt.
///
/// Both values live in `[0, 1]`. Out-of-range values are clamped and NaN
/// falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
}

impl Options {
    /// Default sampling temperature.
    pub const TEMPERATURE: f32 = 0.5;

    /// Default nucleus sampling threshold.
    pub const TOP_P: f32 = 0.95;

    /// Create options, normalizing both values into `[0, 1]`.
    pub fn new(temperature: f32, top_p: f32) -> Self {
        Self {
            temperature: unit(temperature, Self::TEMPERATURE),
            top_p: unit(top_p, Self::TOP_P),
        }
    }

    /// Replace the temperature.
    pub fn with_temperature(self, temperature: f32) -> Self {
        Self::new(temperature, self.top_p)
    }

    /// Replace the top-p threshold.
    pub fn with_top_p(self, top_p: f32) -> Self {
        Self::new(self.temperature, top_p)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            temperature: Self::TEMPERATURE,
            top_p: Self::TOP_P,
        }
    }
}

fn unit(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}
