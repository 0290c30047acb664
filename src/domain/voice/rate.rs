use std::fmt;

/// Speaking-rate multiplier as sent by clients (`1.0` is normal speed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeakingRate(f64);

impl SpeakingRate {
    pub const NORMAL: SpeakingRate = SpeakingRate(1.0);

    /// Non-finite multipliers fall back to normal speed
    pub fn new(multiplier: f64) -> Self {
        if multiplier.is_finite() {
            Self(multiplier)
        } else {
            Self::NORMAL
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.0
    }

    /// Signed percentage offset, `round((rate - 1) * 50)`
    pub fn percent_offset(&self) -> i64 {
        ((self.0 - 1.0) * 50.0).round() as i64
    }

    /// Offset in the form speech providers expect, e.g. `+10%`
    pub fn as_offset_string(&self) -> String {
        format!("{:+}%", self.percent_offset())
    }
}

impl Default for SpeakingRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<Option<f64>> for SpeakingRate {
    fn from(value: Option<f64>) -> Self {
        value.map(SpeakingRate::new).unwrap_or_default()
    }
}

impl fmt::Display for SpeakingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_offset_string())
    }
}
