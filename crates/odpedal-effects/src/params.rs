//! User-facing parameter snapshot and nominal ranges.
//!
//! The engine accepts any value; these ranges describe the pedal's knobs and
//! are enforced by whoever owns the parameters (config loading, the CLI).

/// Nominal range of one knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Display name, also used in validation errors.
    pub name: &'static str,
    /// Unit suffix for display.
    pub unit: &'static str,
    /// Lowest nominal value.
    pub min: f32,
    /// Highest nominal value.
    pub max: f32,
    /// Value the knob starts at.
    pub default: f32,
}

impl ParamRange {
    /// True when `value` lies within `[min, max]`. NaN is never contained.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Drive: 0 to 24 dB of input gain.
pub const DRIVE_RANGE_DB: ParamRange = ParamRange {
    name: "drive",
    unit: "dB",
    min: 0.0,
    max: 24.0,
    default: 0.0,
};

/// Tone: 800 Hz to 8 kHz low-pass cutoff.
pub const TONE_RANGE_HZ: ParamRange = ParamRange {
    name: "tone",
    unit: "Hz",
    min: 800.0,
    max: 8000.0,
    default: 3000.0,
};

/// Level: -12 to +12 dB of output gain.
pub const LEVEL_RANGE_DB: ParamRange = ParamRange {
    name: "level",
    unit: "dB",
    min: -12.0,
    max: 12.0,
    default: 0.0,
};

/// One block's worth of knob values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverdriveParams {
    /// Input gain in dB.
    pub drive_db: f32,
    /// Tone low-pass cutoff in Hz.
    pub tone_hz: f32,
    /// Output gain in dB.
    pub level_db: f32,
}

impl Default for OverdriveParams {
    fn default() -> Self {
        Self {
            drive_db: DRIVE_RANGE_DB.default,
            tone_hz: TONE_RANGE_HZ.default,
            level_db: LEVEL_RANGE_DB.default,
        }
    }
}

impl OverdriveParams {
    /// Copy with every field forced into its nominal range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            drive_db: DRIVE_RANGE_DB.clamp(self.drive_db),
            tone_hz: TONE_RANGE_HZ.clamp(self.tone_hz),
            level_db: LEVEL_RANGE_DB.clamp(self.level_db),
        }
    }

    /// True when every field is within its nominal range.
    pub fn is_nominal(&self) -> bool {
        DRIVE_RANGE_DB.contains(self.drive_db)
            && TONE_RANGE_HZ.contains(self.tone_hz)
            && LEVEL_RANGE_DB.contains(self.level_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_nominal() {
        let p = OverdriveParams::default();
        assert_eq!(p.drive_db, 0.0);
        assert_eq!(p.tone_hz, 3000.0);
        assert_eq!(p.level_db, 0.0);
        assert!(p.is_nominal());
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let p = OverdriveParams {
            drive_db: 40.0,
            tone_hz: 100.0,
            level_db: -30.0,
        }
        .clamped();
        assert_eq!(p.drive_db, 24.0);
        assert_eq!(p.tone_hz, 800.0);
        assert_eq!(p.level_db, -12.0);
        assert!(p.is_nominal());
    }

    #[test]
    fn clamp_handles_non_finite() {
        assert_eq!(TONE_RANGE_HZ.clamp(f32::NAN), 3000.0);
        assert_eq!(TONE_RANGE_HZ.clamp(f32::INFINITY), 8000.0);
        assert_eq!(DRIVE_RANGE_DB.clamp(f32::NEG_INFINITY), 0.0);
        assert!(!LEVEL_RANGE_DB.contains(f32::NAN));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(DRIVE_RANGE_DB.contains(0.0));
        assert!(DRIVE_RANGE_DB.contains(24.0));
        assert!(!DRIVE_RANGE_DB.contains(24.001));
    }
}
