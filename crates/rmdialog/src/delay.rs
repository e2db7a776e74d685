use std::time::Duration;

/// Per-character pause after a character is revealed.
///
/// Sentence-ending punctuation holds for `heavy` times the base delay,
/// clause punctuation for `light` times; everything else uses the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayPolicy {
    base: Duration,
    heavy: f64,
    light: f64,
}

impl DelayPolicy {
    pub const DEFAULT_HEAVY: f64 = 5.0;
    pub const DEFAULT_LIGHT: f64 = 3.0;

    /// `heavy` and `light` must be finite and positive.
    pub fn new(base: Duration, heavy: f64, light: f64) -> Self {
        Self { base, heavy, light }
    }

    pub fn with_default_multipliers(base: Duration) -> Self {
        Self::new(base, Self::DEFAULT_HEAVY, Self::DEFAULT_LIGHT)
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn delay_for(&self, ch: char) -> Duration {
        match ch {
            '.' | '!' | '?' => self.base.mul_f64(self.heavy),
            ',' | ';' | ':' => self.base.mul_f64(self.light),
            _ => self.base,
        }
    }
}
