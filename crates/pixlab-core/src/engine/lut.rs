//! 256-entry lookup tables for point-wise intensity curves.
//!
//! Every curve is evaluated once per input level in `f32`, rounded and
//! clamped, so applying it to an image is a single table lookup per channel.

/// Pre-computed lookup table: `lut[input] = output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityLut {
    pub lut: [u8; 256],
}

impl IntensityLut {
    fn from_fn(f: impl Fn(f32) -> f32) -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = f(i as f32).clamp(0.0, 255.0).round() as u8;
        }
        Self { lut }
    }

    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        Self::from_fn(|v| v)
    }

    /// `255 - v`.
    pub fn negative() -> Self {
        Self::from_fn(|v| 255.0 - v)
    }

    /// `255 * (v / 255)^gamma`.
    pub fn gamma(gamma: f32) -> Self {
        Self::from_fn(|v| 255.0 * (v / 255.0).powf(gamma))
    }

    /// `255 * ln(1 + v) / ln(1 + max)`.
    ///
    /// A zero `max` means the image is black, and every entry maps to 0.
    pub fn log(max: u8) -> Self {
        if max == 0 {
            return Self { lut: [0u8; 256] };
        }
        let scale = 255.0 / (1.0 + max as f32).ln();
        Self::from_fn(|v| scale * (1.0 + v).ln())
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    /// Map every channel value in place.
    pub fn apply(&self, pixels: &mut [u8]) {
        if self.is_identity() {
            return;
        }
        for value in pixels.iter_mut() {
            *value = self.lut[*value as usize];
        }
    }
}

impl Default for IntensityLut {
    fn default() -> Self {
        Self::identity()
    }
}
