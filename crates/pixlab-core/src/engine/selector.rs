//! The closed set of transforms offered by the viewer dropdown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exponent of the brightening gamma curve.
pub const GAMMA_BRIGHTEN: f32 = 0.4;

/// Exponent of the darkening gamma curve.
pub const GAMMA_DARKEN: f32 = 2.2;

/// A point-wise intensity transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformSelector {
    /// `255 - v` per channel.
    #[default]
    Negative,
    /// Logarithmic compression normalized by the image maximum.
    LogTransform,
    /// Gamma curve with exponent [`GAMMA_BRIGHTEN`].
    GammaCorrection,
    /// Gamma curve with exponent [`GAMMA_DARKEN`].
    GammaExpansion,
    /// Perceptual luminance replicated across the color channels.
    Grayscale,
    /// No change.
    Identity,
}

impl TransformSelector {
    /// Every selector, in dropdown order.
    pub const ALL: [TransformSelector; 6] = [
        TransformSelector::Negative,
        TransformSelector::LogTransform,
        TransformSelector::GammaCorrection,
        TransformSelector::GammaExpansion,
        TransformSelector::Grayscale,
        TransformSelector::Identity,
    ];

    /// Human-readable name shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            TransformSelector::Negative => "Image negative",
            TransformSelector::LogTransform => "Log transformation",
            TransformSelector::GammaCorrection => "Gamma correction (0.4)",
            TransformSelector::GammaExpansion => "Gamma correction (2.2)",
            TransformSelector::Grayscale => "Grayscaling",
            TransformSelector::Identity => "No transformation",
        }
    }
}

impl fmt::Display for TransformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_negative() {
        assert_eq!(TransformSelector::default(), TransformSelector::Negative);
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = TransformSelector::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), TransformSelector::ALL.len());
    }

    #[test]
    fn test_both_gamma_variants_exposed() {
        assert!(TransformSelector::ALL.contains(&TransformSelector::GammaCorrection));
        assert!(TransformSelector::ALL.contains(&TransformSelector::GammaExpansion));
    }

    #[test]
    fn test_serde_round_trip() {
        for selector in TransformSelector::ALL {
            let json = serde_json::to_string(&selector).unwrap();
            let back: TransformSelector = serde_json::from_str(&json).unwrap();
            assert_eq!(back, selector);
        }
        assert_eq!(
            serde_json::to_string(&TransformSelector::LogTransform).unwrap(),
            "\"LogTransform\""
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TransformSelector::LogTransform.to_string(), "Log transformation");
    }
}
