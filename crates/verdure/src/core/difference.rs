#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// Compute the CIE76 color difference, i.e., the Euclidian distance between
/// the two CIELAB coordinates.
#[allow(non_snake_case)]
pub(crate) fn delta_e(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Compute the chroma of the CIELAB coordinates.
#[inline]
pub(crate) fn chroma(coordinates: &[Float; 3]) -> Float {
    coordinates[1].hypot(coordinates[2])
}

/// Compute the hue angle of the CIELAB coordinates in radians.
#[inline]
pub(crate) fn hue_angle(coordinates: &[Float; 3]) -> Float {
    coordinates[2].atan2(coordinates[1])
}

// --------------------------------------------------------------------------------------------------------------------

/// The perceptual spacing between two colors.
///
/// A palette's colors should differ noticeably from each other. This enum
/// classifies the CIE76 color difference between two colors, with each
/// variant's threshold being the inclusive lower bound.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Spacing {
    /// A color difference of less than 5, which is hard to tell apart.
    TooClose,
    /// A color difference of at least 5 but less than 10.
    Marginal,
    /// A color difference of at least 10.
    Distinct,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Spacing {
    /// Classify the given color difference.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn of(delta_e: Float) -> Self {
        Self::classify(delta_e)
    }

    /// Classify the given color difference.
    ///
    /// ```
    /// # use verdure::Spacing;
    /// assert_eq!(Spacing::of(12.0), Spacing::Distinct);
    /// assert_eq!(Spacing::of(5.0), Spacing::Marginal);
    /// assert_eq!(Spacing::of(4.9), Spacing::TooClose);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn of(delta_e: Float) -> Self {
        Self::classify(delta_e)
    }

    /// Get the inclusive lower bound for this spacing.
    pub const fn threshold(&self) -> Float {
        match *self {
            Self::TooClose => 0.0,
            Self::Marginal => 5.0,
            Self::Distinct => 10.0,
        }
    }
}

impl Spacing {
    fn classify(delta_e: Float) -> Self {
        if delta_e >= 10.0 {
            Self::Distinct
        } else if delta_e >= 5.0 {
            Self::Marginal
        } else {
            Self::TooClose
        }
    }
}

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match *self {
            Self::TooClose => "too close",
            Self::Marginal => "marginal",
            Self::Distinct => "distinct",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::{chroma, delta_e, hue_angle, Spacing};
    use crate::{assert_close_enough, Float};

    #[test]
    fn test_delta_e() {
        let lab1 = [50.0, 10.0, -10.0];
        let lab2 = [53.0, 14.0, -10.0];

        assert_eq!(delta_e(&lab1, &lab1), 0.0);
        assert_close_enough!(delta_e(&lab1, &lab2), 5.0);
        assert_close_enough!(delta_e(&lab2, &lab1), 5.0);
        assert_close_enough!(delta_e(&[0.0, 0.0, 0.0], &[100.0, 0.0, 0.0]), 100.0);
    }

    #[test]
    fn test_chroma_and_hue() {
        assert_close_enough!(chroma(&[50.0, 3.0, 4.0]), 5.0);
        assert_eq!(chroma(&[50.0, 0.0, 0.0]), 0.0);

        let quarter = std::f64::consts::FRAC_PI_2 as Float;
        assert_close_enough!(hue_angle(&[50.0, 0.0, 10.0]), quarter);
        assert_close_enough!(hue_angle(&[50.0, 10.0, 0.0]), 0.0);
    }

    #[test]
    fn test_spacing() {
        assert_eq!(Spacing::of(0.0), Spacing::TooClose);
        assert_eq!(Spacing::of(4.99), Spacing::TooClose);
        assert_eq!(Spacing::of(5.0), Spacing::Marginal);
        assert_eq!(Spacing::of(9.99), Spacing::Marginal);
        assert_eq!(Spacing::of(10.0), Spacing::Distinct);
        assert_eq!(Spacing::of(Float::NAN), Spacing::TooClose);

        for spacing in [Spacing::TooClose, Spacing::Marginal, Spacing::Distinct] {
            assert_eq!(Spacing::of(spacing.threshold()), spacing);
        }
        assert!(Spacing::TooClose < Spacing::Distinct);
        assert_eq!(Spacing::Marginal.to_string(), "marginal");
    }
}
