#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::conversion::{rgb_to_xyz, xyz_to_lab};
use super::difference::chroma;
use crate::Float;

/// Approximate the photopic luminous efficiency V(λ) for the given wavelength
/// in nanometers.
///
/// This function models V(λ) as a Gaussian with its peak at 555nm and a
/// standard deviation of 100nm. Wavelengths outside the visible range
/// `380..=780` have no efficiency.
pub(crate) fn photopic_efficiency(wavelength: Float) -> Float {
    if !(380.0..=780.0).contains(&wavelength) {
        return 0.0;
    }

    let normalized = (wavelength - 555.0) / 100.0;
    (-0.5 * normalized * normalized).exp()
}

/// Estimate the dominant wavelength of the given 24-bit sRGB color in
/// nanometers.
///
/// This is a rough heuristic and not a colorimetric computation. It picks the
/// largest channel, with green winning ties, and interpolates within that
/// channel's band by the channel's share of the maximum. Black has no dominant
/// channel and falls back onto the 555nm peak of photopic vision.
pub(crate) fn estimate_dominant_wavelength(rgb: &[u8; 3]) -> Float {
    let [r, g, b] = rgb.map(|c| c as Float / 255.0);
    let max = r.max(g).max(b);

    if max == 0.0 {
        555.0
    } else if g >= r && g >= b {
        (g / max).mul_add(60.0, 490.0)
    } else if r > g && r >= b {
        (r / max).mul_add(120.0, 580.0)
    } else {
        (b / max).mul_add(70.0, 420.0)
    }
}

const PHOTOPIC_WEIGHT: Float = 0.4;
const SATURATION_WEIGHT: Float = 0.35;
const LIGHTNESS_WEIGHT: Float = 0.25;

/// The lightness most comfortable to look at for extended periods.
const COMFORTABLE_LIGHTNESS: Float = 60.0;

/// Compute the eye comfort score for the given 24-bit sRGB color.
///
/// The score combines photopic efficiency at the estimated dominant
/// wavelength, low saturation as measured by CIELAB chroma, and closeness of
/// CIELAB lightness to 60. It ranges from 0 to 100, rounded to one decimal.
#[allow(non_snake_case)]
pub(crate) fn eye_comfort_score(rgb: &[u8; 3]) -> Float {
    let lab = xyz_to_lab(&rgb_to_xyz(rgb));
    let L = lab[0];

    let photopic = photopic_efficiency(estimate_dominant_wavelength(rgb));
    let saturation = (1.0 - chroma(&lab) / 100.0).max(0.0);
    let lightness = (1.0 - (L - COMFORTABLE_LIGHTNESS).abs() / 100.0).max(0.0);

    let score = PHOTOPIC_WEIGHT.mul_add(
        photopic,
        SATURATION_WEIGHT.mul_add(saturation, LIGHTNESS_WEIGHT * lightness),
    );

    (score * 1000.0).round() / 10.0
}

// --------------------------------------------------------------------------------------------------------------------

/// The rating for an eye comfort score.
///
/// Each variant's threshold is the inclusive lower bound for scores with that
/// rating.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComfortRating {
    /// A score below 55.
    Adequate,
    /// A score of at least 55.
    Good,
    /// A score of at least 65.
    VeryGood,
    /// A score of at least 75.
    Excellent,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ComfortRating {
    /// Rate the given eye comfort score.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn of(score: Float) -> Self {
        Self::rate(score)
    }

    /// Rate the given eye comfort score.
    ///
    /// ```
    /// # use verdure::{calculate_eye_comfort_score, ComfortRating};
    /// # use verdure::error::ColorFormatError;
    /// let score = calculate_eye_comfort_score("#A3D977")?;
    /// assert_eq!(ComfortRating::of(score), ComfortRating::Excellent);
    /// assert_eq!(ComfortRating::of(64.9), ComfortRating::Good);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn of(score: Float) -> Self {
        Self::rate(score)
    }

    /// Get the inclusive lower bound for this rating.
    pub const fn threshold(&self) -> Float {
        match *self {
            Self::Adequate => 0.0,
            Self::Good => 55.0,
            Self::VeryGood => 65.0,
            Self::Excellent => 75.0,
        }
    }
}

impl ComfortRating {
    fn rate(score: Float) -> Self {
        if score >= 75.0 {
            Self::Excellent
        } else if score >= 65.0 {
            Self::VeryGood
        } else if score >= 55.0 {
            Self::Good
        } else {
            Self::Adequate
        }
    }
}

impl std::fmt::Display for ComfortRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match *self {
            Self::Adequate => "adequate",
            Self::Good => "good",
            Self::VeryGood => "very good",
            Self::Excellent => "excellent",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::{estimate_dominant_wavelength, eye_comfort_score, photopic_efficiency};
    use super::ComfortRating;
    use crate::assert_close_enough;

    #[test]
    fn test_photopic_efficiency() {
        assert_eq!(photopic_efficiency(555.0), 1.0);
        assert_eq!(photopic_efficiency(379.9), 0.0);
        assert_eq!(photopic_efficiency(780.1), 0.0);
        assert!(photopic_efficiency(380.0) > 0.0);
        assert!(photopic_efficiency(780.0) > 0.0);
        assert_close_enough!(photopic_efficiency(455.0), photopic_efficiency(655.0));
        assert_close_enough!(photopic_efficiency(655.0), (-0.5_f64).exp() as crate::Float);
    }

    #[test]
    fn test_dominant_wavelength() {
        assert_eq!(estimate_dominant_wavelength(&[0, 0, 0]), 555.0);
        assert_eq!(estimate_dominant_wavelength(&[255, 0, 0]), 700.0);
        assert_eq!(estimate_dominant_wavelength(&[0, 255, 0]), 550.0);
        assert_eq!(estimate_dominant_wavelength(&[0, 0, 255]), 490.0);
        // Green wins ties.
        assert_eq!(estimate_dominant_wavelength(&[255, 255, 255]), 550.0);
        assert_eq!(estimate_dominant_wavelength(&[0xa3, 0xd9, 0x77]), 550.0);
    }

    #[test]
    fn test_eye_comfort_score() {
        assert_close_enough!(eye_comfort_score(&[0xa3, 0xd9, 0x77]), 75.5);
        assert_close_enough!(eye_comfort_score(&[255, 0, 0]), 37.3);
        assert_close_enough!(eye_comfort_score(&[0, 0, 0]), 85.0);
        assert_close_enough!(eye_comfort_score(&[255, 255, 255]), 90.0);
        assert_close_enough!(eye_comfort_score(&[0x80, 0x80, 0x80]), 98.3);
        assert_close_enough!(eye_comfort_score(&[0xd9, 0xd3, 0xc7]), 65.5);
    }

    #[test]
    fn test_comfort_rating() {
        assert_eq!(ComfortRating::of(100.0), ComfortRating::Excellent);
        assert_eq!(ComfortRating::of(75.0), ComfortRating::Excellent);
        assert_eq!(ComfortRating::of(74.9), ComfortRating::VeryGood);
        assert_eq!(ComfortRating::of(65.0), ComfortRating::VeryGood);
        assert_eq!(ComfortRating::of(55.0), ComfortRating::Good);
        assert_eq!(ComfortRating::of(54.9), ComfortRating::Adequate);
        assert_eq!(ComfortRating::of(0.0), ComfortRating::Adequate);
        assert_eq!(ComfortRating::VeryGood.to_string(), "very good");
    }
}
