//! Utility module for simulating dichromacy and checking whether contrast
//! survives it.
//!
//! Roughly one in twelve men has some form of color vision deficiency. A
//! foreground/background pair that reads fine with normal color vision may
//! lose much of its contrast once a dichromat's eyes collapse two of the three
//! cone responses into one. [`ColorblindSafety`] captures the contrast ratios
//! under normal vision and under each [`Dichromacy`].
//!
//! ```
//! # use verdure::validate_colorblind_safety;
//! # use verdure::error::ColorFormatError;
//! # use verdure::vision::Dichromacy;
//! let safety = validate_colorblind_safety("#E07A5F", "#101713", 4.5)?;
//! assert!(safety.all_safe);
//! assert_eq!(safety.worst(), safety.ratio(Some(Dichromacy::Protanopia)));
//! # Ok::<(), ColorFormatError>(())
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

pub use crate::core::Dichromacy;
use crate::{Float, Rgb};

/// The contrast between a foreground and background color under normal color
/// vision and the three dichromacies.
///
/// Both colors are simulated before computing the contrast ratio for a
/// dichromacy. The pair is safe only if all four ratios meet the minimum.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorblindSafety {
    /// The contrast ratio under normal color vision.
    pub normal: Float,
    /// The contrast ratio for deuteranopes.
    pub deuteranopia: Float,
    /// The contrast ratio for protanopes.
    pub protanopia: Float,
    /// The contrast ratio for tritanopes.
    pub tritanopia: Float,
    /// Whether all four contrast ratios meet the minimum.
    pub all_safe: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorblindSafety {
    /// Get the contrast ratio for the given dichromacy, with `None` denoting
    /// normal color vision.
    pub fn ratio(&self, dichromacy: Option<Dichromacy>) -> Float {
        match dichromacy {
            None => self.normal,
            Some(Dichromacy::Deuteranopia) => self.deuteranopia,
            Some(Dichromacy::Protanopia) => self.protanopia,
            Some(Dichromacy::Tritanopia) => self.tritanopia,
        }
    }

    /// Get the smallest of the four contrast ratios.
    pub fn worst(&self) -> Float {
        self.normal
            .min(self.deuteranopia)
            .min(self.protanopia)
            .min(self.tritanopia)
    }

    /// Convert this verdict to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl ColorblindSafety {
    /// Evaluate the contrast between the two colors for normal color vision
    /// and all three dichromacies.
    ///
    /// ```
    /// # use verdure::Rgb;
    /// # use verdure::vision::ColorblindSafety;
    /// let gray = Rgb::new(0x77, 0x77, 0x77);
    /// let lighter_gray = Rgb::new(0x88, 0x88, 0x88);
    /// let safety = ColorblindSafety::evaluate(&gray, &lighter_gray, 4.5);
    /// assert!(!safety.all_safe);
    /// assert!(safety.worst() < 4.5);
    /// ```
    pub fn evaluate(foreground: &Rgb, background: &Rgb, min_contrast: Float) -> Self {
        let contrast = |dichromacy: Dichromacy| {
            dichromacy
                .simulate(foreground)
                .contrast_ratio(&dichromacy.simulate(background))
        };

        let normal = foreground.contrast_ratio(background);
        let deuteranopia = contrast(Dichromacy::Deuteranopia);
        let protanopia = contrast(Dichromacy::Protanopia);
        let tritanopia = contrast(Dichromacy::Tritanopia);

        let all_safe = [normal, deuteranopia, protanopia, tritanopia]
            .iter()
            .all(|ratio| *ratio >= min_contrast);

        Self {
            normal,
            deuteranopia,
            protanopia,
            tritanopia,
            all_safe,
        }
    }
}
