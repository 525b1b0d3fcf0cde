//! Utility module with the WCAG 2.1 conformance levels for contrast.
//!
//! The [Web Content Accessibility Guidelines
//! 2.1](https://www.w3.org/TR/WCAG21/#contrast-minimum) require a minimum
//! contrast ratio between text and its background. That minimum depends on the
//! conformance level and on whether the text is large, i.e., at least 18pt or
//! 14pt bold.
//!
//! | Level | Normal text | Large text |
//! |:-----:|------------:|-----------:|
//! | AA    |         4.5 |        3.0 |
//! | AAA   |         7.0 |        4.5 |
//!
//! ```
//! # use verdure::wcag::WcagLevel;
//! # use verdure::error::UnknownLevelError;
//! let level: WcagLevel = "aaa".parse()?;
//! assert_eq!(level, WcagLevel::AAA);
//! assert_eq!(level.threshold(false), 7.0);
//! assert_eq!(WcagLevel::default().threshold(true), 3.0);
//! # Ok::<(), UnknownLevelError>(())
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::UnknownLevelError;
use crate::Float;

/// A WCAG 2.1 conformance level.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum WcagLevel {
    /// The minimum level of conformance for contrast.
    #[default]
    AA,
    /// The enhanced level of conformance for contrast.
    AAA,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl WcagLevel {
    /// Get the minimum contrast ratio for this level.
    pub const fn threshold(&self, large_text: bool) -> Float {
        match (*self, large_text) {
            (Self::AA, false) => 4.5,
            (Self::AA, true) => 3.0,
            (Self::AAA, false) => 7.0,
            (Self::AAA, true) => 4.5,
        }
    }

    /// Determine whether the contrast ratio meets this level.
    pub fn admits(&self, ratio: Float, large_text: bool) -> bool {
        ratio >= self.threshold(large_text)
    }

    /// Get this level's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// Parse a level from its case-insensitive name. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, UnknownLevelError> {
        use std::str::FromStr;

        WcagLevel::from_str(s)
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = UnknownLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AA") {
            Ok(Self::AA)
        } else if s.eq_ignore_ascii_case("AAA") {
            Ok(Self::AAA)
        } else {
            Err(UnknownLevelError::new(s))
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
