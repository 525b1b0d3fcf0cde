//! Utility module with verdure's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An unknown WCAG conformance level.
///
/// Verdure recognizes `AA` and `AAA` only, though in either case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLevelError {
    pub value: String,
}

impl UnknownLevelError {
    /// Create a new unknown level error.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Display for UnknownLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:?} is not a WCAG level; expected AA or AAA",
            self.value
        ))
    }
}

impl std::error::Error for UnknownLevelError {}

#[cfg(feature = "pyffi")]
impl From<UnknownLevelError> for PyErr {
    fn from(value: UnknownLevelError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Verdure accepts colors only in hashed hexadecimal format with exactly six
/// hexadecimal digits, optionally preceded by a `#`, with digits in either
/// case. Both variants indicate an invalid format and
/// [`ColorFormatError::is_invalid_format`] holds for both. They differ only in
/// what exactly is wrong with the string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormatError {
    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#A3D97` is missing a hexadecimal digit,
    /// whereas `#💩00` has the correct number of bytes but contains an
    /// unsuitable character.
    UnexpectedCharacters,

    /// A color format that has six ASCII characters, one of which is not a
    /// hexadecimal digit. For example, `#A3D97G` ends in a `G`.
    MalformedHex,
}

impl ColorFormatError {
    /// Determine whether this error indicates an invalid format.
    ///
    /// Since verdure only parses hexadecimal colors, this method always
    /// returns `true`. It exists so that callers can match on the kind of
    /// failure without caring about the variant.
    pub const fn is_invalid_format(&self) -> bool {
        matches!(*self, Self::UnexpectedCharacters | Self::MalformedHex)
    }
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedCharacters => f.write_str(
                "hex color should consist of an optional `#` followed by 6 ASCII characters",
            ),
            MalformedHex => f.write_str("hex color should contain only hexadecimal digits"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
