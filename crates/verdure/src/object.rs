#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    chroma, contrast_ratio, delta_e, estimate_dominant_wavelength, eye_comfort_score, format_hex,
    hue_angle, lab_to_xyz, lms_to_rgb, parse_hex, relative_luminance, rgb_to_lms, rgb_to_xyz,
    xyz_to_lab, xyz_to_rgb, D65,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit sRGB color.
///
/// This is the color representation at verdure's edges. Rust code can create
/// a new color with [`Rgb::new`], from its coordinates with [`Rgb as
/// From<[u8; 3]>`](struct.Rgb.html#impl-From%3C%5Bu8;+3%5D%3E-for-Rgb), or by
/// parsing a hashed hexadecimal string with [`Rgb as
/// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb). Formatting with [`Rgb as
/// Display`](struct.Rgb.html#impl-Display-for-Rgb) produces the hashed
/// hexadecimal notation with uppercase digits again.
///
/// ```
/// # use verdure::Rgb;
/// # use verdure::error::ColorFormatError;
/// let green: Rgb = "#a3d977".parse()?;
/// assert_eq!(green, Rgb::new(0xa3, 0xd9, 0x77));
/// assert_eq!(green.as_ref(), &[163_u8, 217, 119]);
/// assert_eq!(green[1], 217);
/// assert_eq!(format!("{}", green), "#A3D977");
/// # Ok::<(), ColorFormatError>(())
/// ```
///
/// With the `serde` feature enabled, colors serialize as their hexadecimal
/// strings.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "verdure")
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgb {
    /// Create a new sRGB color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new sRGB color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a color in hashed hexadecimal format. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method offers the same functionality as [`Rgb as
    /// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        use std::str::FromStr;

        Rgb::from_str(s)
    }

    /// Access this color's coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Format this color in hashed hexadecimal notation with uppercase
    /// digits.
    pub fn to_hex(&self) -> String {
        format_hex(&self.0)
    }

    /// Convert this color to CIE 1931 XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(rgb_to_xyz(&self.0))
    }

    /// Convert this color to CIELAB.
    ///
    /// ```
    /// # use verdure::Rgb;
    /// let white = Rgb::new(255, 255, 255).to_lab();
    /// assert!((white.l - 100.0).abs() < 1e-4);
    /// assert!(white.a.abs() < 1e-4 && white.b.abs() < 1e-4);
    /// ```
    pub fn to_lab(&self) -> Lab {
        Lab::from(xyz_to_lab(&rgb_to_xyz(&self.0)))
    }

    /// Convert this color to LMS cone responses.
    pub fn to_lms(&self) -> Lms {
        Lms::from(rgb_to_lms(&self.0))
    }

    /// Compute this color's WCAG 2.1 relative luminance in `0..=1`.
    pub fn relative_luminance(&self) -> Float {
        relative_luminance(&self.0)
    }

    /// Compute the WCAG 2.1 contrast ratio between this and the other color.
    ///
    /// The ratio is symmetric and ranges from 1 to 21.
    ///
    /// ```
    /// # use verdure::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.contrast_ratio(&white), white.contrast_ratio(&black));
    /// assert!((black.contrast_ratio(&white) - 21.0).abs() < 1e-9);
    /// ```
    pub fn contrast_ratio(&self, other: &Rgb) -> Float {
        contrast_ratio(relative_luminance(&self.0), relative_luminance(&other.0))
    }

    /// Estimate this color's dominant wavelength in nanometers.
    pub fn dominant_wavelength(&self) -> Float {
        estimate_dominant_wavelength(&self.0)
    }

    /// Compute this color's eye comfort score in `0..=100`.
    pub fn eye_comfort_score(&self) -> Float {
        eye_comfort_score(&self.0)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a color in hashed hexadecimal format.
    ///
    /// The string must contain exactly six hexadecimal digits in either case,
    /// optionally preceded by a `#`. It must not contain white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Xyz> for Rgb {
    /// Convert the XYZ color to sRGB, clamping out-of-gamut coordinates.
    fn from(value: Xyz) -> Self {
        Self(xyz_to_rgb(&value.coordinates()))
    }
}

impl From<Lab> for Rgb {
    /// Convert the CIELAB color to sRGB, clamping out-of-gamut coordinates.
    fn from(value: Lab) -> Self {
        Self(xyz_to_rgb(&lab_to_xyz(&value.coordinates())))
    }
}

impl From<Lms> for Rgb {
    /// Convert the LMS cone responses to sRGB, clamping out-of-gamut
    /// coordinates.
    fn from(value: Lms) -> Self {
        Self(lms_to_rgb(&value.coordinates()))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hex(&self.0))
    }
}

// ====================================================================================================================

/// A color in the CIE 1931 XYZ color space, relative to the D65 white point
/// and with Y in `0..=100`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

/// The CIE standard illuminant D65 with Y scaled to 100.
///
/// All conversions between XYZ and CIELAB normalize by this white point.
pub const D65_WHITE_POINT: Xyz = Xyz::new(D65[0], D65[1], D65[2]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Xyz {
    /// Create a new XYZ color.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Create a new XYZ color.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Get this color's coordinates as an array.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert this color to CIELAB.
    pub fn to_lab(&self) -> Lab {
        Lab::from(xyz_to_lab(&self.coordinates()))
    }

    /// Convert this color to 24-bit sRGB, clamping out-of-gamut coordinates.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<[Float; 3]> for Xyz {
    fn from(value: [Float; 3]) -> Self {
        let [x, y, z] = value;
        Self::new(x, y, z)
    }
}

impl From<Rgb> for Xyz {
    fn from(value: Rgb) -> Self {
        value.to_xyz()
    }
}

impl From<Lab> for Xyz {
    fn from(value: Lab) -> Self {
        value.to_xyz()
    }
}

// ====================================================================================================================

/// A color in the CIELAB 1976 color space.
///
/// Besides conversion, CIELAB supports [`Lab::delta_e`] as a perceptual
/// distance metric as well as [`Lab::chroma`] and [`Lab::hue_angle`] as polar
/// coordinates.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab {
    /// The lightness in `0..=100`.
    pub l: Float,
    /// The green-red axis.
    pub a: Float,
    /// The blue-yellow axis.
    pub b: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Lab {
    /// Create a new CIELAB color.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    /// Create a new CIELAB color.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    /// Get this color's coordinates as an array.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert this color to XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(lab_to_xyz(&self.coordinates()))
    }

    /// Convert this color to 24-bit sRGB, clamping out-of-gamut coordinates.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    /// Compute the CIE76 color difference between this and the other color.
    ///
    /// ```
    /// # use verdure::Lab;
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// let tinted = Lab::new(53.0, 4.0, 0.0);
    /// assert!((gray.delta_e(&tinted) - 5.0).abs() < 1e-9);
    /// ```
    pub fn delta_e(&self, other: &Lab) -> Float {
        delta_e(&self.coordinates(), &other.coordinates())
    }

    /// Compute this color's chroma.
    pub fn chroma(&self) -> Float {
        chroma(&self.coordinates())
    }

    /// Compute this color's hue angle in radians.
    pub fn hue_angle(&self) -> Float {
        hue_angle(&self.coordinates())
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<[Float; 3]> for Lab {
    fn from(value: [Float; 3]) -> Self {
        let [l, a, b] = value;
        Self::new(l, a, b)
    }
}

impl From<Rgb> for Lab {
    fn from(value: Rgb) -> Self {
        value.to_lab()
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        value.to_lab()
    }
}

// ====================================================================================================================

/// The Hunt-Pointer-Estevez cone responses for long, medium, and short
/// wavelengths.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lms {
    pub l: Float,
    pub m: Float,
    pub s: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Lms {
    /// Create new cone responses.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(l: Float, m: Float, s: Float) -> Self {
        Self { l, m, s }
    }

    /// Create new cone responses.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(l: Float, m: Float, s: Float) -> Self {
        Self { l, m, s }
    }

    /// Get the cone responses as an array.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.m, self.s]
    }

    /// Convert the cone responses to 24-bit sRGB, clamping out-of-gamut
    /// coordinates.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    /// Convert these cone responses to their debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<[Float; 3]> for Lms {
    fn from(value: [Float; 3]) -> Self {
        let [l, m, s] = value;
        Self::new(l, m, s)
    }
}

impl From<Rgb> for Lms {
    fn from(value: Rgb) -> Self {
        value.to_lms()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Lab, Rgb, Xyz, D65_WHITE_POINT};
    use crate::error::ColorFormatError;

    #[test]
    fn test_rgb_strings() -> Result<(), ColorFormatError> {
        let green: Rgb = "a3d977".parse()?;
        assert_eq!(green, Rgb::new(0xa3, 0xd9, 0x77));
        assert_eq!(green.to_string(), "#A3D977");
        assert_eq!(String::from(green), "#A3D977");
        assert_eq!(Rgb::try_from("#A3D977")?, green);
        assert_eq!(Rgb::try_from(String::from("#a3D977"))?, green);
        assert_eq!(
            Rgb::try_from("#A3D97"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }

    #[test]
    fn test_rgb_access() {
        let color = Rgb::from([1, 2, 3]);
        assert_eq!(color.as_ref(), &[1, 2, 3]);
        assert_eq!(color[0], 1);
        assert_eq!(color[2], 3);
        assert_eq!(<[u8; 3]>::from(color), [1, 2, 3]);
    }

    #[test]
    fn test_conversions() {
        let green = Rgb::new(0xa3, 0xd9, 0x77);
        assert_eq!(green.to_xyz().to_rgb(), green);
        assert_eq!(green.to_lab().to_rgb(), green);
        assert_eq!(Rgb::from(Lab::from(green)), green);
        assert_eq!(Rgb::from(Xyz::from(green)), green);
        assert_eq!(Xyz::from(green).to_lab(), green.to_lab());

        let black = Rgb::new(0, 0, 0);
        assert_eq!(black.to_lab(), Lab::new(0.0, 0.0, 0.0));
        assert_eq!(black.to_lms().to_rgb(), black);
    }

    #[test]
    fn test_white_point() {
        assert_eq!(D65_WHITE_POINT.coordinates(), [95.047, 100.0, 108.883]);
        assert_eq!(D65_WHITE_POINT.to_rgb(), Rgb::new(255, 255, 255));
        assert!((D65_WHITE_POINT.to_lab().l - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lab_metrics() {
        let lab = Lab::new(60.0, 3.0, 4.0);
        assert_eq!(lab.chroma(), 5.0);
        assert_eq!(lab.delta_e(&lab), 0.0);
        assert_eq!(Lab::new(60.0, 0.0, 0.0).hue_angle(), 0.0);
    }

    #[test]
    fn test_rgb_metrics() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.relative_luminance(), 0.0);
        assert!((white.relative_luminance() - 1.0).abs() < 1e-9);
        assert_eq!(black.dominant_wavelength(), 555.0);
        assert_eq!(black.eye_comfort_score(), 85.0);
    }
}
