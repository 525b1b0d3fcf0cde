#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;
use crate::light::LightModeOptions;
use crate::vision::{ColorblindSafety, Dichromacy};
use crate::wcag::WcagLevel;
use crate::{core, Float, Lab, Lms, Rgb, Xyz};

/// The default minimum contrast ratio for [`validate_colorblind_safety`],
/// which is WCAG 2.1 level AA for normal text.
pub const DEFAULT_MIN_CONTRAST: Float = 4.5;

// ------------------------------------------------------------------------------------------------------ conversions

/// Parse a color in hashed hexadecimal format.
///
/// The string must contain exactly six hexadecimal digits in either case,
/// optionally preceded by a `#`.
///
/// ```
/// # use verdure::{hex_to_rgb, Rgb};
/// # use verdure::error::ColorFormatError;
/// assert_eq!(hex_to_rgb("#A3D977")?, Rgb::new(163, 217, 119));
/// assert_eq!(hex_to_rgb("a3d977")?, Rgb::new(163, 217, 119));
/// assert_eq!(hex_to_rgb("#A3D97G"), Err(ColorFormatError::MalformedHex));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorFormatError> {
    hex.parse()
}

/// Format a color in hashed hexadecimal format with uppercase digits.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    rgb.to_hex()
}

/// Convert an 8-bit gamma-corrected sRGB channel to linear sRGB in `0..=1`.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn srgb_to_linear(channel: u8) -> Float {
    core::srgb_to_linear(channel)
}

/// Convert a linear sRGB channel to gamma-corrected sRGB in `0..=255`.
///
/// The result is clamped but not rounded.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn linear_to_srgb(value: Float) -> Float {
    core::linear_to_srgb(value)
}

/// Convert sRGB to XYZ.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_xyz(rgb: &Rgb) -> Xyz {
    rgb.to_xyz()
}

/// Convert XYZ to sRGB, clamping out-of-gamut coordinates.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn xyz_to_rgb(xyz: &Xyz) -> Rgb {
    xyz.to_rgb()
}

/// Convert XYZ to CIELAB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn xyz_to_lab(xyz: &Xyz) -> Lab {
    xyz.to_lab()
}

/// Convert CIELAB to XYZ.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lab_to_xyz(lab: &Lab) -> Xyz {
    lab.to_xyz()
}

/// Convert sRGB to LMS cone responses.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_lms(rgb: &Rgb) -> Lms {
    rgb.to_lms()
}

/// Convert LMS cone responses to sRGB, clamping out-of-gamut coordinates.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lms_to_rgb(lms: &Lms) -> Rgb {
    lms.to_rgb()
}

/// Parse a color in hashed hexadecimal format and convert it to CIELAB.
///
/// ```
/// # use verdure::hex_to_lab;
/// # use verdure::error::ColorFormatError;
/// let black = hex_to_lab("#000000")?;
/// assert_eq!((black.l, black.a, black.b), (0.0, 0.0, 0.0));
///
/// let white = hex_to_lab("#FFFFFF")?;
/// assert!((white.l - 100.0).abs() < 0.01);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_lab(hex: &str) -> Result<Lab, ColorFormatError> {
    hex_to_rgb(hex).map(|rgb| rgb.to_lab())
}

/// Convert a CIELAB color to sRGB in hashed hexadecimal format, clamping
/// out-of-gamut coordinates.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lab_to_hex(lab: &Lab) -> String {
    lab.to_rgb().to_hex()
}

// ---------------------------------------------------------------------------------------------------------- metrics

/// Compute the CIE76 color difference between two CIELAB colors.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn delta_e(lab1: &Lab, lab2: &Lab) -> Float {
    lab1.delta_e(lab2)
}

/// Compute the WCAG 2.1 relative luminance of an sRGB color.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn relative_luminance(rgb: &Rgb) -> Float {
    rgb.relative_luminance()
}

/// Compute the WCAG 2.1 contrast ratio between two colors in hashed
/// hexadecimal format.
///
/// ```
/// # use verdure::contrast_ratio;
/// # use verdure::error::ColorFormatError;
/// let ratio = contrast_ratio("#000000", "#FFFFFF")?;
/// assert!((ratio - 21.0).abs() < 1e-9);
/// assert_eq!(ratio, contrast_ratio("#FFFFFF", "#000000")?);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<Float, ColorFormatError> {
    let color1 = hex_to_rgb(hex1)?;
    let color2 = hex_to_rgb(hex2)?;
    Ok(color1.contrast_ratio(&color2))
}

/// Determine whether two colors in hashed hexadecimal format meet the WCAG 2.1
/// contrast requirement for the given level and text size.
///
/// ```
/// # use verdure::meets_wcag;
/// # use verdure::error::ColorFormatError;
/// # use verdure::wcag::WcagLevel;
/// assert!(meets_wcag("#101713", "#D9D3C7", WcagLevel::AAA, false)?);
/// assert!(!meets_wcag("#777777", "#888888", WcagLevel::AA, true)?);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn meets_wcag(
    hex1: &str,
    hex2: &str,
    level: WcagLevel,
    large_text: bool,
) -> Result<bool, ColorFormatError> {
    let ratio = contrast_ratio(hex1, hex2)?;
    Ok(level.admits(ratio, large_text))
}

/// Approximate the photopic luminous efficiency for the wavelength in
/// nanometers.
///
/// The approximation is a Gaussian peaking at 555nm and is zero outside
/// `380..=780`.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn photopic_efficiency(wavelength: Float) -> Float {
    core::photopic_efficiency(wavelength)
}

/// Estimate the dominant wavelength of an sRGB color in nanometers.
///
/// This is a coarse heuristic based on the largest channel.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn estimate_dominant_wavelength(rgb: &Rgb) -> Float {
    rgb.dominant_wavelength()
}

/// Compute the eye comfort score for a color in hashed hexadecimal format.
///
/// The score ranges from 0 to 100 and has one decimal. It rewards colors near
/// the peak of photopic vision, low chroma, and lightness near 60.
///
/// ```
/// # use verdure::calculate_eye_comfort_score;
/// # use verdure::error::ColorFormatError;
/// assert_eq!(calculate_eye_comfort_score("#A3D977")?, 75.5);
/// assert_eq!(calculate_eye_comfort_score("#FF0000")?, 37.3);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn calculate_eye_comfort_score(hex: &str) -> Result<Float, ColorFormatError> {
    hex_to_rgb(hex).map(|rgb| rgb.eye_comfort_score())
}

// ------------------------------------------------------------------------------------------------------- simulation

fn simulate(hex: &str, dichromacy: Dichromacy) -> Result<String, ColorFormatError> {
    hex_to_rgb(hex).map(|rgb| dichromacy.simulate(&rgb).to_hex())
}

/// Simulate deuteranopia for a color in hashed hexadecimal format.
///
/// ```
/// # use verdure::simulate_deuteranopia;
/// # use verdure::error::ColorFormatError;
/// assert_eq!(simulate_deuteranopia("#A3D977")?, "#B0D478");
/// assert_eq!(simulate_deuteranopia("#000000")?, "#000000");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn simulate_deuteranopia(hex: &str) -> Result<String, ColorFormatError> {
    simulate(hex, Dichromacy::Deuteranopia)
}

/// Simulate protanopia for a color in hashed hexadecimal format.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn simulate_protanopia(hex: &str) -> Result<String, ColorFormatError> {
    simulate(hex, Dichromacy::Protanopia)
}

/// Simulate tritanopia for a color in hashed hexadecimal format.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn simulate_tritanopia(hex: &str) -> Result<String, ColorFormatError> {
    simulate(hex, Dichromacy::Tritanopia)
}

/// Determine whether the contrast between foreground and background survives
/// all three dichromacies.
///
/// [`DEFAULT_MIN_CONTRAST`] is a reasonable minimum.
///
/// ```
/// # use verdure::{validate_colorblind_safety, DEFAULT_MIN_CONTRAST};
/// # use verdure::error::ColorFormatError;
/// let safety = validate_colorblind_safety("#D9D3C7", "#101713", DEFAULT_MIN_CONTRAST)?;
/// assert!(safety.all_safe);
///
/// let safety = validate_colorblind_safety("#777777", "#888888", DEFAULT_MIN_CONTRAST)?;
/// assert!(!safety.all_safe);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn validate_colorblind_safety(
    foreground: &str,
    background: &str,
    min_contrast: Float,
) -> Result<ColorblindSafety, ColorFormatError> {
    let foreground = hex_to_rgb(foreground)?;
    let background = hex_to_rgb(background)?;
    Ok(ColorblindSafety::evaluate(
        &foreground,
        &background,
        min_contrast,
    ))
}

// ------------------------------------------------------------------------------------------------------- light mode

/// Derive the light-mode version of a color in hashed hexadecimal format.
///
/// See [`Lab::to_light_mode`] for details.
///
/// ```
/// # use verdure::to_light_mode;
/// # use verdure::light::LightModeOptions;
/// # use verdure::error::ColorFormatError;
/// assert_eq!(to_light_mode("#101713", &LightModeOptions::default())?, "#E4EDE8");
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn to_light_mode(hex: &str, options: &LightModeOptions) -> Result<String, ColorFormatError> {
    hex_to_lab(hex).map(|lab| lab.to_light_mode(options).to_rgb().to_hex())
}
