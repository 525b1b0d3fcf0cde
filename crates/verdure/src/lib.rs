//! # Verdure 🌿
//!
//! Verdure brings a compact dose of color science to the validation of editor
//! color themes.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Python bindings are available with the `pyffi` feature enabled."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Verdure's main abstractions are:
//!
//!   * The value types [`Rgb`], [`Xyz`], [`Lab`], and [`Lms`] for **24-bit
//!     sRGB**, **CIE 1931 XYZ**, **CIELAB 1976**, and **Hunt-Pointer-Estevez
//!     cone responses**. All four are small, immutable `Copy` types and all
//!     conversions between them return new values. The XYZ and CIELAB
//!     coordinates are anchored by the fixed [`D65_WHITE_POINT`].
//!   * **Perceptual and accessibility metrics**, notably the CIE76 color
//!     difference [`delta_e`], the WCAG 2.1 [`relative_luminance`] and
//!     [`contrast_ratio`], the [`meets_wcag`] threshold test for the
//!     [`WcagLevel`](wcag::WcagLevel)s, as well as a heuristic
//!     [`calculate_eye_comfort_score`].
//!   * The [`vision`] module's **dichromacy simulation** for the three
//!     [`Dichromacy`](vision::Dichromacy) variants and the
//!     [`ColorblindSafety`](vision::ColorblindSafety) verdict for
//!     foreground/background pairs.
//!   * The [`light`] module's **light-mode derivation**, which inverts CIELAB
//!     lightness while boosting chroma, as configured by
//!     [`LightModeOptions`](light::LightModeOptions).
//!
//! Since colors usually arrive as strings from palette tables, the crate root
//! also exports functions that accept hashed hexadecimal strings such as
//! `#A3D977` and return either hexadecimal strings or plain numbers. Those
//! strings are the only input that may be malformed. Hence
//! [`ColorFormatError`](error::ColorFormatError) is the only error, too.
//! Conversions from XYZ, CIELAB, or LMS back to sRGB silently clamp
//! out-of-gamut colors instead.
//!
//!
//! ## 2. One-Two-Three: Verdicts!
//!
//! ```
//! # use verdure::{contrast_ratio, meets_wcag, validate_colorblind_safety};
//! # use verdure::error::ColorFormatError;
//! # use verdure::wcag::WcagLevel;
//! // 1. Measure the contrast between background and foreground
//! let ratio = contrast_ratio("#101713", "#D9D3C7")?;
//! assert!(12.0 < ratio && ratio < 12.5);
//!
//! // 2. Check against WCAG thresholds
//! assert!(meets_wcag("#101713", "#D9D3C7", WcagLevel::AAA, false)?);
//!
//! // 3. Make sure the contrast survives dichromacy
//! let safety = validate_colorblind_safety("#A3D977", "#101713", 4.5)?;
//! assert!(safety.all_safe);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Verdure supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives serialization support for the value types and
//!     verdicts. [`Rgb`] serializes as its hexadecimal string. This feature is
//!     disabled by default.
//!   - **`pyffi`** controls verdure's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Logging
//!
//! Verdure emits diagnostics through [tracing](https://docs.rs/tracing) but
//! never installs a subscriber. Rejected color strings are logged at `debug`
//! level and gamut clamping at `trace` level.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod api;
mod core;
pub mod error;
pub mod light;
mod object;
pub mod vision;
pub mod wcag;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use api::{
    calculate_eye_comfort_score, contrast_ratio, delta_e, estimate_dominant_wavelength,
    hex_to_lab, hex_to_rgb, lab_to_hex, lab_to_xyz, linear_to_srgb, lms_to_rgb, meets_wcag,
    photopic_efficiency, relative_luminance, rgb_to_hex, rgb_to_lms, rgb_to_xyz,
    simulate_deuteranopia, simulate_protanopia, simulate_tritanopia, srgb_to_linear,
    to_light_mode, validate_colorblind_safety, xyz_to_lab, xyz_to_rgb, DEFAULT_MIN_CONTRAST,
};
pub use core::{ComfortRating, Spacing};
pub use object::{Lab, Lms, Rgb, Xyz, D65_WHITE_POINT};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn verdure(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // ------------------------------------------------------------------- conversions
    m.add_function(wrap_pyfunction!(hex_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(srgb_to_linear, m)?)?;
    m.add_function(wrap_pyfunction!(linear_to_srgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_xyz, m)?)?;
    m.add_function(wrap_pyfunction!(xyz_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(xyz_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(lab_to_xyz, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_lms, m)?)?;
    m.add_function(wrap_pyfunction!(lms_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(hex_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(lab_to_hex, m)?)?;

    // ----------------------------------------------------------------------- metrics
    m.add_function(wrap_pyfunction!(delta_e, m)?)?;
    m.add_function(wrap_pyfunction!(relative_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(meets_wcag, m)?)?;
    m.add_function(wrap_pyfunction!(photopic_efficiency, m)?)?;
    m.add_function(wrap_pyfunction!(estimate_dominant_wavelength, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_eye_comfort_score, m)?)?;

    // -------------------------------------------------------------------- simulation
    m.add_function(wrap_pyfunction!(simulate_deuteranopia, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_protanopia, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_tritanopia, m)?)?;
    m.add_function(wrap_pyfunction!(validate_colorblind_safety, m)?)?;

    // ----------------------------------------------------------------------- classes
    m.add_class::<Rgb>()?;
    m.add_class::<Xyz>()?;
    m.add_class::<Lab>()?;
    m.add_class::<Lms>()?;
    m.add_class::<ComfortRating>()?;
    m.add_class::<Spacing>()?;
    m.add_class::<wcag::WcagLevel>()?;
    m.add_class::<vision::Dichromacy>()?;
    m.add_class::<vision::ColorblindSafety>()?;

    m.add("D65_WHITE_POINT", D65_WHITE_POINT)?;
    m.add("DEFAULT_MIN_CONTRAST", DEFAULT_MIN_CONTRAST)?;

    Ok(())
}
