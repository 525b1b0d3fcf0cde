//! Helper module for deriving light-mode colors from dark-mode colors.
//!
//! A dark theme's foreground colors tend to be light and its background colors
//! dark. Inverting CIELAB lightness flips that relationship while leaving hue
//! alone. Since colors on light backgrounds tend to look washed out, the
//! derivation also boosts chroma a little.
//!
//!
//! # Example
//!
//! ```
//! # use verdure::to_light_mode;
//! # use verdure::light::LightModeOptions;
//! # use verdure::error::ColorFormatError;
//! let options = LightModeOptions::builder()
//!     .chroma_boost(1.0)
//!     .lightness_shift(10.0)
//!     .build();
//!
//! assert_eq!(options.chroma_boost(), 1.0);
//! assert_eq!(to_light_mode("#808080", &options)?, "#878787");
//! assert_eq!(to_light_mode("#000000", &LightModeOptions::default())?, "#FFFFFF");
//! # Ok::<(), ColorFormatError>(())
//! ```

use crate::core::{chroma, hue_angle};
use crate::{Float, Lab};

#[derive(Clone, Debug, PartialEq)]
struct OptionData {
    invert_lightness: bool,
    chroma_boost: Float,
    lightness_shift: Float,
    preserve_hue: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            invert_lightness: true,
            chroma_boost: 1.1,
            lightness_shift: 0.0,
            preserve_hue: true,
        }
    }
}

/// A builder of light-mode options.
#[derive(Debug)]
pub struct LightModeOptionBuilder(OptionData);

impl LightModeOptionBuilder {
    /// Set whether to invert lightness.
    pub fn invert_lightness(&mut self, invert: bool) -> &mut Self {
        self.0.invert_lightness = invert;
        self
    }

    /// Set the factor for scaling chroma.
    pub fn chroma_boost(&mut self, boost: Float) -> &mut Self {
        self.0.chroma_boost = boost;
        self
    }

    /// Set the amount added to the (possibly inverted) lightness.
    pub fn lightness_shift(&mut self, shift: Float) -> &mut Self {
        self.0.lightness_shift = shift;
        self
    }

    /// Set whether to preserve hue.
    ///
    /// The derivation always preserves hue, so this flag is recorded but has
    /// no effect.
    pub fn preserve_hue(&mut self, preserve: bool) -> &mut Self {
        self.0.preserve_hue = preserve;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> LightModeOptions {
        LightModeOptions(self.0.clone())
    }
}

/// The options for deriving a light-mode color.
///
/// By default, the derivation inverts lightness, boosts chroma by 10%, and
/// does not shift lightness.
#[derive(Clone, Debug, PartialEq)]
pub struct LightModeOptions(OptionData);

impl Default for LightModeOptions {
    fn default() -> Self {
        LightModeOptions(OptionData::new())
    }
}

impl LightModeOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> LightModeOptionBuilder {
        LightModeOptionBuilder(OptionData::new())
    }

    /// Determine whether to invert lightness.
    pub fn invert_lightness(&self) -> bool {
        self.0.invert_lightness
    }

    /// Get the factor for scaling chroma.
    pub fn chroma_boost(&self) -> Float {
        self.0.chroma_boost
    }

    /// Get the amount added to lightness.
    pub fn lightness_shift(&self) -> Float {
        self.0.lightness_shift
    }

    /// Determine whether to preserve hue.
    pub fn preserve_hue(&self) -> bool {
        self.0.preserve_hue
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Lab {
    /// Derive the light-mode version of this color.
    ///
    /// This method first inverts lightness, if so configured, then adds the
    /// lightness shift and clamps the result to `0..=100`. If the color has
    /// chroma and the boost isn't 1, it also scales chroma while keeping the
    /// hue angle. The result may well be out of gamut for sRGB.
    ///
    /// ```
    /// # use verdure::Lab;
    /// # use verdure::light::LightModeOptions;
    /// let options = LightModeOptions::builder().chroma_boost(2.0).build();
    /// let light = Lab::new(30.0, 3.0, 4.0).to_light_mode(&options);
    /// assert!((light.l - 70.0).abs() < 1e-9);
    /// assert!((light.chroma() - 10.0).abs() < 1e-9);
    /// ```
    pub fn to_light_mode(&self, options: &LightModeOptions) -> Lab {
        let lightness = if options.invert_lightness() {
            100.0 - self.l
        } else {
            self.l
        };
        let lightness = (lightness + options.lightness_shift()).clamp(0.0, 100.0);

        let coordinates = self.coordinates();
        let chroma = chroma(&coordinates);
        let boost = options.chroma_boost();
        if chroma == 0.0 || boost == 1.0 {
            return Lab::new(lightness, self.a, self.b);
        }

        let (sin, cos) = hue_angle(&coordinates).sin_cos();
        let chroma = chroma * boost;
        Lab::new(lightness, cos * chroma, sin * chroma)
    }
}
