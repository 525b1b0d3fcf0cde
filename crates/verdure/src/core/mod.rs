mod comfort;
mod contrast;
mod conversion;
mod dichromacy;
mod difference;
mod equality;
mod math;
mod string;

// comfort
pub use comfort::ComfortRating;
pub(crate) use comfort::{estimate_dominant_wavelength, eye_comfort_score, photopic_efficiency};

// contrast
pub(crate) use contrast::{contrast_ratio, relative_luminance};

// conversion
pub(crate) use conversion::{
    lab_to_xyz, linear_to_srgb, lms_to_rgb, rgb_to_lms, rgb_to_xyz, srgb_to_linear, xyz_to_lab,
    xyz_to_rgb, D65,
};

// dichromacy
pub use dichromacy::Dichromacy;

// difference
pub use difference::Spacing;
pub(crate) use difference::{chroma, delta_e, hue_angle};

// equality
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::{format_hex, parse_hex};
