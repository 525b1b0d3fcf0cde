use crate::core::srgb_to_linear;
use crate::Float;

/// The ITU-R BT.709 coefficients for computing the relative luminance from
/// linear sRGB coordinates.
const BT709: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the WCAG 2.1 relative luminance for the given 24-bit sRGB color.
///
/// The result ranges from 0 for black to 1 for white.
pub(crate) fn relative_luminance(rgb: &[u8; 3]) -> Float {
    let [c1, c2, c3] = *BT709;
    let [r, g, b] = *rgb;

    srgb_to_linear(r).mul_add(c1, srgb_to_linear(g).mul_add(c2, srgb_to_linear(b) * c3))
}

/// The flare added to both luminances before taking their ratio.
const FLARE: Float = 0.05;

/// Compute the WCAG 2.1 contrast ratio for the two relative luminances.
///
/// Unlike the perceptual contrast of more recent algorithms, the ratio is
/// symmetric: This function divides the lighter by the darker luminance, no
/// matter the argument order. For luminances in `0..=1`, the result ranges
/// from 1 to 21.
pub(crate) fn contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let lighter = luminance1.max(luminance2);
    let darker = luminance1.min(luminance2);

    (lighter + FLARE) / (darker + FLARE)
}

#[cfg(test)]
mod test {
    use super::{contrast_ratio, relative_luminance};
    use crate::assert_close_enough;

    #[test]
    fn test_relative_luminance() {
        assert_close_enough!(relative_luminance(&[0, 0, 0]), 0.0);
        assert_close_enough!(relative_luminance(&[255, 255, 255]), 1.0);
        assert_close_enough!(relative_luminance(&[255, 0, 0]), 0.2126);
        assert_close_enough!(relative_luminance(&[0, 255, 0]), 0.7152);
        assert_close_enough!(relative_luminance(&[0, 0, 255]), 0.0722);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close_enough!(contrast_ratio(0.0, 1.0), 21.0);
        assert_close_enough!(contrast_ratio(1.0, 0.0), 21.0);
        assert_eq!(contrast_ratio(0.3, 0.3), 1.0);

        let background = relative_luminance(&[0x10, 0x17, 0x13]);
        let text = relative_luminance(&[0xd9, 0xd3, 0xc7]);
        assert_eq!(contrast_ratio(background, text), contrast_ratio(text, background));
        assert!(12.2 < contrast_ratio(background, text));
        assert!(contrast_ratio(background, text) < 12.3);
    }
}
