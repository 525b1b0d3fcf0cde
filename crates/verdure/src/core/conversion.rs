use super::math::{multiply, scale};
use crate::Float;

/// The CIE standard illuminant D65, scaled so that Y is 100.
///
/// All conversions to and from CIELAB normalize by this white point.
pub(crate) const D65: [Float; 3] = [95.047, 100.0, 108.883];

// --------------------------------------------------------------------------------------------------------------------

/// Convert an 8-bit gamma-corrected sRGB channel to linear sRGB in `0..=1`.
///
/// This function applies the inverse sRGB transfer function, per IEC
/// 61966-2-1.
#[inline]
pub(crate) fn srgb_to_linear(channel: u8) -> Float {
    let value = channel as Float / 255.0;
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear sRGB channel to gamma-corrected sRGB in `0..=255`.
///
/// This function applies the sRGB transfer function and then clamps the result
/// to `0..=255`. That clamp is the only gamut-limiting step on the way back to
/// sRGB. It does not round.
pub(crate) fn linear_to_srgb(value: Float) -> Float {
    let gamma = if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    };

    let channel = gamma * 255.0;
    if !(0.0..=255.0).contains(&channel) {
        tracing::trace!(channel, "clamping out-of-gamut sRGB channel");
    }
    channel.clamp(0.0, 255.0)
}

/// Convert a gamma-corrected sRGB channel to its 8-bit representation.
///
/// Since [`linear_to_srgb`] already clamps, rounding to the nearest integer
/// suffices. Not-a-number saturates to zero.
#[inline]
fn to_8bit(channel: Float) -> u8 {
    channel.round() as u8
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert 24-bit sRGB to XYZ with Y in `0..=100`. This is a two-hop
/// conversion through linear sRGB.
pub(crate) fn rgb_to_xyz(rgb: &[u8; 3]) -> [Float; 3] {
    let linear = [
        srgb_to_linear(rgb[0]),
        srgb_to_linear(rgb[1]),
        srgb_to_linear(rgb[2]),
    ];
    scale(&multiply(&LINEAR_SRGB_TO_XYZ, &linear), 100.0)
}

/// Convert XYZ with Y in `0..=100` to 24-bit sRGB. This is a two-hop
/// conversion through linear sRGB, which clamps out-of-gamut channels.
pub(crate) fn xyz_to_rgb(xyz: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, &scale(xyz, 0.01));
    [
        to_8bit(linear_to_srgb(r)),
        to_8bit(linear_to_srgb(g)),
        to_8bit(linear_to_srgb(b)),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use crate::Float;

    const DELTA: Float = 6.0 / 29.0;
    const OFFSET: Float = 4.0 / 29.0;

    /// The forward CIE 1976 companding function.
    #[inline]
    pub(super) fn f(t: Float) -> Float {
        if t > DELTA * DELTA * DELTA {
            t.cbrt()
        } else {
            t / (3.0 * DELTA * DELTA) + OFFSET
        }
    }

    /// The inverse CIE 1976 companding function.
    #[inline]
    pub(super) fn f_inverse(t: Float) -> Float {
        if t > DELTA {
            t * t * t
        } else {
            3.0 * DELTA * DELTA * (t - OFFSET)
        }
    }
}

/// Convert XYZ to CIELAB, normalizing by the D65 white point. This is a
/// one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(xyz: &[Float; 3]) -> [Float; 3] {
    let fx = cielab::f(xyz[0] / D65[0]);
    let fy = cielab::f(xyz[1] / D65[1]);
    let fz = cielab::f(xyz[2] / D65[2]);

    let L = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [L, a, b]
}

/// Convert CIELAB to XYZ, denormalizing by the D65 white point. This is a
/// one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(lab: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *lab;

    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    [
        cielab::f_inverse(fx) * D65[0],
        cielab::f_inverse(fy) * D65[1],
        cielab::f_inverse(fz) * D65[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// Hunt, R. W. G. (1991). Measuring Colour (2nd ed.)

#[rustfmt::skip]
const XYZ_TO_LMS: [[Float; 3]; 3] = [
    [  0.4002, 0.7075, -0.0807 ],
    [ -0.2280, 1.1500,  0.0612 ],
    [  0.0000, 0.0000,  0.9184 ],
];

// The rounded inverse of the above, which does not quite round-trip.
#[rustfmt::skip]
const LMS_TO_XYZ: [[Float; 3]; 3] = [
    [ 1.8599, -1.1294, 0.2198 ],
    [ 0.3611,  0.6388, 0.0000 ],
    [ 0.0000,  0.0000, 1.0891 ],
];

/// Convert 24-bit sRGB to LMS cone responses. This is a three-hop conversion,
/// with the Hunt-Pointer-Estevez matrix applied to unit-scaled XYZ.
pub(crate) fn rgb_to_lms(rgb: &[u8; 3]) -> [Float; 3] {
    let xyz = rgb_to_xyz(rgb);
    multiply(&XYZ_TO_LMS, &scale(&xyz, 0.01))
}

/// Convert LMS cone responses to 24-bit sRGB. This is a three-hop conversion,
/// which clamps out-of-gamut channels.
pub(crate) fn lms_to_rgb(lms: &[Float; 3]) -> [u8; 3] {
    let xyz = multiply(&LMS_TO_XYZ, lms);
    xyz_to_rgb(&scale(&xyz, 100.0))
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::assert_close_enough;
    use crate::core::equality::assert_same_coordinates;

    struct Representations {
        rgb: [u8; 3],
        xyz: [Float; 3],
        lab: [Float; 3],
    }

    const BLACK: Representations = Representations {
        rgb: [0, 0, 0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    };

    const WHITE: Representations = Representations {
        rgb: [255, 255, 255],
        xyz: [95.047, 100.00001, 108.883],
        lab: [100.00000386666655, -0.000016666666158, 0.000006666666463],
    };

    const KEYWORD_GREEN: Representations = Representations {
        // #A3D977
        rgb: [0xa3, 0xd9, 0x77],
        xyz: [43.24613921944472, 58.74304009724432, 26.509239765120977],
        lab: [81.15014700222368, -34.18277811732473, 42.61560356730516],
    };

    #[test]
    fn test_transfer_function() {
        assert_close_enough!(srgb_to_linear(0), 0.0);
        assert_close_enough!(srgb_to_linear(255), 1.0);
        assert_close_enough!(srgb_to_linear(10), 10.0 / 255.0 / 12.92);
        assert_close_enough!(linear_to_srgb(0.0), 0.0);
        assert_close_enough!(linear_to_srgb(1.0), 255.0);

        for channel in 0..=255_u8 {
            assert_eq!(to_8bit(linear_to_srgb(srgb_to_linear(channel))), channel);
        }
    }

    #[test]
    fn test_gamut_clamping() {
        assert_eq!(linear_to_srgb(-0.5), 0.0);
        assert_eq!(linear_to_srgb(1.5), 255.0);
        assert_eq!(xyz_to_rgb(&[200.0, 200.0, 200.0]), [255, 255, 255]);
        assert_eq!(xyz_to_rgb(&[-10.0, -10.0, -10.0]), [0, 0, 0]);

        // Highly saturated, highly light, definitely not sRGB.
        assert_eq!(xyz_to_rgb(&lab_to_xyz(&[100.0, -128.0, 127.0])), [0, 255, 0]);
    }

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &WHITE, &KEYWORD_GREEN].iter() {
            let xyz = rgb_to_xyz(&color.rgb);
            assert_same_coordinates!(&xyz, &color.xyz);

            let lab = xyz_to_lab(&xyz);
            assert_same_coordinates!(&lab, &color.lab);

            let also_xyz = lab_to_xyz(&lab);
            assert_same_coordinates!(&also_xyz, &xyz);

            assert_eq!(xyz_to_rgb(&xyz), color.rgb);
            assert_eq!(xyz_to_rgb(&also_xyz), color.rgb);
        }
    }

    #[test]
    fn test_lms() {
        assert_eq!(rgb_to_lms(&[0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(lms_to_rgb(&[0.0, 0.0, 0.0]), [0, 0, 0]);

        // The inverse matrix is rounded to four digits, so saturated colors
        // drift by several channel values.
        assert_eq!(lms_to_rgb(&rgb_to_lms(&[0xa3, 0xd9, 0x77])), [0xa8, 0xd7, 0x77]);
        assert_eq!(lms_to_rgb(&rgb_to_lms(&[0xd9, 0xd3, 0xc7])), [0xda, 0xd3, 0xc7]);
        assert_eq!(lms_to_rgb(&rgb_to_lms(&[0x10, 0x17, 0x13])), [0x10, 0x17, 0x13]);
        assert_eq!(lms_to_rgb(&rgb_to_lms(&[0x80, 0x80, 0x80])), [0x80, 0x80, 0x80]);
        assert_eq!(lms_to_rgb(&rgb_to_lms(&[0xff, 0xff, 0xff])), [0xff, 0xff, 0xff]);
    }
}
