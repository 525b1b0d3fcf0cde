//! Property-based tests for verdure's conversions and metrics.
//!
//! 1. Hex strings round-trip exactly, in either case.
//! 2. XYZ and CIELAB round-trip within one per channel.
//! 3. Contrast ratios are symmetric, 1 for identical colors, and within 1..=21.
//! 4. Meeting AAA implies meeting AA.
//! 5. ΔE is a metric: identity, symmetry, triangle inequality.
//! 6. Luminance and the eye comfort score stay within their ranges.
//! 7. Colorblind safety is consistent with its worst ratio.
//! 8. Light-mode derivation without inversion, boost, or shift is the identity.

use proptest::prelude::*;
use verdure::error::ColorFormatError;
use verdure::light::LightModeOptions;
use verdure::vision::ColorblindSafety;
use verdure::wcag::WcagLevel;
use verdure::{
    calculate_eye_comfort_score, contrast_ratio, hex_to_rgb, meets_wcag, to_light_mode, Float,
    Rgb,
};

const EPSILON: Float = if cfg!(feature = "f64") { 1e-9 } else { 1e-4 };

fn rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

fn assert_within_one(actual: Rgb, expected: Rgb) -> Result<(), TestCaseError> {
    for index in 0..3 {
        prop_assert!(
            actual[index].abs_diff(expected[index]) <= 1,
            "{} vs {}",
            actual,
            expected
        );
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Hex strings
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_round_trips(color in rgb()) {
        let hex = color.to_string();
        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(hex_to_rgb(&hex)?, color);
        prop_assert_eq!(hex_to_rgb(&hex.to_lowercase())?, color);
        prop_assert_eq!(hex_to_rgb(&hex[1..])?, color);
    }

    #[test]
    fn non_hex_digits_are_rejected(prefix in "[0-9a-f]{0,5}", bad in "[g-z]") {
        let digits = format!("{}{}", prefix, bad);
        let hex = format!("#{:0<6}", digits);
        prop_assert_eq!(hex_to_rgb(&hex), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn wrong_lengths_are_rejected(digits in "[0-9a-fA-F]{0,12}") {
        prop_assume!(digits.len() != 6);
        prop_assert_eq!(
            hex_to_rgb(&digits),
            Err(ColorFormatError::UnexpectedCharacters)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Round trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn xyz_round_trips(color in rgb()) {
        assert_within_one(color.to_xyz().to_rgb(), color)?;
    }

    #[test]
    fn lab_round_trips(color in rgb()) {
        assert_within_one(color.to_lab().to_rgb(), color)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. and 4. Contrast
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_is_symmetric(color1 in rgb(), color2 in rgb()) {
        let hex1 = color1.to_string();
        let hex2 = color2.to_string();
        prop_assert_eq!(contrast_ratio(&hex1, &hex2)?, contrast_ratio(&hex2, &hex1)?);
    }

    #[test]
    fn contrast_is_bounded(color1 in rgb(), color2 in rgb()) {
        let ratio = color1.contrast_ratio(&color2);
        prop_assert!(1.0 <= ratio && ratio <= 21.0 + EPSILON, "ratio {}", ratio);
        prop_assert_eq!(color1.contrast_ratio(&color1), 1.0);
    }

    #[test]
    fn aaa_implies_aa(color1 in rgb(), color2 in rgb(), large_text in any::<bool>()) {
        let hex1 = color1.to_string();
        let hex2 = color2.to_string();
        if meets_wcag(&hex1, &hex2, WcagLevel::AAA, large_text)? {
            prop_assert!(meets_wcag(&hex1, &hex2, WcagLevel::AA, large_text)?);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. ΔE
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delta_e_is_a_metric(color1 in rgb(), color2 in rgb(), color3 in rgb()) {
        let (lab1, lab2, lab3) = (color1.to_lab(), color2.to_lab(), color3.to_lab());

        prop_assert_eq!(lab1.delta_e(&lab1), 0.0);
        prop_assert_eq!(lab1.delta_e(&lab2), lab2.delta_e(&lab1));
        prop_assert!(lab1.delta_e(&lab2) >= 0.0);
        prop_assert!(
            lab1.delta_e(&lab3) <= lab1.delta_e(&lab2) + lab2.delta_e(&lab3) + EPSILON
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn luminance_is_bounded(color in rgb()) {
        let luminance = color.relative_luminance();
        prop_assert!((0.0..=1.0 + EPSILON).contains(&luminance));
    }

    #[test]
    fn comfort_score_is_bounded(color in rgb()) {
        let score = calculate_eye_comfort_score(&color.to_string())?;
        prop_assert!((0.0..=100.0).contains(&score), "score {}", score);
        prop_assert_eq!((score * 10.0).round() / 10.0, score);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Colorblind safety
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn safety_agrees_with_worst_ratio(
        foreground in rgb(),
        background in rgb(),
        min_contrast in (1.0 as Float)..21.0,
    ) {
        let safety = ColorblindSafety::evaluate(&foreground, &background, min_contrast);
        prop_assert!(safety.worst() <= safety.normal);
        prop_assert_eq!(safety.all_safe, safety.worst() >= min_contrast);
        prop_assert_eq!(safety.normal, foreground.contrast_ratio(&background));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Light mode
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn neutral_light_mode_is_identity(color in rgb()) {
        let options = LightModeOptions::builder()
            .invert_lightness(false)
            .chroma_boost(1.0)
            .lightness_shift(0.0)
            .build();

        let hex = color.to_string();
        prop_assert_eq!(to_light_mode(&hex, &options)?, hex);
    }
}
