#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::conversion::{lms_to_rgb, rgb_to_lms};
use crate::{Float, Rgb};

/// A form of dichromacy, i.e., color vision with one of the three cone types
/// missing.
///
/// Each variant simulates its deficiency by replacing the response of the
/// missing cone type with a linear combination of the remaining two
/// responses, following Brettel, Viénot, and Mollon (1997) and Viénot,
/// Brettel, and Mollon (1999).
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "verdure")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dichromacy {
    /// Missing medium-wavelength cones, i.e., green-blindness.
    Deuteranopia,
    /// Missing long-wavelength cones, i.e., red-blindness.
    Protanopia,
    /// Missing short-wavelength cones, i.e., blue-blindness.
    Tritanopia,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Dichromacy {
    /// Simulate how a person with this dichromacy perceives the given color.
    ///
    /// The simulation converts the color to LMS cone responses, substitutes
    /// the missing response, and converts back to sRGB, clamping
    /// out-of-gamut results.
    ///
    /// ```
    /// # use verdure::Rgb;
    /// # use verdure::vision::Dichromacy;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(Dichromacy::Protanopia.simulate(&red).to_string(), "#DE3F00");
    /// assert_eq!(Dichromacy::Tritanopia.simulate(&red), red);
    /// ```
    pub fn simulate(&self, color: &Rgb) -> Rgb {
        Rgb::from(simulate(*self, color.as_ref()))
    }

    /// Get this dichromacy's name, e.g., `deuteranopia`.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Deuteranopia => "deuteranopia",
            Self::Protanopia => "protanopia",
            Self::Tritanopia => "tritanopia",
        }
    }

    /// Get the missing cone type's letter in LMS, e.g., `M`.
    pub const fn missing_cone(&self) -> char {
        match *self {
            Self::Deuteranopia => 'M',
            Self::Protanopia => 'L',
            Self::Tritanopia => 'S',
        }
    }

    /// Convert this dichromacy to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Dichromacy {
    /// All three dichromacies, in the order the metrics report them.
    pub const ALL: [Dichromacy; 3] = [
        Dichromacy::Deuteranopia,
        Dichromacy::Protanopia,
        Dichromacy::Tritanopia,
    ];
}

impl std::fmt::Display for Dichromacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Substitute the missing cone response.
#[allow(non_snake_case)]
pub(crate) fn simulate_lms(dichromacy: Dichromacy, lms: &[Float; 3]) -> [Float; 3] {
    let [L, M, S] = *lms;

    match dichromacy {
        Dichromacy::Deuteranopia => [L, 0.494207 * L + 1.24827 * S, S],
        Dichromacy::Protanopia => [2.02344 * M - 2.52581 * S, M, S],
        Dichromacy::Tritanopia => [L, M, -0.01224 * L + 0.07203 * M],
    }
}

/// Simulate the dichromacy for the 24-bit sRGB color.
pub(crate) fn simulate(dichromacy: Dichromacy, rgb: &[u8; 3]) -> [u8; 3] {
    lms_to_rgb(&simulate_lms(dichromacy, &rgb_to_lms(rgb)))
}

#[cfg(test)]
mod test {
    use super::{simulate, simulate_lms, Dichromacy};

    #[test]
    fn test_simulate_lms() {
        let lms = [0.5, 0.4, 0.3];

        let [l, m, s] = simulate_lms(Dichromacy::Deuteranopia, &lms);
        assert_eq!((l, s), (0.5, 0.3));
        assert_ne!(m, 0.4);

        let [l, m, s] = simulate_lms(Dichromacy::Protanopia, &lms);
        assert_eq!((m, s), (0.4, 0.3));
        assert_ne!(l, 0.5);

        let [l, m, s] = simulate_lms(Dichromacy::Tritanopia, &lms);
        assert_eq!((l, m), (0.5, 0.4));
        assert_ne!(s, 0.3);
    }

    #[test]
    fn test_simulate() {
        for dichromacy in Dichromacy::ALL {
            assert_eq!(simulate(dichromacy, &[0, 0, 0]), [0, 0, 0]);
        }

        let green = [0xa3, 0xd9, 0x77];
        assert_eq!(simulate(Dichromacy::Deuteranopia, &green), [0xb0, 0xd4, 0x78]);
        assert_eq!(simulate(Dichromacy::Protanopia, &green), [0xba, 0xd4, 0x78]);
        assert_eq!(simulate(Dichromacy::Tritanopia, &green), [0xa1, 0xdc, 0x00]);

        let red = [0xff, 0, 0];
        assert_eq!(simulate(Dichromacy::Deuteranopia, &red), [0xf3, 0x3f, 0x00]);
        assert_eq!(simulate(Dichromacy::Protanopia, &red), [0xde, 0x3f, 0x00]);
        assert_eq!(simulate(Dichromacy::Tritanopia, &red), [0xff, 0x00, 0x00]);
    }

    #[test]
    fn test_names() {
        assert_eq!(Dichromacy::Deuteranopia.to_string(), "deuteranopia");
        assert_eq!(Dichromacy::Protanopia.missing_cone(), 'L');
        assert_eq!(Dichromacy::ALL.len(), 3);
    }
}
