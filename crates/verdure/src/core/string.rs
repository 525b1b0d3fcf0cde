use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format.
///
/// The string must have exactly six hexadecimal digits, which may be preceded
/// by a single `#`. Digits may be upper- or lowercase. If successful, this
/// function returns the three coordinates as unsigned bytes. This function
/// does not trim white space.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let result = parse_digits(s.strip_prefix('#').unwrap_or(s));
    if let Err(error) = result {
        tracing::debug!(input = s, %error, "rejecting hex color");
    }
    result
}

fn parse_digits(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if s.len() != 6 || !s.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        // Also rules out the sign accepted by from_str_radix.
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format a 24-bit color in hashed hexadecimal format with uppercase digits.
pub(crate) fn format_hex(rgb: &[u8; 3]) -> String {
    let [r, g, b] = *rgb;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// ====================================================================================================================
