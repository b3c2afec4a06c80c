use std::str::FromStr;

/// Text that does not read as a decimal number.
#[derive(Debug, thiserror::Error)]
#[error("malformed decimal number: {0:?}")]
pub struct FormatError(pub String);

/// Parses a numeral written with the Finnish decimal comma, e.g. `"5,5"`.
///
/// Only the first comma is substituted, so `"1,2,3"` stays malformed. Plain
/// dot-separated and integral numerals are accepted as-is.
pub fn parse_decimal_comma(text: &str) -> Result<f64, FormatError> {
    let text = text.trim();
    f64::from_str(&text.replacen(',', ".", 1)).map_err(|_| FormatError(text.to_string()))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_comma() {
        assert_abs_diff_eq!(parse_decimal_comma("5,5").unwrap(), 5.5);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_abs_diff_eq!(parse_decimal_comma(" 2,0 ").unwrap(), 2.0);
    }

    #[test]
    fn test_parse_dot_passthrough() {
        assert_abs_diff_eq!(parse_decimal_comma("3.25").unwrap(), 3.25);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(parse_decimal_comma("").is_err());
        assert!(parse_decimal_comma("   ").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_decimal_comma("Yhteensä").is_err());
        assert!(parse_decimal_comma("1,2,3").is_err());
    }

    /// Digits survive a parse and render back with the comma separator.
    #[test]
    fn test_round_trip() {
        for text in ["0,5", "2,0", "12,25", "132,07"] {
            let value = parse_decimal_comma(text).unwrap();
            let mut rendered = value.to_string().replacen('.', ",", 1);
            if !rendered.contains(',') {
                rendered.push_str(",0");
            }
            assert_eq!(rendered, text);
        }
    }
}
