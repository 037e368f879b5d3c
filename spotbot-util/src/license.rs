//! Dutch license plates ("kentekens").
//!
//! Plates are stored and looked up in their normalized form, e.g. `AB12CD`,
//! and only dashed for display, e.g. `AB-12-CD`. The dash positions depend on
//! the plate's sidecode.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a valid license plate")]
pub struct InvalidLicense(pub String);

static SIDECODES: Lazy<[Regex; 14]> = Lazy::new(|| {
    [
        r"^([A-Z]{2})([0-9]{2})([0-9]{2})$",
        r"^([0-9]{2})([0-9]{2})([A-Z]{2})$",
        r"^([0-9]{2})([A-Z]{2})([0-9]{2})$",
        r"^([A-Z]{2})([0-9]{2})([A-Z]{2})$",
        r"^([A-Z]{2})([A-Z]{2})([0-9]{2})$",
        r"^([0-9]{2})([A-Z]{2})([A-Z]{2})$",
        r"^([0-9]{2})([A-Z]{3})([0-9])$",
        r"^([0-9])([A-Z]{3})([0-9]{2})$",
        r"^([A-Z]{2})([0-9]{3})([A-Z])$",
        r"^([A-Z])([0-9]{3})([A-Z]{2})$",
        r"^([A-Z]{3})([0-9]{2})([A-Z])$",
        r"^([A-Z])([0-9]{2})([A-Z]{3})$",
        r"^([0-9])([A-Z]{2})([0-9]{3})$",
        r"^([0-9]{3})([A-Z]{2})([0-9])$",
    ]
    .map(|pattern| Regex::new(pattern).unwrap())
});

/// Uppercase the input and strip dashes and whitespace.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether the normalized plate matches any sidecode.
pub fn is_valid(license: &str) -> bool {
    SIDECODES.iter().any(|regex| regex.is_match(license))
}

/// Normalize and validate user input in one go.
pub fn parse(input: &str) -> Result<String, InvalidLicense> {
    let license = normalize(input);

    if is_valid(&license) {
        Ok(license)
    } else {
        Err(InvalidLicense(input.to_owned()))
    }
}

/// Insert dashes according to the plate's sidecode.
///
/// Plates that don't match any sidecode are returned as-is.
pub fn format(license: &str) -> Cow<'_, str> {
    let captures = SIDECODES
        .iter()
        .find_map(|regex| regex.captures(license));

    match captures {
        Some(captures) => {
            let formatted = format!("{}-{}-{}", &captures[1], &captures[2], &captures[3]);

            Cow::Owned(formatted)
        }
        None => Cow::Borrowed(license),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_input() {
        assert_eq!(normalize("ab-12 cd"), "AB12CD");
        assert_eq!(normalize(" 1-xxx-23 "), "1XXX23");
    }

    #[test]
    fn accepts_every_sidecode() {
        let plates = [
            "AB1234", "1234AB", "12AB34", "AB12CD", "ABCD12", "12ABCD", "12ABC3", "1ABC23",
            "AB123C", "A123BC", "ABC12D", "A12BCD", "1AB234", "123AB4",
        ];

        for plate in plates {
            assert!(is_valid(plate), "{plate} should be valid");
        }
    }

    #[test]
    fn rejects_garbage() {
        for plate in ["", "ABCDEF", "123456", "AB-12-CD", "AB12CDE", "ab12cd"] {
            assert!(!is_valid(plate), "{plate} should be invalid");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits
        for plate in ["AB\u{0661}\u{0662}CD", "\u{FF11}\u{FF12}ABCD"] {
            assert!(!is_valid(plate), "{plate} should be invalid");
            assert!(parse(plate).is_err());
        }
    }

    #[test]
    fn parse_reports_original_input() {
        assert_eq!(parse("g-123-bb"), Ok("G123BB".to_owned()));
        assert_eq!(parse("nope"), Err(InvalidLicense("nope".to_owned())));
    }

    #[test]
    fn formats_with_sidecode_dashes() {
        assert_eq!(format("AB12CD"), "AB-12-CD");
        assert_eq!(format("12ABC3"), "12-ABC-3");
        assert_eq!(format("1ABC23"), "1-ABC-23");
        assert_eq!(format("G123BB"), "G-123-BB");
        assert_eq!(format("123AB4"), "123-AB-4");
    }

    #[test]
    fn unknown_shape_is_left_alone() {
        assert_eq!(format("CD1234X"), "CD1234X");
    }
}
