//! Address value objects.
//!
//! - Literals are stored verbatim, never normalized
//! - Validity is computed once at construction time
//! - Printing goes through `fmt::Display`

use std::fmt;
use std::net::Ipv4Addr;

/// Number of period-delimited segments in a dotted-quad
const SEGMENT_COUNT: usize = 4;

/// Largest value a single segment may hold
const SEGMENT_MAX: u32 = 255;

/// Parses a dotted-quad into its four octets.
///
/// Empty segments produced by leading, trailing or doubled periods are kept
/// and rejected. Leading zeros are accepted ("007" is 7).
fn parse_octets(s: &str) -> Option<[u8; 4]> {
    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() != SEGMENT_COUNT {
        return None;
    }

    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(segments) {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Overflow fails the parse rather than wrapping
        let value: u32 = segment.parse().ok()?;
        if value > SEGMENT_MAX {
            return None;
        }
        *octet = value as u8;
    }

    Some(octets)
}

/// Returns true if `s` is a syntactically valid IPv4 dotted-quad literal
pub fn validate(s: &str) -> bool {
    parse_octets(s).is_some()
}

/// Address exactly as the user typed it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressLiteral(String);

impl AddressLiteral {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Annotation printed after a validated literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    NotCorrect,
}

impl Verdict {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid {
            Self::Correct
        } else {
            Self::NotCorrect
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct"),
            Verdict::NotCorrect => write!(f, "Not Correct"),
        }
    }
}

/// Literal paired with its validation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddressLiteral {
    literal: AddressLiteral,
    is_valid: bool,
}

impl ValidatedAddressLiteral {
    /// Validates the literal once; the result never changes afterwards
    pub fn new(literal: AddressLiteral) -> Self {
        let is_valid = validate(literal.as_str());
        Self { literal, is_valid }
    }

    pub fn literal(&self) -> &AddressLiteral {
        &self.literal
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_validity(self.is_valid)
    }

    /// Parsed address, if the literal is valid
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        if !self.is_valid {
            return None;
        }
        parse_octets(self.literal.as_str()).map(Ipv4Addr::from)
    }
}

impl fmt::Display for ValidatedAddressLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.literal, self.verdict())
    }
}

/// One printable line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressEntry {
    /// Echoed without validation
    Raw(AddressLiteral),
    /// Echoed with a Correct / Not Correct suffix
    Validated(ValidatedAddressLiteral),
}

impl AddressEntry {
    pub fn raw(value: String) -> Self {
        Self::Raw(AddressLiteral::new(value))
    }

    pub fn validated(value: String) -> Self {
        Self::Validated(ValidatedAddressLiteral::new(AddressLiteral::new(value)))
    }

    pub fn literal(&self) -> &AddressLiteral {
        match self {
            Self::Raw(literal) => literal,
            Self::Validated(validated) => validated.literal(),
        }
    }

    /// Validity, or None for entries that were never checked
    pub fn validity(&self) -> Option<bool> {
        match self {
            Self::Raw(_) => None,
            Self::Validated(validated) => Some(validated.is_valid()),
        }
    }
}

impl fmt::Display for AddressEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressEntry::Raw(literal) => write!(f, "{}", literal),
            AddressEntry::Validated(validated) => write!(f, "{}", validated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_canonical_address() {
        assert!(validate("192.168.0.1"));
        assert!(validate("0.0.0.0"));
        assert!(validate("255.255.255.255"));
    }

    #[test]
    fn test_validate_wrong_segment_count() {
        assert!(!validate("1.2.3"));
        assert!(!validate("1.2.3.4.5"));
        assert!(!validate(""));
        assert!(!validate("1234"));
    }

    #[test]
    fn test_validate_empty_segments() {
        assert!(!validate("1..1.1"));
        assert!(!validate("1.2.3."));
        assert!(!validate(".1.2.3"));
        assert!(!validate("..."));
    }

    #[test]
    fn test_validate_non_digit_characters() {
        assert!(!validate("192.168.1.a"));
        assert!(!validate("1.-1.1.1"));
        assert!(!validate("+1.2.3.4"));
        assert!(!validate(" 1.2.3.4"));
        assert!(!validate("1.2.3.4 "));
        assert!(!validate("0x1.2.3.4"));
        assert!(!validate("1.2.3.٤"));
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(!validate("256.1.1.1"));
        assert!(!validate("1.1.1.300"));
        assert!(!validate("99999999999.1.1.1"));
    }

    #[test]
    fn test_validate_leading_zeros_accepted() {
        assert!(validate("01.02.03.04"));
        assert!(validate("007.0.0.0"));
        assert!(validate("0000000255.1.1.1"));
    }

    #[test]
    fn test_address_literal_verbatim() {
        let literal = AddressLiteral::new(" not an ip ".to_string());
        assert_eq!(literal.as_str(), " not an ip ");
        assert_eq!(format!("{}", literal), " not an ip ");
    }

    #[test]
    fn test_validated_display() {
        let valid = ValidatedAddressLiteral::new(AddressLiteral::new("192.168.0.1".to_string()));
        assert_eq!(format!("{}", valid), "192.168.0.1 Correct");

        let invalid = ValidatedAddressLiteral::new(AddressLiteral::new("300.1.1.1".to_string()));
        assert_eq!(format!("{}", invalid), "300.1.1.1 Not Correct");
    }

    #[test]
    fn test_validated_is_idempotent() {
        for input in ["10.0.0.1", "1..2.3", "256.0.0.0", "01.02.03.04"] {
            let first = ValidatedAddressLiteral::new(AddressLiteral::new(input.to_string()));
            let second = ValidatedAddressLiteral::new(AddressLiteral::new(input.to_string()));
            assert_eq!(first.is_valid(), second.is_valid());
            assert_eq!(first.clone(), second);
        }
    }

    #[test]
    fn test_to_ipv4() {
        let valid = ValidatedAddressLiteral::new(AddressLiteral::new("010.0.0.1".to_string()));
        assert_eq!(valid.to_ipv4(), Some(Ipv4Addr::new(10, 0, 0, 1)));

        let invalid = ValidatedAddressLiteral::new(AddressLiteral::new("10.0.0".to_string()));
        assert_eq!(invalid.to_ipv4(), None);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(format!("{}", Verdict::Correct), "Correct");
        assert_eq!(format!("{}", Verdict::NotCorrect), "Not Correct");
        assert_eq!(Verdict::from_validity(false), Verdict::NotCorrect);
    }

    #[test]
    fn test_address_entry_variants() {
        let raw = AddressEntry::raw("300.1.1.1".to_string());
        assert_eq!(format!("{}", raw), "300.1.1.1");
        assert_eq!(raw.validity(), None);

        let checked = AddressEntry::validated("8.8.8.8".to_string());
        assert_eq!(format!("{}", checked), "8.8.8.8 Correct");
        assert_eq!(checked.validity(), Some(true));
        assert_eq!(checked.literal().as_str(), "8.8.8.8");
    }
}
