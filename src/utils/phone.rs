//! Phone number extraction and validation
//!
//! Finds the first phone-number-looking token in free-form chat text and
//! decides whether it is a usable Japanese phone number. Full-width digits
//! are accepted and normalized to their half-width form.

use std::sync::OnceLock;

use regex::Regex;

/// Prefixes that identify mobile / IP phone numbers (11 digits).
const MOBILE_PREFIXES: [&str; 3] = ["070", "080", "090"];
const MOBILE_LENGTH: usize = 11;
const FIXED_LINE_LENGTH: usize = 10;

/// Offset between full-width digits (U+FF10..U+FF19) and ASCII digits.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

static CANDIDATE_RE: OnceLock<Regex> = OnceLock::new();

/// Starts at a (half- or full-width) zero followed by a digit or hyphen, then runs over any
/// letters so that "090123asa45" is judged as a whole. The zero must not sit inside a word,
/// so "100kg" has no candidate. Group 1 is the candidate.
fn candidate_regex() -> &'static Regex {
    CANDIDATE_RE.get_or_init(|| {
        Regex::new(
            r"(?:^|[^0-9A-Za-z０-９Ａ-Ｚａ-ｚ])([0０][0-9０-９\-][0-9A-Za-z０-９Ａ-Ｚａ-ｚ\-]*)",
        )
        .expect("valid regex")
    })
}

/// Verdict of [`evaluate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneValidation {
    /// No substring starting with a zero digit was found
    NoMatch,
    /// A candidate was found but contains characters other than digits and hyphens
    InvalidCharacters,
    /// Fewer digits than the number's prefix class requires
    TooShort(String),
    /// More digits than the number's prefix class requires
    TooLong(String),
    /// A usable phone number, digits only
    Valid(String),
}

impl PhoneValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneValidation::Valid(_))
    }

    /// Normalized digits of a valid number
    pub fn normalized(&self) -> Option<&str> {
        match self {
            PhoneValidation::Valid(digits) => Some(digits),
            _ => None,
        }
    }

    /// Whether the text should be handled as if no phone number were present
    pub fn is_no_match_like(&self) -> bool {
        matches!(
            self,
            PhoneValidation::NoMatch | PhoneValidation::TooShort(_) | PhoneValidation::TooLong(_)
        )
    }
}

/// Evaluate free-form text for a phone number
pub fn evaluate(text: &str) -> PhoneValidation {
    let candidate = match candidate_regex().captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => return PhoneValidation::NoMatch,
    };

    let normalized = to_half_width_digits(candidate);
    if !normalized.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return PhoneValidation::InvalidCharacters;
    }

    let digits: String = normalized.chars().filter(|c| *c != '-').collect();
    let expected = if MOBILE_PREFIXES.iter().any(|p| digits.starts_with(p)) {
        MOBILE_LENGTH
    } else {
        FIXED_LINE_LENGTH
    };

    match digits.len().cmp(&expected) {
        std::cmp::Ordering::Equal => PhoneValidation::Valid(digits),
        std::cmp::Ordering::Less => PhoneValidation::TooShort(digits),
        std::cmp::Ordering::Greater => PhoneValidation::TooLong(digits),
    }
}

/// Map full-width digits to ASCII digits, leaving everything else untouched
pub fn to_half_width_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}
