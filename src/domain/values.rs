//! Self-validating scalar value types.
//!
//! Each type is built from raw user text through `parse`, which trims the input
//! and either returns a valid instance or a [`ValidationError`] carrying the
//! type's constraint message. Instances are immutable and compare by value.

use crate::error::ValidationError;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

macro_rules! text_value {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

/// Athlete name. Stored as typed, matched case-insensitively where commands allow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !valid {
            return Err(ValidationError::new("name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Case-insensitive comparison used for lookups.
    pub fn matches(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

text_value!(Name);

/// Sport played by an athlete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sport(String);

impl Sport {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Sports should only contain letters, spaces and hyphens, and it should not be blank";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-');
        if !valid {
            return Err(ValidationError::new("sport", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn matches(&self, other: &Sport) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

text_value!(Sport);

/// Athlete age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 150;
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Age should be a whole number between 1 and 150";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let err = || ValidationError::new("age", Self::MESSAGE_CONSTRAINTS);
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let value: u32 = trimmed.parse().map_err(|_| err())?;
        if !(u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&value) {
            return Err(err());
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Age {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MIN_DIGITS: usize = 8;
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 8 digits long";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.len() < Self::MIN_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new("phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_value!(Phone);

/// Contact email in `local@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.- \
and may not start or end with a special character. The domain is made of labels separated by \
periods; each label starts and ends with an alphanumeric character and the last label is at \
least 2 characters long";

    const PATTERN: &'static str = r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])+$";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
        let trimmed = raw.trim();
        let matched = EMAIL_RE
            .get_or_init(|| Regex::new(Self::PATTERN).ok())
            .as_ref()
            .is_some_and(|re| re.is_match(trimmed));
        if !matched {
            return Err(ValidationError::new("email", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_value!(Email);

/// Organization name; lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrganizationName(String);

impl OrganizationName {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Organization names should start with an \
alphanumeric character and only contain alphanumeric characters, spaces and the symbols &.,'()-";

    const SYMBOLS: &'static str = "&.,'()-";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ' || Self::SYMBOLS.contains(c));
        if !valid {
            return Err(ValidationError::new(
                "organization",
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn matches(&self, other: &OrganizationName) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

text_value!(OrganizationName);

/// Contract value in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(u64);

impl Amount {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Amount should be a non-negative whole number without separators";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let err = || ValidationError::new("amount", Self::MESSAGE_CONSTRAINTS);
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        trimmed.parse::<u64>().map(Self).map_err(|_| err())
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An 8-digit `DDMMYYYY` date that names a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Date8 {
    raw: String,
    date: NaiveDate,
}

impl Date8 {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Dates should be 8 digits in the format DDMMYYYY and name a real calendar date";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_field(raw, "date")
    }

    /// Same as [`Date8::parse`] but reports the given field name on failure.
    pub fn parse_field(raw: &str, field: &'static str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let err = || ValidationError::new(field, Self::MESSAGE_CONSTRAINTS);
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let day: u32 = trimmed[0..2].parse().map_err(|_| err())?;
        let month: u32 = trimmed[2..4].parse().map_err(|_| err())?;
        let year: i32 = trimmed[4..8].parse().map_err(|_| err())?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)?;
        Ok(Self {
            raw: trimmed.to_string(),
            date,
        })
    }

    /// Calendar projection used for range comparisons.
    pub fn to_calendar_date(&self) -> NaiveDate {
        self.date
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Date8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Date8 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_alphanumeric_and_spaces() {
        assert_eq!(Name::parse("  Lionel Messi ").unwrap().as_str(), "Lionel Messi");
        assert!(Name::parse("Player 23").is_ok());
        assert!(Name::parse("").is_err());
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("O'Neil").is_err());
        assert!(Name::parse(" leading").is_ok());
    }

    #[test]
    fn name_matching_ignores_case_but_equality_does_not() {
        let a = Name::parse("Lionel Messi").unwrap();
        let b = Name::parse("lionel messi").unwrap();
        assert!(a.matches(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn sport_rules() {
        assert!(Sport::parse("Football").is_ok());
        assert!(Sport::parse("Ice Hockey").is_ok());
        assert!(Sport::parse("Beach-Volleyball").is_ok());
        assert!(Sport::parse("F1").is_err());
        assert!(Sport::parse("-Rugby").is_err());
        assert!(Sport::parse("").is_err());
    }

    #[test]
    fn age_range() {
        assert_eq!(Age::parse("36").unwrap().value(), 36);
        assert_eq!(Age::parse("150").unwrap().value(), 150);
        assert!(Age::parse("0").is_err());
        assert!(Age::parse("151").is_err());
        assert!(Age::parse("-3").is_err());
        assert!(Age::parse("+3").is_err());
        assert!(Age::parse("99999999999999999999").is_err());
        assert!(Age::parse("thirty").is_err());
    }

    #[test]
    fn phone_needs_eight_digits() {
        assert!(Phone::parse("91234567").is_ok());
        assert!(Phone::parse("1234567").is_err());
        assert!(Phone::parse("9123 4567").is_err());
        assert!(Phone::parse("+6591234567").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(Email::parse("messi@x.com").is_ok());
        assert!(Email::parse("ops@im.com").is_ok());
        assert!(Email::parse("first.last+tag@mail.example-site.org").is_ok());
        assert!(Email::parse("a@bc").is_ok());
        assert!(Email::parse("plain").is_err());
        assert!(Email::parse("@x.com").is_err());
        assert!(Email::parse(".a@x.com").is_err());
        assert!(Email::parse("a@x.c").is_err());
        assert!(Email::parse("a@-x.com").is_err());
    }

    #[test]
    fn organization_name_rules() {
        assert!(OrganizationName::parse("Inter Miami").is_ok());
        assert!(OrganizationName::parse("Procter & Gamble Co.").is_ok());
        assert!(OrganizationName::parse("&Co").is_err());
        assert!(OrganizationName::parse("Bad/Name").is_err());
        let a = OrganizationName::parse("Inter Miami").unwrap();
        let b = OrganizationName::parse("INTER MIAMI").unwrap();
        assert!(a.matches(&b));
    }

    #[test]
    fn amount_rules() {
        assert_eq!(Amount::parse("5000000").unwrap().value(), 5_000_000);
        assert_eq!(Amount::parse("0").unwrap().value(), 0);
        assert!(Amount::parse("-1").is_err());
        assert!(Amount::parse("1,000").is_err());
        assert!(Amount::parse("18446744073709551616").is_err());
    }

    #[test]
    fn date8_rejects_impossible_dates() {
        let date = Date8::parse("01012024").unwrap();
        assert_eq!(
            date.to_calendar_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(Date8::parse("29022024").is_ok());
        assert!(Date8::parse("29022023").is_err());
        assert!(Date8::parse("31022024").is_err());
        assert!(Date8::parse("00012024").is_err());
        assert!(Date8::parse("01132024").is_err());
        assert!(Date8::parse("1012024").is_err());
        assert!(Date8::parse("2024-01-01").is_err());
    }

    #[test]
    fn date8_reports_requested_field() {
        let err = Date8::parse_field("31022024", "end date").unwrap_err();
        assert_eq!(err.field, "end date");
        assert_eq!(err.message, Date8::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn date8_calendar_ordering() {
        let early = Date8::parse("31122023").unwrap();
        let late = Date8::parse("01012024").unwrap();
        assert!(early.to_calendar_date() < late.to_calendar_date());
    }
}
