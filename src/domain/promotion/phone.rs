//! Contact phone number captured before the prize draw.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// A WhatsApp contact number.
///
/// Accepts digits plus the usual separators (`+ - ( ) .` and spaces) and
/// requires 10 to 15 digits. The original formatting is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn try_new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.')))
        {
            return Err(ValidationError::invalid_format(
                "phone",
                format!("unexpected character '{}'", bad),
            ));
        }

        let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(ValidationError::out_of_range(
                "phone_digits",
                MIN_DIGITS as i64,
                MAX_DIGITS as i64,
                digits as i64,
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits only, as used in `wa.me` links.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}
