//! PersonName value object

use std::fmt;

use crate::error::{AgeGuardError, AgeGuardResult};

/// Non-empty display name of a person
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and wrap a name. Blank names are rejected; the text is kept as given.
    pub fn parse(name: impl Into<String>) -> AgeGuardResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AgeGuardError::InvalidName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_text_verbatim() {
        let name = PersonName::parse("John Doe").unwrap();
        assert_eq!(name.as_str(), "John Doe");
        assert_eq!(name.to_string(), "John Doe");
    }

    #[test]
    fn parse_rejects_empty_and_blank() {
        assert!(matches!(
            PersonName::parse(""),
            Err(AgeGuardError::InvalidName)
        ));
        assert!(matches!(
            PersonName::parse("   \t"),
            Err(AgeGuardError::InvalidName)
        ));
    }
}
