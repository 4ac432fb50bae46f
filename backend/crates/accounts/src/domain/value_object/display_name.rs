//! Display Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum display name length
const NAME_MAX_LENGTH: usize = 100;

/// Human-readable name shown on profiles and bookings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(DisplayName::new("Alice Host").is_ok());
        assert!(DisplayName::new("山田 太郎").is_ok());
    }

    #[test]
    fn test_name_trimmed() {
        let name = DisplayName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a".repeat(NAME_MAX_LENGTH + 1)).is_err());
        assert!(DisplayName::new("bad\u{0000}name").is_err());
    }
}
