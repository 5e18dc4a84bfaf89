//! Staff account entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::StaffError;

/// Authorization role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Admin,
    #[default]
    Staff,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "ADMIN",
            StaffRole::Staff => "STAFF",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, StaffRole::Admin)
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = StaffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(StaffRole::Admin),
            "STAFF" => Ok(StaffRole::Staff),
            other => Err(StaffError::UnknownRole(other.to_string())),
        }
    }
}

/// A staff account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: Uuid,
    pub username: String,
    /// Clear text, compared byte-for-byte at login
    #[serde(skip_serializing)]
    pub password: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

impl Staff {
    /// Login comparison. Clear-text equality, as the source system does it.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// A staff account before it is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStaff {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: StaffRole,
}

impl NewStaff {
    pub fn validate(&self) -> Result<(), StaffError> {
        if self.username.trim().is_empty() {
            return Err(StaffError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(StaffError::MissingPassword);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(password: &str, role: StaffRole) -> Staff {
        Staff {
            id: Uuid::new_v4(),
            username: "reception".to_string(),
            password: password.to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn password_comparison_is_exact() {
        let account = staff("admin123", StaffRole::Staff);
        assert!(account.verify_password("admin123"));
        assert!(!account.verify_password("Admin123"));
        assert!(!account.verify_password(""));
    }

    #[test]
    fn password_never_serializes() {
        let account = staff("secret", StaffRole::Admin);
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn new_staff_requires_both_fields() {
        let missing = NewStaff {
            username: " ".to_string(),
            password: "pw".to_string(),
            role: StaffRole::Staff,
        };
        assert!(matches!(missing.validate(), Err(StaffError::MissingUsername)));

        let missing = NewStaff {
            username: "desk".to_string(),
            password: String::new(),
            role: StaffRole::Staff,
        };
        assert!(matches!(missing.validate(), Err(StaffError::MissingPassword)));
    }

    #[test]
    fn default_role_is_staff() {
        assert_eq!(StaffRole::default(), StaffRole::Staff);
        assert!(StaffRole::Admin.is_admin());
        assert!(!StaffRole::Staff.is_admin());
    }
}
