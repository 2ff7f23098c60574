use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::require_text;
use crate::error::{ReitError, Result};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// An investor profile.
///
/// The password is stored as supplied and never serialized back out; no
/// login flow reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    #[serde(default)]
    pub kyc_verified: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_new(id: i64, new: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: new.username,
            email: new.email,
            password: new.password,
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            nationality: new.nationality,
            kyc_verified: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)?;
        if !self.email.contains('@') {
            return Err(ReitError::InvalidArgument(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> User {
        let new = NewUser {
            username: "aziz".into(),
            email: "aziz@example.com".into(),
            password: "secret".into(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            ..Default::default()
        };
        User::from_new(1, new, Utc::now())
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(user(Some("Abdul"), Some("Aziz")).display_name(), "Abdul Aziz");
        assert_eq!(user(Some("Abdul"), None).display_name(), "Abdul");
        assert_eq!(user(None, None).display_name(), "aziz");
    }

    #[test]
    fn password_is_never_serialized() {
        let json = serde_json::to_value(user(None, None)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn email_must_contain_at_sign() {
        let mut new = NewUser {
            username: "aziz".into(),
            email: "aziz.example.com".into(),
            password: "secret".into(),
            ..Default::default()
        };
        assert!(new.validate().is_err());
        new.email = "aziz@example.com".into();
        assert!(new.validate().is_ok());
    }
}
