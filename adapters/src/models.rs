//! Generic data models for the `adapters` crate.
//!
//! These models define the directory-level representation of a dashboard user,
//! shared by every adapter so the backend sees one consistent format regardless of
//! where the roster was loaded from.

use serde::{Deserialize, Serialize};

/// A user as stored in a directory.
///
/// `role` is kept as the raw string found in the source. Interpreting it is the
/// backend's job; a value it does not recognise simply grants nothing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            avatar: None,
            email: None,
            title: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_missing() {
        let record: UserRecord =
            serde_json::from_str(r#"{"id":"u-7","name":"Ada","role":"designer"}"#).unwrap();
        assert_eq!(record, UserRecord::new("u-7", "Ada", "designer"));
    }

    #[test]
    fn optional_fields_are_omitted_when_empty() {
        let json = serde_json::to_string(&UserRecord::new("u-7", "Ada", "designer")).unwrap();
        assert!(!json.contains("avatar"));
        assert!(!json.contains("email"));
    }
}
