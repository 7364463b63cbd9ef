//! Domain types and the two capability traits of the composite engine.
//!
//! `User`, `Resource` and `RegistrationData` are explicit records: optional
//! fields are `Option`, so a missing value is something the evaluators can
//! look at instead of a shape they have to assume.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Users and resources
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Moderator,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
            Role::Other(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "moderator" => Role::Moderator,
            "user" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl User {
    pub fn new(id: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            verified: None,
        }
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn is_verified(&self) -> bool {
        self.verified == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource {
    pub fn owned_by(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            protected: None,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn protected(mut self, protected: bool) -> Self {
        self.protected = Some(protected);
        self
    }

    pub fn is_protected(&self) -> bool {
        self.protected == Some(true)
    }
}

// =============================================================================
// Permissions
// =============================================================================

/// A yes/no access decision for a user, optionally against a resource.
///
/// Leaf rules and composites implement the same trait, so a tree of
/// permissions is checked exactly like a single rule.
pub trait Permission {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool;
}

impl<P: Permission + ?Sized> Permission for Box<P> {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        (**self).check(user, resource)
    }
}

impl<P: Permission + ?Sized> Permission for &P {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        (**self).check(user, resource)
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Registration payload as it arrives from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RegistrationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
        }
    }

    /// Builds a result whose validity is derived from the error list.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub trait Validator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        (**self).validate(data)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        (**self).validate(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("moderator"), Role::Moderator);
        assert_eq!(Role::from("user"), Role::User);
        assert_eq!(Role::from("guest"), Role::Other("guest".into()));
        assert_eq!(Role::from("Admin"), Role::Other("Admin".into()));
    }

    #[test]
    fn test_role_display_roundtrips_name() {
        assert_eq!(Role::Other("editor".into()).to_string(), "editor");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_deserializes_free_form_role() {
        let user: User = serde_json::from_str(r#"{"id":"3","role":"moderator","verified":true}"#)
            .unwrap();
        assert_eq!(user.role, Role::Moderator);
        assert!(user.is_verified());

        let user: User = serde_json::from_str(r#"{"id":"4","role":"user"}"#).unwrap();
        assert_eq!(user.verified, None);
        assert!(!user.is_verified());
    }

    #[test]
    fn test_resource_protection_defaults_to_false() {
        let resource = Resource::owned_by("1");
        assert!(!resource.is_protected());
        assert!(resource.clone().protected(true).is_protected());
        assert!(!resource.protected(false).is_protected());
    }

    #[test]
    fn test_validation_result_from_errors() {
        assert_eq!(ValidationResult::from_errors(vec![]), ValidationResult::valid());

        let result = ValidationResult::from_errors(vec!["a".into(), "b".into()]);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["a", "b"]);
    }

    #[test]
    fn test_registration_data_missing_fields_deserialize_as_none() {
        let data: RegistrationData = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(data, RegistrationData::new().name("Ana"));
    }
}
