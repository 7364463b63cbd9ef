//! Use cases sitting between the controller and the composite evaluators.

use crate::config::ValidationConfig;
use crate::domain::{Permission, RegistrationData, Resource, User, ValidationResult, Validator};
use crate::error::UseCaseError;
use crate::validators::UserRegistrationValidator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =============================================================================
// Check permission
// =============================================================================

pub struct CheckPermissionRequest<'a> {
    pub user: User,
    pub resource: Option<Resource>,
    pub permission: &'a dyn Permission,
}

/// Keeps callers away from how the permission tree was built.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckPermissionUseCase;

impl CheckPermissionUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, request: &CheckPermissionRequest<'_>) -> bool {
        let allowed = request
            .permission
            .check(&request.user, request.resource.as_ref());
        debug!(user = %request.user.id, role = %request.user.role, allowed, "permission checked");
        allowed
    }
}

// =============================================================================
// Create user
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl From<&CreateUserRequest> for RegistrationData {
    fn from(request: &CreateUserRequest) -> Self {
        RegistrationData {
            name: Some(request.name.clone()),
            email: Some(request.email.clone()),
            password: Some(request.password.clone()),
        }
    }
}

/// What the controller needs from a user-creation use case.
///
/// Validation problems come back as an invalid `ValidationResult`; `Err`
/// is reserved for failures the caller cannot fix by changing its input.
pub trait CreateUser {
    fn execute(&self, request: &CreateUserRequest) -> Result<ValidationResult, UseCaseError>;
}

impl<U: CreateUser + ?Sized> CreateUser for &U {
    fn execute(&self, request: &CreateUserRequest) -> Result<ValidationResult, UseCaseError> {
        (**self).execute(request)
    }
}

pub struct CreateUserUseCase {
    validator: UserRegistrationValidator,
}

impl CreateUserUseCase {
    pub fn new() -> Self {
        Self {
            validator: UserRegistrationValidator::new(),
        }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            validator: UserRegistrationValidator::from_config(config),
        }
    }
}

impl Default for CreateUserUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateUser for CreateUserUseCase {
    fn execute(&self, request: &CreateUserRequest) -> Result<ValidationResult, UseCaseError> {
        let result = self.validator.validate(&RegistrationData::from(request));

        if !result.is_valid {
            debug!(errors = result.errors.len(), "registration rejected");
            return Ok(result);
        }

        // No storage behind this: creating the user means logging it.
        info!(name = %request.name, email = %request.email, "user is valid, creating");

        Ok(ValidationResult::valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::{DeletePermission, EditPermission};

    #[test]
    fn test_check_permission_passes_through() {
        let use_case = CheckPermissionUseCase::new();
        let edit = EditPermission::new();

        let request = CheckPermissionRequest {
            user: User::new("1", "admin"),
            resource: Some(Resource::owned_by("2")),
            permission: &edit,
        };
        assert!(use_case.execute(&request));

        let request = CheckPermissionRequest {
            user: User::new("3", "user"),
            resource: Some(Resource::owned_by("2")),
            permission: &edit,
        };
        assert!(!use_case.execute(&request));
    }

    #[test]
    fn test_check_permission_with_delete_veto() {
        let use_case = CheckPermissionUseCase::new();
        let delete = DeletePermission::new();

        let request = CheckPermissionRequest {
            user: User::new("1", "admin"),
            resource: Some(Resource::owned_by("1").protected(true)),
            permission: &delete,
        };
        assert!(!use_case.execute(&request));
    }

    #[test]
    fn test_create_user_valid() {
        let use_case = CreateUserUseCase::new();
        let request = CreateUserRequest::new("Juan Pérez", "juan@example.com", "password123");

        assert_eq!(use_case.execute(&request), Ok(ValidationResult::valid()));
    }

    #[test]
    fn test_create_user_returns_validation_result_unchanged() {
        let use_case = CreateUserUseCase::new();
        let request = CreateUserRequest::new("Jo", "email-invalido", "123");

        let expected = UserRegistrationValidator::new().validate(&RegistrationData::from(&request));
        let result = use_case.execute(&request).unwrap();

        assert_eq!(result, expected);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_create_user_empty_fields_are_required_errors() {
        let use_case = CreateUserUseCase::new();
        let result = use_case.execute(&CreateUserRequest::new("", "", "")).unwrap();

        assert_eq!(
            result.errors,
            vec!["Nombre es requerido", "Email es requerido", "Contraseña es requerida"]
        );
    }
}
