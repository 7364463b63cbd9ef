use design_patterns::{
    AppConfig, CreateUser, CreateUserRequest, CreateUserUseCase, HttpRequest, HttpResponse,
    UseCaseError, UserController, ValidationResult,
};
use std::cell::Cell;

/// Counts calls so the test can see the controller delegated exactly once.
struct Counting {
    inner: CreateUserUseCase,
    calls: Cell<usize>,
}

impl CreateUser for Counting {
    fn execute(&self, request: &CreateUserRequest) -> Result<ValidationResult, UseCaseError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.execute(request)
    }
}

struct Unavailable;

impl CreateUser for Unavailable {
    fn execute(&self, _request: &CreateUserRequest) -> Result<ValidationResult, UseCaseError> {
        Err(UseCaseError::Internal("user store offline".into()))
    }
}

#[test]
fn registration_flow_end_to_end() {
    let controller = UserController::new(CreateUserUseCase::new());

    let created = controller.create_user(&HttpRequest::new(
        "Juan Pérez",
        "juan@example.com",
        "password123",
    ));
    assert_eq!(created.status, 201);
    assert!(created.body.success);

    let rejected = controller.create_user(&HttpRequest::new("Jo", "email-invalido", "123"));
    assert_eq!(rejected.status, 400);
    assert_eq!(rejected.body.errors.map(|e| e.len()), Some(3));
}

#[test]
fn controller_delegates_once_per_request() {
    let counting = Counting {
        inner: CreateUserUseCase::new(),
        calls: Cell::new(0),
    };
    let controller = UserController::new(&counting);

    let created = controller.create_user(&HttpRequest::new("Ana", "ana@example.com", "longenough"));
    let rejected = controller.create_user(&HttpRequest::default());

    assert_eq!(created.status, 201);
    assert_eq!(rejected.status, 400);
    assert_eq!(counting.calls.get(), 2);
}

#[test]
fn unexpected_failure_is_a_generic_500() {
    let controller = UserController::new(Unavailable);
    let response = controller.create_user(&HttpRequest::new("Ana", "ana@example.com", "password123"));

    assert_eq!(response, HttpResponse::internal_error());
    assert!(!response.to_json().contains("offline"));
}

#[test]
fn configured_thresholds_flow_through_the_use_case() {
    let config = AppConfig::from_toml_str(
        "[validation]\nmin_name_length = 2\nmin_password_length = 12\n",
    )
    .unwrap();
    let controller = UserController::new(CreateUserUseCase::from_config(&config.validation));

    let response = controller.create_user(&HttpRequest::new("Jo", "jo@example.com", "password123"));
    assert_eq!(response.status, 400);
    assert_eq!(
        response.body.errors,
        Some(vec!["Contraseña debe tener al menos 12 caracteres".to_string()])
    );
}

#[test]
fn request_body_from_json() {
    let request: HttpRequest = serde_json::from_str(
        r#"{"body": {"name": "Juan", "email": "juan@example.com", "password": "password123"}}"#,
    )
    .unwrap();

    let controller = UserController::new(CreateUserUseCase::new());
    assert_eq!(controller.create_user(&request).status, 201);
}
