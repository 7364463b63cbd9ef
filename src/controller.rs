//! Presentation layer: turns a user-creation use case into `{status, body}`.
//!
//! This is the only error boundary in the crate. Whatever goes wrong below
//! it, an `Err` or a panic, leaves as a generic 500 with no detail.

use crate::use_cases::{CreateUser, CreateUserRequest};
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::error;

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

pub const USER_CREATED_MESSAGE: &str = "Usuario creado exitosamente";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Missing fields deserialize as empty strings and are then rejected by
/// validation rather than by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<&CreateUserBody> for CreateUserRequest {
    fn from(body: &CreateUserBody) -> Self {
        CreateUserRequest::new(body.name.as_str(), body.email.as_str(), body.password.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub body: CreateUserBody,
}

impl HttpRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            body: CreateUserBody {
                name: name.into(),
                email: email.into(),
                password: password.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn created() -> Self {
        Self {
            status: STATUS_CREATED,
            body: ResponseBody {
                success: true,
                message: Some(USER_CREATED_MESSAGE.to_string()),
                errors: None,
            },
        }
    }

    pub fn bad_request(errors: Vec<String>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body: ResponseBody {
                success: false,
                message: None,
                errors: Some(errors),
            },
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: ResponseBody {
                success: false,
                message: Some(INTERNAL_ERROR_MESSAGE.to_string()),
                errors: None,
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

pub struct UserController<U> {
    create_user_use_case: U,
}

impl<U: CreateUser> UserController<U> {
    pub fn new(create_user_use_case: U) -> Self {
        Self {
            create_user_use_case,
        }
    }

    pub fn create_user(&self, req: &HttpRequest) -> HttpResponse {
        let request = CreateUserRequest::from(&req.body);

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.create_user_use_case.execute(&request)
        }));

        match outcome {
            Ok(Ok(result)) if !result.is_valid => HttpResponse::bad_request(result.errors),
            Ok(Ok(_)) => HttpResponse::created(),
            Ok(Err(err)) => {
                error!(error = %err, "create user failed");
                HttpResponse::internal_error()
            }
            Err(_) => {
                error!("create user panicked");
                HttpResponse::internal_error()
            }
        }
    }
}
