//! # Design Patterns in Rust
//!
//! This crate contains a runnable catalogue of classic design patterns and
//! one larger worked example: a composite permission and validation engine.
//!
//! ## Patterns Covered
//!
//! 1. **Creational**
//!    - Builder
//!    - Abstract Factory
//!    - Prototype
//!    - Immutability with copy (undo/redo history)
//!    - Singleton (explicit, process-scoped instance)
//!
//! 2. **Structural**
//!    - Bridge
//!    - Composite (file-system tree)
//!    - Decorator (notifications, character stats)
//!    - Facade
//!    - Flyweight
//!    - Proxy
//!    - Adapter (console logger vs `tracing`)
//!
//! 3. **Composite engine** (this library)
//!    - Leaf and composite permissions combined with AND/OR
//!    - Leaf and composite validators that report every error at once
//!    - Use cases and a controller that maps results to status codes
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin complete_01_builder
//! cargo run --bin complete_07_composite
//! cargo run --bin complete_13_composite_permissions
//! cargo run --bin complete_13_composite_validations
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Error types for use cases and configuration
//! - `serde` / `serde_json` / `toml` - Config files and response bodies
//! - `regex` - Email validation
//! - `tracing` / `tracing-subscriber` - Structured logging
//! - `colored` - Console output in the demos

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod logging;
pub mod permissions;
pub mod use_cases;
pub mod validators;

pub use config::{AppConfig, ConfigError, LoggingConfig, ValidationConfig};
pub use controller::{CreateUserBody, HttpRequest, HttpResponse, ResponseBody, UserController};
pub use domain::{Permission, RegistrationData, Resource, Role, User, ValidationResult, Validator};
pub use error::UseCaseError;
pub use permissions::{
    AdminPermission, CompositePermission, DeletePermission, EditPermission, Mode,
    ModeratorPermission, OwnerPermission, PublishPermission, VerifiedUserPermission,
};
pub use use_cases::{
    CheckPermissionRequest, CheckPermissionUseCase, CreateUser, CreateUserRequest,
    CreateUserUseCase,
};
pub use validators::{
    CompositeValidator, EmailValidator, NameValidator, PasswordValidator, PersonalDataValidator,
    UserRegistrationValidator,
};
