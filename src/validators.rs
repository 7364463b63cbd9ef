//! Field validators and the composite that runs all of them.
//!
//! Unlike permissions, a composite validator never stops early: callers get
//! every problem in one pass so a form can show them all together.

use crate::config::ValidationConfig;
use crate::domain::{RegistrationData, ValidationResult, Validator};
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

pub const EMAIL_REQUIRED: &str = "Email es requerido";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const PASSWORD_REQUIRED: &str = "Contraseña es requerida";
pub const NAME_REQUIRED: &str = "Nombre es requerido";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// Leaves
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        let Some(email) = present(data.email.as_deref()) else {
            return ValidationResult::invalid(EMAIL_REQUIRED);
        };
        if !EMAIL_REGEX.is_match(email) {
            return ValidationResult::invalid(EMAIL_INVALID);
        }
        ValidationResult::valid()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    pub fn new() -> Self {
        Self::with_min_length(Self::DEFAULT_MIN_LENGTH)
    }

    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PasswordValidator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        let Some(password) = present(data.password.as_deref()) else {
            return ValidationResult::invalid(PASSWORD_REQUIRED);
        };
        if password.chars().count() < self.min_length {
            return ValidationResult::invalid(format!(
                "Contraseña debe tener al menos {} caracteres",
                self.min_length
            ));
        }
        ValidationResult::valid()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameValidator {
    min_length: usize,
}

impl NameValidator {
    pub const DEFAULT_MIN_LENGTH: usize = 3;

    pub fn new() -> Self {
        Self::with_min_length(Self::DEFAULT_MIN_LENGTH)
    }

    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for NameValidator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        let name = data.name.as_deref().unwrap_or_default();
        if name.trim().is_empty() {
            return ValidationResult::invalid(NAME_REQUIRED);
        }
        // The untrimmed length is measured, matching what the user typed.
        if name.chars().count() < self.min_length {
            return ValidationResult::invalid(format!(
                "Nombre debe tener al menos {} caracteres",
                self.min_length
            ));
        }
        ValidationResult::valid()
    }
}

// =============================================================================
// Composite
// =============================================================================

#[derive(Default)]
pub struct CompositeValidator {
    children: Vec<Box<dyn Validator>>,
}

impl CompositeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn add(&mut self, validator: impl Validator + 'static) {
        self.children.push(Box::new(validator));
    }

    pub fn add_all<I>(&mut self, validators: I)
    where
        I: IntoIterator<Item = Box<dyn Validator>>,
    {
        self.children.extend(validators);
    }

    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.add(validator);
        self
    }
}

impl Validator for CompositeValidator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        let mut is_valid = true;
        let mut errors = Vec::new();

        for result in self.children.iter().map(|v| v.validate(data)) {
            if !result.is_valid {
                is_valid = false;
                errors.extend(result.errors);
            }
        }

        ValidationResult { is_valid, errors }
    }
}

// =============================================================================
// Named compositions
// =============================================================================

/// Name and email.
pub struct PersonalDataValidator(CompositeValidator);

impl PersonalDataValidator {
    pub fn new() -> Self {
        Self::from_config(&ValidationConfig::default())
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self(
            CompositeValidator::new()
                .with(NameValidator::with_min_length(config.min_name_length))
                .with(EmailValidator),
        )
    }
}

impl Default for PersonalDataValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PersonalDataValidator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        self.0.validate(data)
    }
}

/// Personal data (itself a composite) followed by the password.
pub struct UserRegistrationValidator(CompositeValidator);

impl UserRegistrationValidator {
    pub fn new() -> Self {
        Self::from_config(&ValidationConfig::default())
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self(
            CompositeValidator::new()
                .with(PersonalDataValidator::from_config(config))
                .with(PasswordValidator::with_min_length(config.min_password_length)),
        )
    }
}

impl Default for UserRegistrationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UserRegistrationValidator {
    fn validate(&self, data: &RegistrationData) -> ValidationResult {
        self.0.validate(data)
    }
}
