//! Composite validations: field validators grouped into composites, driven
//! through a use case and a controller that answers with status codes.
//!
//! Run with: cargo run --bin complete_13_composite_validations

use colored::Colorize;
use design_patterns::{
    logging, AppConfig, CreateUserUseCase, EmailValidator, HttpRequest, HttpResponse,
    PersonalDataValidator, RegistrationData, UserController, UserRegistrationValidator,
    ValidationResult, Validator,
};

fn header(title: &str) {
    println!("\n{}\n", format!("=== {title} ===").blue().bold());
}

fn print_response(response: &HttpResponse) {
    let status = match response.status {
        201 => response.status.to_string().green(),
        400 => response.status.to_string().yellow(),
        _ => response.status.to_string().red(),
    };
    println!("Status: {status}");
    println!("{}", response.to_json());
}

fn print_result(result: &ValidationResult) {
    if result.is_valid {
        println!("{}", "valid".green());
        return;
    }
    println!("{}", "invalid".red());
    for error in &result.errors {
        println!("  - {error}");
    }
}

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "config error, using defaults:".red());
            AppConfig::default()
        }
    };
    logging::init(&config.logging);

    let controller = UserController::new(CreateUserUseCase::from_config(&config.validation));

    header("Example 1: Successful registration");
    let response = controller.create_user(&HttpRequest::new(
        "Juan Pérez",
        "juan@example.com",
        "password123",
    ));
    print_response(&response);

    header("Example 2: Registration with errors");
    // Short name, malformed email, short password: all three are reported.
    let response = controller.create_user(&HttpRequest::new("Jo", "email-invalido", "123"));
    print_response(&response);

    header("Example 3: Using validators directly");
    println!("Single email validation:");
    print_result(&EmailValidator.validate(&RegistrationData::new().email("test@example.com")));
    print_result(&EmailValidator.validate(&RegistrationData::new().email("email-invalido")));

    println!("\nComposite personal data validation:");
    let personal = PersonalDataValidator::from_config(&config.validation);
    print_result(&personal.validate(
        &RegistrationData::new().name("Juan").email("juan@example.com"),
    ));
    print_result(&personal.validate(&RegistrationData::new().name("Jo").email("email-invalido")));

    println!("\nFull registration validation:");
    let registration = UserRegistrationValidator::from_config(&config.validation);
    print_result(&registration.validate(
        &RegistrationData::new()
            .name("Juan Pérez")
            .email("juan@example.com")
            .password("password123"),
    ));
}
