//! Composite permissions: single rules (leaves) and rule trees (composites)
//! are checked through the same `Permission` trait.
//!
//! Run with: cargo run --bin complete_13_composite_permissions

use colored::Colorize;
use design_patterns::{
    logging, AdminPermission, AppConfig, CheckPermissionRequest, CheckPermissionUseCase,
    CompositePermission, DeletePermission, EditPermission, LoggingConfig, OwnerPermission,
    Permission, PublishPermission, Resource, User, VerifiedUserPermission,
};

fn answer(label: &str, allowed: bool) {
    let verdict = if allowed { "true".green() } else { "false".red() };
    println!("{label} {verdict}");
}

fn header(title: &str) {
    println!("\n{}\n", format!("=== {title} ===").blue().bold());
}

fn main() {
    let logging_config = match AppConfig::from_env() {
        Ok(config) => config.logging,
        Err(err) => {
            eprintln!("{} {err}", "config error, using defaults:".red());
            LoggingConfig::default()
        }
    };
    logging::init(&logging_config);

    let admin = User::new("1", "admin");
    let user = User::new("2", "user");
    let moderator = User::new("3", "moderator").verified(true);

    header("Example 1: Single permission (leaf)");
    let admin_permission = AdminPermission;
    answer("Is admin?", admin_permission.check(&admin, None));
    answer("Is admin?", admin_permission.check(&user, None));

    header("Example 2: Composite permission - edit (OR)");
    let edit = EditPermission::new();
    let resource = Resource::owned_by("2").named("Mi Recurso");
    answer("Admin can edit:", edit.check(&admin, Some(&resource)));
    answer("Owner can edit:", edit.check(&user, Some(&resource)));
    answer(
        "Another user can edit:",
        edit.check(&User::new("3", "user"), Some(&resource)),
    );

    header("Example 3: Composite permission - delete (AND)");
    let delete = DeletePermission::new();
    let protected_resource = Resource::owned_by("1").named("Recurso Protegido").protected(true);
    let normal_resource = Resource::owned_by("1").named("Recurso Normal").protected(false);
    answer(
        "Admin can delete normal resource:",
        delete.check(&admin, Some(&normal_resource)),
    );
    answer(
        "Admin can delete protected resource:",
        delete.check(&admin, Some(&protected_resource)),
    );
    answer("User can delete:", delete.check(&user, Some(&normal_resource)));

    header("Example 4: Nested composite - publish");
    let publish = PublishPermission::new();
    answer("Admin can publish:", publish.check(&admin, None));
    answer("Verified moderator can publish:", publish.check(&moderator, None));
    answer(
        "Unverified moderator can publish:",
        publish.check(&User::new("4", "moderator").verified(false), None),
    );
    answer("Regular user can publish:", publish.check(&user, None));

    header("Example 5: Custom permission - admin OR (owner AND verified)");
    let owner_and_verified = CompositePermission::all()
        .with(OwnerPermission)
        .with(VerifiedUserPermission);
    let custom = CompositePermission::any()
        .with(AdminPermission)
        .with(owner_and_verified);

    let verified_owner = User::new("2", "user").verified(true);
    let unverified_owner = User::new("2", "user").verified(false);
    answer("Admin can access:", custom.check(&admin, Some(&resource)));
    answer(
        "Verified owner can access:",
        custom.check(&verified_owner, Some(&resource)),
    );
    answer(
        "Unverified owner can access:",
        custom.check(&unverified_owner, Some(&resource)),
    );

    header("Example 6: Through the use case");
    let use_case = CheckPermissionUseCase::new();
    let result = use_case.execute(&CheckPermissionRequest {
        user: admin.clone(),
        resource: Some(resource.clone()),
        permission: &edit,
    });
    answer("Use case result:", result);
}
