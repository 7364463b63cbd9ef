//! Leaf permissions, the AND/OR composite, and the named compositions built
//! from them (edit, delete, publish).

use crate::domain::{Permission, Resource, Role, User};
use tracing::debug;

// =============================================================================
// Leaves
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct AdminPermission;

impl Permission for AdminPermission {
    fn check(&self, user: &User, _resource: Option<&Resource>) -> bool {
        user.role == Role::Admin
    }
}

/// Grants access when the user owns the resource. Without a resource there
/// is nothing to own, so the check fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct OwnerPermission;

impl Permission for OwnerPermission {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        resource.is_some_and(|r| r.owner_id == user.id)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModeratorPermission;

impl Permission for ModeratorPermission {
    fn check(&self, user: &User, _resource: Option<&Resource>) -> bool {
        user.role == Role::Moderator
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VerifiedUserPermission;

impl Permission for VerifiedUserPermission {
    fn check(&self, user: &User, _resource: Option<&Resource>) -> bool {
        user.is_verified()
    }
}

// =============================================================================
// Composite
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    And,
    Or,
}

/// A permission made of other permissions.
///
/// An empty composite denies access in both modes.
#[derive(Default)]
pub struct CompositePermission {
    mode: Mode,
    children: Vec<Box<dyn Permission>>,
}

impl CompositePermission {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            children: Vec::new(),
        }
    }

    pub fn all() -> Self {
        Self::new(Mode::And)
    }

    pub fn any() -> Self {
        Self::new(Mode::Or)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn add(&mut self, permission: impl Permission + 'static) {
        self.children.push(Box::new(permission));
    }

    pub fn add_all<I>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = Box<dyn Permission>>,
    {
        self.children.extend(permissions);
    }

    pub fn with(mut self, permission: impl Permission + 'static) -> Self {
        self.add(permission);
        self
    }
}

impl Permission for CompositePermission {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        if self.children.is_empty() {
            debug!(mode = ?self.mode, "empty composite permission denies access");
            return false;
        }

        match self.mode {
            Mode::And => self.children.iter().all(|p| p.check(user, resource)),
            Mode::Or => self.children.iter().any(|p| p.check(user, resource)),
        }
    }
}

// =============================================================================
// Named compositions
// =============================================================================

/// Admin OR owner.
pub struct EditPermission(CompositePermission);

impl EditPermission {
    pub fn new() -> Self {
        let mut inner = CompositePermission::any();
        inner.add_all([
            Box::new(AdminPermission) as Box<dyn Permission>,
            Box::new(OwnerPermission),
        ]);
        Self(inner)
    }
}

impl Default for EditPermission {
    fn default() -> Self {
        Self::new()
    }
}

impl Permission for EditPermission {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        self.0.check(user, resource)
    }
}

/// Admin, and the resource must not be protected.
pub struct DeletePermission(CompositePermission);

impl DeletePermission {
    pub fn new() -> Self {
        Self(CompositePermission::all().with(AdminPermission))
    }
}

impl Default for DeletePermission {
    fn default() -> Self {
        Self::new()
    }
}

impl Permission for DeletePermission {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        let allowed = self.0.check(user, resource);

        if resource.is_some_and(Resource::is_protected) {
            debug!(user = %user.id, "protected resource cannot be deleted");
            return false;
        }

        allowed
    }
}

/// Admin OR (moderator AND verified).
pub struct PublishPermission(CompositePermission);

impl PublishPermission {
    pub fn new() -> Self {
        let moderator_and_verified = CompositePermission::all()
            .with(ModeratorPermission)
            .with(VerifiedUserPermission);

        Self(
            CompositePermission::any()
                .with(AdminPermission)
                .with(moderator_and_verified),
        )
    }
}

impl Default for PublishPermission {
    fn default() -> Self {
        Self::new()
    }
}

impl Permission for PublishPermission {
    fn check(&self, user: &User, resource: Option<&Resource>) -> bool {
        self.0.check(user, resource)
    }
}
