use crate::{
    errors::ServiceError,
    model::{role::Role, user::UserModel},
};

/// The caller resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_role(&self, allowed: &[Role]) -> Result<(), ServiceError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(
                "Insufficient permissions".to_string(),
            ))
        }
    }

    /// Admins may act on anything; everyone else only on what they own.
    pub fn require_owner_or_admin(&self, owner_id: i32) -> Result<(), ServiceError> {
        if self.is_admin() || self.id == owner_id {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(
                "Not authorized to modify this resource".to_string(),
            ))
        }
    }
}

impl From<UserModel> for CurrentUser {
    fn from(value: UserModel) -> Self {
        CurrentUser {
            id: value.user_id,
            email: value.email,
            display_name: value.display_name,
            role: value.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: 7,
            email: "someone@example.com".into(),
            display_name: "Someone".into(),
            role,
        }
    }

    #[test]
    fn require_role_accepts_listed_roles_only() {
        let instructor = user(Role::Instructor);
        assert!(
            instructor
                .require_role(&[Role::Instructor, Role::Admin])
                .is_ok()
        );
        assert!(matches!(
            user(Role::Student).require_role(&[Role::Instructor, Role::Admin]),
            Err(ServiceError::Forbidden(_))
        ));
    }

    #[test]
    fn owner_or_admin_guard() {
        assert!(user(Role::Instructor).require_owner_or_admin(7).is_ok());
        assert!(user(Role::Instructor).require_owner_or_admin(8).is_err());
        assert!(user(Role::Admin).require_owner_or_admin(8).is_ok());
    }
}
