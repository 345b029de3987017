//! Route guard decision.

use crate::models::{CurrentUser, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Decide what a guarded page should do once the session is resolved.
///
/// `user` is `None` when there was no token or `/me` failed.
pub fn authorize(user: Option<&CurrentUser>, required: Option<Role>) -> GuardOutcome {
    match (user, required) {
        (None, _) => GuardOutcome::RedirectToLogin,
        (Some(_), None) => GuardOutcome::Allow,
        (Some(u), Some(role)) if u.role == role => GuardOutcome::Allow,
        (Some(_), Some(_)) => GuardOutcome::RedirectToUnauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "a@wgg.com".into(),
            role,
        }
    }

    #[test]
    fn no_session_goes_to_login() {
        assert_eq!(authorize(None, Some(Role::Student)), GuardOutcome::RedirectToLogin);
        assert_eq!(authorize(None, None), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn role_mismatch_goes_to_unauthorized() {
        let admin = user(Role::Admin);
        assert_eq!(
            authorize(Some(&admin), Some(Role::Student)),
            GuardOutcome::RedirectToUnauthorized
        );
        let student = user(Role::Student);
        assert_eq!(
            authorize(Some(&student), Some(Role::Admin)),
            GuardOutcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn matching_or_unrestricted_role_is_allowed() {
        let student = user(Role::Student);
        assert_eq!(authorize(Some(&student), Some(Role::Student)), GuardOutcome::Allow);
        assert_eq!(authorize(Some(&student), None), GuardOutcome::Allow);
    }
}
