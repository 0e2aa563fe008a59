//! Access decisions for protected route subtrees.

use crate::session::{Role, Session};

/// Outcome of guarding a route subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still being restored; render a placeholder.
    Pending,
    /// No session token; send the user to the login page.
    RedirectLogin,
    /// Signed in with a role other than the required one.
    RedirectUnauthorized,
    /// Render the subtree.
    Allow,
}

/// Decides access to a subtree requiring `required`, or any signed-in user
/// when `required` is `None`.
///
/// Roles are compared by equality; an admin does not satisfy a subtree
/// that requires [`Role::User`].
#[must_use]
pub fn guard(loading: bool, session: &Session, required: Option<Role>) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    if session.access_token().is_none() {
        return GuardDecision::RedirectLogin;
    }
    match required {
        Some(role) if session.role() != Some(role) => GuardDecision::RedirectUnauthorized,
        _ => GuardDecision::Allow,
    }
}
