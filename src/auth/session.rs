use super::{create_fake_admin, AdminLogin};
use crate::{
    domain::{Identity, Role, SessionToken},
    storage::{Storage, TOKEN_KEY, USER_KEY},
};

#[tracing::instrument(name = "Simulate admin login", skip(storage))]
pub fn simulate_login(storage: &dyn Storage) -> AdminLogin {
    let login = create_fake_admin(storage);
    tracing::info!(email = %login.user.email, "Admin login simulated");
    login
}

/// Whether the persisted session belongs to an admin.
///
/// A missing token or user, or a user record that does not parse, denies access.
#[tracing::instrument(name = "Check admin access", skip(storage))]
pub fn check_admin_access(storage: &dyn Storage) -> bool {
    let token = storage
        .get_item(TOKEN_KEY)
        .and_then(|t| SessionToken::parse(t).ok());
    let user = storage.get_item(USER_KEY).filter(|u| !u.is_empty());

    let (Some(_), Some(user)) = (token, user) else {
        return false;
    };

    match Identity::parse_role(&user) {
        Ok(role) => role == Role::Admin,
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, "Stored user could not be parsed");
            false
        }
    }
}

#[tracing::instrument(name = "Clear session", skip(storage))]
pub fn clear_session(storage: &dyn Storage) {
    storage.remove_item(TOKEN_KEY);
    storage.remove_item(USER_KEY);
}
