use crate::{
    domain::{Identity, SessionToken},
    storage::{Storage, TOKEN_KEY, USER_KEY},
};
use serde::Serialize;

/// The identity and token of a simulated admin login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminLogin {
    pub user: Identity,
    pub token: SessionToken,
}

/// Create the fake admin and persist it as the current session, replacing whatever was stored.
pub fn create_fake_admin(storage: &dyn Storage) -> AdminLogin {
    let user = Identity::fake_admin();
    let token = SessionToken::fake_admin();

    storage.set_item(TOKEN_KEY, token.as_ref());
    storage.set_item(USER_KEY, &user.to_json());

    AdminLogin { user, token }
}
