use serde::Serialize;

/// The token handed out by the fake admin login.
const FAKE_ADMIN_TOKEN: &str = "test-admin-token-123";

/// Opaque session credential paired with an [`Identity`](super::Identity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// The fixed token of the fake admin session.
    pub fn fake_admin() -> Self {
        Self(FAKE_ADMIN_TOKEN.to_owned())
    }

    /// Any non-empty stored value is a token; its contents are opaque.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.is_empty() {
            Err(format!("{s:?} is not a valid session token."))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
