mod identity;
mod session_token;

pub use identity::{Identity, Role, Status, FAKE_ADMIN_EMAIL};
pub use session_token::SessionToken;
