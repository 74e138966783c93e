mod fake_admin;
mod session;

pub use fake_admin::{create_fake_admin, AdminLogin};
pub use session::{check_admin_access, clear_session, simulate_login};
