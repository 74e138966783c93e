mod session;
mod runs;

pub use session::*;
pub use runs::*;
