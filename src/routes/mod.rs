#![allow(hidden_glob_reexports)]
mod api;
mod health_check;
mod home;
mod reports;
mod session;

pub use api::*;
pub use health_check::*;
pub use home::*;
pub use reports::*;
pub use session::*;
