pub mod app;
pub mod auth;
pub mod collaborators;
pub mod config;
pub mod domain;
pub mod harness;
pub mod routes;
pub mod session_state;
pub mod storage;
pub mod telemetry;
pub mod utils;
