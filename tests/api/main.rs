mod harness;
mod health_check;
mod helpers;
mod session;
