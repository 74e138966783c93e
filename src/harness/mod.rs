//! Assertion log and the two runners built on it.
mod basic;
mod error;
mod log;

pub use basic::BasicTestSuite;
pub use error::{FinalTestError, HarnessError};
pub use final_test::{AuthSnapshot, FinalResult, FinalSummary, FinalTestRunner};
pub use log::{AssertionLog, LogEntry, LogKind, SuiteResult};
