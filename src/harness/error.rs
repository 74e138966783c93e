use crate::utils::error_chain_fmt;
use std::fmt::Debug;

/// A check could not run to completion.
#[derive(thiserror::Error)]
pub enum HarnessError {
    #[error("{0}")]
    Collaborator(#[from] anyhow::Error),
    #[error("Stored user could not be parsed: {0}")]
    CorruptSession(#[from] serde_json::Error),
}

impl Debug for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Why the final test stopped early.
#[derive(thiserror::Error)]
pub enum FinalTestError {
    #[error("{0}")]
    StageFailed(String),
    #[error("Mock data import failed: {0}")]
    MockDataImport(#[source] anyhow::Error),
    #[error(transparent)]
    Harness(#[from] HarnessError),
}

impl Debug for FinalTestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
