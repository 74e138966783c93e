use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Test,
    Pass,
    Fail,
    Error,
    Start,
    End,
    Success,
    Summary,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Test => "test",
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
            Self::Start => "start",
            Self::End => "end",
            Self::Success => "success",
            Self::Summary => "summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

/// Outcome of a basic test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteResult {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    pub results: Vec<LogEntry>,
    pub success: bool,
}

/// Ordered, timestamped record of a run, with pass and fail counts.
///
/// Every entry is mirrored as a `tracing` event.
#[derive(Debug, Default)]
pub struct AssertionLog {
    entries: Vec<LogEntry>,
    passed: usize,
    failed: usize,
}

impl AssertionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.passed = 0;
        self.failed = 0;
    }

    pub fn log(&mut self, message: impl Into<String>, kind: LogKind) {
        let message = message.into();
        match kind {
            LogKind::Fail => tracing::warn!(kind = ?kind, "{message}"),
            LogKind::Error => tracing::error!(kind = ?kind, "{message}"),
            _ => tracing::info!(kind = ?kind, "{message}"),
        }
        self.entries.push(LogEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message,
            kind,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(message, LogKind::Info);
    }

    /// Record an assertion and hand its outcome back.
    pub fn check(&mut self, condition: bool, message: &str) -> bool {
        if condition {
            self.passed += 1;
            self.log(format!("✅ {message}"), LogKind::Pass);
        } else {
            self.failed += 1;
            self.log(format!("❌ {message}"), LogKind::Fail);
        }
        condition
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn summary(&self) -> SuiteResult {
        SuiteResult {
            passed: self.passed,
            failed: self.failed,
            total: self.total(),
            results: self.entries.clone(),
            success: self.failed == 0,
        }
    }
}
