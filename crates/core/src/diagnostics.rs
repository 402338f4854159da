//! Typed results for the diagnostics endpoint.
//!
//! Each check reports exactly one [`CheckOutcome`]; the report is the list
//! of checks plus an overall flag.

use serde::Serialize;

/// Result of a single diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed { detail: String },
    Failed { error: String },
}

impl CheckOutcome {
    pub fn passed(detail: impl Into<String>) -> Self {
        Self::Passed {
            detail: detail.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for CheckOutcome {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(detail) => Self::passed(detail),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// A named check and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticCheck {
    pub name: &'static str,
    pub outcome: CheckOutcome,
}

/// All checks run for one request.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub checks: Vec<DiagnosticCheck>,
    pub all_passed: bool,
}

impl DiagnosticReport {
    pub fn new(checks: Vec<DiagnosticCheck>) -> Self {
        let all_passed = checks.iter().all(|c| c.outcome.is_passed());
        Self { checks, all_passed }
    }
}
