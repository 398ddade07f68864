use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Severity,
    pub code: &'static str,
    pub message: String,
    pub step_id: Option<String>,
}

impl Diagnostic {
    pub(super) fn error(code: &'static str, message: String, step_id: Option<&str>) -> Self {
        Self {
            level: Severity::Error,
            code,
            message,
            step_id: step_id.map(str::to_string),
        }
    }

    pub(super) fn warning(code: &'static str, message: String, step_id: Option<&str>) -> Self {
        Self {
            level: Severity::Warning,
            code,
            message,
            step_id: step_id.map(str::to_string),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.step_id {
            Some(step) => write!(f, "{}[{}] step '{}': {}", level, self.code, step, self.message),
            None => write!(f, "{}[{}]: {}", level, self.code, self.message),
        }
    }
}

/// Aggregated result of linting one flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    /// A flow is valid when it has no error-level findings.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.iter().all(|d| d.level != Severity::Error)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Severity::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Severity::Warning)
            .collect()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_step() {
        let d = Diagnostic::error("E003", "points nowhere".to_string(), Some("s1"));
        assert_eq!(d.to_string(), "error[E003] step 's1': points nowhere");
        let w = Diagnostic::warning("W005", "flow has no steps".to_string(), None);
        assert_eq!(w.to_string(), "warning[W005]: flow has no steps");
    }

    #[test]
    fn warnings_alone_keep_report_valid() {
        let report = LintReport {
            diagnostics: vec![Diagnostic::warning("W001", "x".to_string(), None)],
        };
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert_eq!(report.warnings().len(), 1);
    }
}
