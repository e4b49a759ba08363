use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::consts::{MAX_COORDINATE, MAX_OFFSET, MAX_SCALE, MAX_ZOOM, MIN_SCALE, MIN_ZOOM};
use crate::error::{CurveViewError, Result};
use crate::point::DataPoint;

/// How strictly raw numeric inputs are sanitized.
///
/// The policy is chosen per call site: render and pointer handling use
/// `Minimal`, typed user entry uses `Comprehensive` or `Strict`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// Correct silently, never record or raise.
    #[default]
    Minimal,
    /// Correct and record an issue for every correction.
    Comprehensive,
    /// Like `Comprehensive`, but `resolve` fails on any critical issue.
    Strict,
}

impl ValidationPolicy {
    pub fn records_issues(self) -> bool {
        !matches!(self, Self::Minimal)
    }

    pub fn raises_on_critical(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimal => write!(f, "Minimal"),
            Self::Comprehensive => write!(f, "Comprehensive"),
            Self::Strict => write!(f, "Strict"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A single correction made while sanitizing a field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    /// The offending input, before correction.
    pub value: f64,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} = {}: {} ({})",
            self.severity, self.field, self.value, self.message, self.suggestion
        )
    }
}

/// A sanitized value together with every issue found while producing it.
#[derive(Clone, Debug)]
pub struct ValidationResult<T> {
    pub value: T,
    pub issues: Vec<ValidationIssue>,
    pub policy: ValidationPolicy,
}

impl<T> ValidationResult<T> {
    /// True when no critical issue was recorded.
    pub fn is_valid(&self) -> bool {
        self.issues.iter().all(|i| i.severity < Severity::Critical)
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }

    pub fn critical_issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
    }

    /// Fail with the first critical issue, regardless of policy.
    pub fn raise_if_invalid(self) -> Result<T> {
        let first = self.critical_issues().next().cloned();
        match first {
            Some(issue) => Err(CurveViewError::InvalidInput(issue)),
            None => Ok(self.value),
        }
    }

    /// Fail on critical issues only when the policy asks for it.
    pub fn resolve(self) -> Result<T> {
        if self.policy.raises_on_critical() {
            self.raise_if_invalid()
        } else {
            Ok(self.value)
        }
    }

    /// Take the corrected value and drop the issues.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Sanitizes fields one at a time under a fixed policy, collecting issues.
#[derive(Debug)]
pub struct Validator {
    policy: ValidationPolicy,
    issues: Vec<ValidationIssue>,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            issues: Vec::new(),
        }
    }

    /// Sanitize a multiplicative scale into `[MIN_SCALE, MAX_SCALE]`.
    pub fn scale(&mut self, field: &str, value: f64) -> f64 {
        if !value.is_finite() {
            self.record(
                field,
                value,
                Severity::Critical,
                "scale is not a finite number",
                "reset the view or enter a positive zoom value",
            );
            return MIN_SCALE;
        }
        if value <= 0.0 {
            self.record(
                field,
                value,
                Severity::Critical,
                "scale must be positive",
                "enter a zoom value greater than zero",
            );
            return MIN_SCALE;
        }
        if value < MIN_SCALE {
            self.record(
                field,
                value,
                Severity::Warning,
                "scale is below the minimum and was raised",
                "zoom in or fit the view to the window",
            );
            return MIN_SCALE;
        }
        if value > MAX_SCALE {
            self.record(
                field,
                value,
                Severity::Warning,
                "scale is above the maximum and was lowered",
                "zoom out or fit the view to the window",
            );
            return MAX_SCALE;
        }
        value
    }

    /// Sanitize a pixel dimension to at least one.
    pub fn dimension(&mut self, field: &str, value: i64) -> u32 {
        if value <= 0 {
            self.record(
                field,
                value as f64,
                Severity::Critical,
                "dimension must be at least 1",
                "check that an image or widget size has been set",
            );
            return 1;
        }
        match u32::try_from(value) {
            Ok(v) => v,
            Err(_) => {
                self.record(
                    field,
                    value as f64,
                    Severity::Warning,
                    "dimension exceeds the supported range and was clamped",
                    "use a smaller image or canvas",
                );
                u32::MAX
            }
        }
    }

    /// Sanitize a pan or manual offset into `[-MAX_OFFSET, MAX_OFFSET]`.
    pub fn offset(&mut self, field: &str, value: f64) -> f64 {
        self.bounded(field, value, MAX_OFFSET, "offset", "reset the view to recenter")
    }

    /// Sanitize a data-space coordinate into `[-MAX_COORDINATE, MAX_COORDINATE]`.
    pub fn coordinate(&mut self, field: &str, value: f64) -> f64 {
        self.bounded(
            field,
            value,
            MAX_COORDINATE,
            "coordinate",
            "enter a coordinate within the tracked area",
        )
    }

    /// Record an advisory that does not change the value.
    pub fn advise(&mut self, field: &str, value: f64, message: &str, suggestion: &str) {
        self.record(field, value, Severity::Info, message, suggestion);
    }

    pub fn finish<T>(self, value: T) -> ValidationResult<T> {
        ValidationResult {
            value,
            issues: self.issues,
            policy: self.policy,
        }
    }

    fn bounded(&mut self, field: &str, value: f64, limit: f64, kind: &str, hint: &str) -> f64 {
        if !value.is_finite() {
            self.record(
                field,
                value,
                Severity::Critical,
                &format!("{kind} is not a finite number"),
                hint,
            );
            return 0.0;
        }
        if value.abs() > limit {
            self.record(
                field,
                value,
                Severity::Warning,
                &format!("{kind} exceeds +/-{limit:e} and was clamped"),
                hint,
            );
            return value.clamp(-limit, limit);
        }
        value
    }

    fn record(&mut self, field: &str, value: f64, severity: Severity, message: &str, suggestion: &str) {
        if !self.policy.records_issues() {
            trace!(field, value, "corrected");
            return;
        }
        warn!(field, value, %severity, "{message}");
        self.issues.push(ValidationIssue {
            field: field.to_string(),
            value,
            severity,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        });
    }
}

/// Convert a typed zoom percentage (e.g. `150` for 150%) into a zoom factor.
///
/// Besides the usual scale checks, the result is held to the interactive
/// zoom range.
pub fn validate_zoom_percent(percent: f64, policy: ValidationPolicy) -> ValidationResult<f64> {
    let mut validator = Validator::new(policy);
    let zoom = validator.scale("zoom_percent", percent / 100.0);
    let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    if clamped != zoom {
        validator.record(
            "zoom_percent",
            percent,
            Severity::Warning,
            "zoom percentage is outside the supported range and was clamped",
            &format!(
                "enter a value between {}% and {}%",
                MIN_ZOOM * 100.0,
                MAX_ZOOM * 100.0
            ),
        );
    }
    validator.finish(clamped)
}

/// Sanitize a typed data-space position.
pub fn validate_point(x: f64, y: f64, policy: ValidationPolicy) -> ValidationResult<DataPoint> {
    let mut validator = Validator::new(policy);
    let x = validator.coordinate("x", x);
    let y = validator.coordinate("y", y);
    validator.finish(DataPoint::new(x, y))
}
