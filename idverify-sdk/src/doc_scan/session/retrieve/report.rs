use serde_json::Value;

use crate::parse::{array, object, opt_str};

/// A single named value inside a breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsResponse {
    name: Option<String>,
    value: Option<Value>,
}

impl DetailsResponse {
    /// Detail name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Detail value as the API sent it: a string, number, boolean or object
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl From<&Value> for DetailsResponse {
    fn from(value: &Value) -> Self {
        Self {
            name: opt_str(value, "name"),
            value: value.get("value").filter(|inner| !inner.is_null()).cloned(),
        }
    }
}

/// Outcome of one sub-check of a check report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownResponse {
    sub_check: Option<String>,
    result: Option<String>,
    details: Vec<DetailsResponse>,
}

impl BreakdownResponse {
    /// Sub-check name, as sent by the API
    #[must_use]
    pub fn sub_check(&self) -> Option<&str> {
        self.sub_check.as_deref()
    }

    /// Sub-check result, as sent by the API
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Details in the order the API listed them
    #[must_use]
    pub fn details(&self) -> &[DetailsResponse] {
        &self.details
    }
}

impl From<&Value> for BreakdownResponse {
    fn from(value: &Value) -> Self {
        Self {
            sub_check: opt_str(value, "sub_check"),
            result: opt_str(value, "result"),
            details: array(value, "details")
                .iter()
                .map(DetailsResponse::from)
                .collect(),
        }
    }
}

/// Overall verdict of a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResponse {
    value: Option<String>,
    reason: Option<String>,
    recovery_suggestion: Option<String>,
}

impl RecommendationResponse {
    /// Verdict, e.g. `APPROVE`
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Reason for a rejection
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// What the user could do to pass next time
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<&str> {
        self.recovery_suggestion.as_deref()
    }
}

impl From<&Value> for RecommendationResponse {
    fn from(value: &Value) -> Self {
        Self {
            value: opt_str(value, "value"),
            reason: opt_str(value, "reason"),
            recovery_suggestion: opt_str(value, "recovery_suggestion"),
        }
    }
}

/// Report attached to a completed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    recommendation: Option<RecommendationResponse>,
    breakdown: Vec<BreakdownResponse>,
}

impl ReportResponse {
    /// Overall verdict
    #[must_use]
    pub const fn recommendation(&self) -> Option<&RecommendationResponse> {
        self.recommendation.as_ref()
    }

    /// Per sub-check outcomes
    #[must_use]
    pub fn breakdown(&self) -> &[BreakdownResponse] {
        &self.breakdown
    }
}

impl From<&Value> for ReportResponse {
    fn from(value: &Value) -> Self {
        Self {
            recommendation: object(value, "recommendation").map(RecommendationResponse::from),
            breakdown: array(value, "breakdown")
                .iter()
                .map(BreakdownResponse::from)
                .collect(),
        }
    }
}
