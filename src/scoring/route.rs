use serde::Serialize;
use std::fmt;

/// Scores at or above this go straight to processing
pub const PROCESS_THRESHOLD: f64 = 0.8;
/// Scores at or above this (but below PROCESS_THRESHOLD) need a reviewer
pub const REVIEW_THRESHOLD: f64 = 0.6;

/// Downstream handling decided from a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Process,
    ProcessWithReview,
    Reject,
}

/// How sure the router is about its decision. Paired one-to-one with `Route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Route {
    /// Every route, best first
    pub const ALL: [Route; 3] = [Route::Process, Route::ProcessWithReview, Route::Reject];

    /// Map a score to a route. Thresholds are checked highest first.
    pub fn from_score(score: f64) -> Self {
        if score >= PROCESS_THRESHOLD {
            Route::Process
        } else if score >= REVIEW_THRESHOLD {
            Route::ProcessWithReview
        } else {
            Route::Reject
        }
    }

    pub fn confidence(self) -> Confidence {
        match self {
            Route::Process => Confidence::High,
            Route::ProcessWithReview => Confidence::Medium,
            Route::Reject => Confidence::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Process => "process",
            Route::ProcessWithReview => "process_with_review",
            Route::Reject => "reject",
        }
    }
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
