// JSON bodies for the web tool API

use serde::{Deserialize, Serialize};

use crate::pipeline::{BannerLevel, Outcome};
use crate::solver::ClarityVerdict;

/// Request body for /api/solve and /api/clarity
#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemRequest {
    #[serde(default)]
    pub problem: String,
}

/// Response body for /api/solve
#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    /// "solved", "empty_input", "not_math", "unsolved" or "failed"
    pub status: String,
    pub level: BannerLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Problem statement echoed back for the results panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    /// Formatted solution (markdown with `$`/`$$` math)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl From<Outcome> for SolveResponse {
    fn from(outcome: Outcome) -> Self {
        let status = outcome.status().to_string();
        let (level, message) = outcome.banner();
        let hint = outcome.hint().map(str::to_string);

        let (problem, solution) = match outcome {
            Outcome::Solved { problem, solution } => (Some(problem), Some(solution)),
            Outcome::Unsolved { problem } => (Some(problem), None),
            _ => (None, None),
        };

        Self {
            status,
            level,
            message,
            hint,
            problem,
            solution,
        }
    }
}

/// Response body for /api/clarity
#[derive(Debug, Serialize, Deserialize)]
pub struct ClarityResponse {
    pub is_clear: bool,
    pub note: String,
}

impl From<ClarityVerdict> for ClarityResponse {
    fn from(verdict: ClarityVerdict) -> Self {
        Self {
            is_clear: verdict.is_clear,
            note: verdict.note,
        }
    }
}

/// Response body for /api/examples
#[derive(Debug, Serialize, Deserialize)]
pub struct ExamplesResponse {
    pub examples: Vec<String>,
}

/// Response body for example selection and the pending slot
#[derive(Debug, Serialize, Deserialize)]
pub struct PendingResponse {
    pub problem: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_outcome_to_response() {
        let response = SolveResponse::from(Outcome::Solved {
            problem: "2+2".to_string(),
            solution: "$4$".to_string(),
        });
        assert_eq!(response.status, "solved");
        assert_eq!(response.level, BannerLevel::Success);
        assert_eq!(response.problem.as_deref(), Some("2+2"));
        assert_eq!(response.solution.as_deref(), Some("$4$"));
        assert!(response.hint.is_none());
    }

    #[test]
    fn test_not_math_omits_result_fields() {
        let json = serde_json::to_value(SolveResponse::from(Outcome::NotMath)).unwrap();
        assert_eq!(json["status"], "not_math");
        assert_eq!(json["level"], "warning");
        assert!(json.get("solution").is_none());
        assert!(json.get("problem").is_none());
    }

    #[test]
    fn test_missing_problem_field_defaults_to_empty() {
        let request: ProblemRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.problem, "");
    }
}
