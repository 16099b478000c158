// Problem solver gateway
//
// Builds the prompt, calls the generation provider and hands back the raw
// text. Constructed once at startup and passed to whoever handles requests.

pub mod prompts;

use std::sync::Arc;

use crate::config::constants::{
    CLARITY_MAX_TOKENS, CLARITY_TEMPERATURE, SOLVE_MAX_TOKENS, SOLVE_TEMPERATURE,
};
use crate::error::SolverError;
use crate::providers::{LlmProvider, ProviderRequest};

/// Text shown when the model produced nothing
pub const EMPTY_SOLUTION_PLACEHOLDER: &str = "Unable to generate solution";

/// Result of a successful round trip to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Solved(String),
    /// The service answered but returned no text
    Empty,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }

    /// Solution text, or the placeholder for an empty answer
    pub fn text(&self) -> &str {
        match self {
            Solution::Solved(text) => text,
            Solution::Empty => EMPTY_SOLUTION_PLACEHOLDER,
        }
    }
}

/// Outcome of the optional clarity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarityVerdict {
    pub is_clear: bool,
    /// The model's judgment, empty when the check could not run
    pub note: String,
}

impl ClarityVerdict {
    fn permissive() -> Self {
        Self {
            is_clear: true,
            note: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct ProblemSolver {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl ProblemSolver {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_string();
        Self { provider, model }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Ask the model for a step-by-step solution.
    ///
    /// Any transport or service failure becomes one `SolverError`; nothing is
    /// retried.
    pub async fn solve(&self, problem: &str) -> Result<Solution, SolverError> {
        let request = ProviderRequest::from_prompt(prompts::build_solve_prompt(problem))
            .with_model(&self.model)
            .with_temperature(SOLVE_TEMPERATURE)
            .with_max_tokens(SOLVE_MAX_TOKENS);

        let response = self
            .provider
            .send_message(&request)
            .await
            .map_err(SolverError::generation)?;

        if response.non_empty_text().is_none() {
            tracing::warn!(
                finish_reason = ?response.finish_reason,
                "Provider returned no solution text"
            );
            return Ok(Solution::Empty);
        }

        let text = response.text.unwrap_or_default();
        tracing::debug!(
            chars = text.len(),
            finish_reason = ?response.finish_reason,
            "Solution received"
        );
        Ok(Solution::Solved(text))
    }

    /// Ask the model whether the problem is complete enough to solve.
    ///
    /// Never fails: if the check itself breaks, the problem counts as clear.
    pub async fn validate_clarity(&self, problem: &str) -> ClarityVerdict {
        let request = ProviderRequest::from_prompt(prompts::build_clarity_prompt(problem))
            .with_model(&self.model)
            .with_temperature(CLARITY_TEMPERATURE)
            .with_max_tokens(CLARITY_MAX_TOKENS);

        match self.provider.send_message(&request).await {
            Ok(response) => {
                let note = response.text.unwrap_or_default();
                ClarityVerdict {
                    is_clear: !prompts::needs_clarification(&note),
                    note,
                }
            }
            Err(e) => {
                tracing::warn!("Clarity check failed, continuing: {:#}", e);
                ClarityVerdict::permissive()
            }
        }
    }
}
