// One request cycle: input -> relevance gate -> solver -> formatter
//
// Every submission is independent; nothing is cached between calls.

use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::classifier::RelevanceClassifier;
use crate::formatter::format_for_display;
use crate::solver::{ProblemSolver, Solution};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a math problem to solve.";
pub const NOT_MATH_MESSAGE: &str =
    "Please enter a mathematics-related question. I can only help with math problems!";
pub const SOLVED_MESSAGE: &str = "Problem solved!";
pub const UNSOLVED_MESSAGE: &str =
    "I couldn't solve this problem. Please check if the problem is complete and clearly stated.";
pub const REPHRASE_HINT: &str =
    "Try rephrasing your problem or check if all necessary information is provided.";

/// Severity of the banner shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; classification was skipped
    EmptyInput,
    /// Rejected by the relevance gate; the model was not called
    NotMath,
    /// `solution` is already formatted for display
    Solved { problem: String, solution: String },
    /// The model answered with no text
    Unsolved { problem: String },
    /// The model call failed
    Failed { message: String },
}

impl Outcome {
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::EmptyInput => "empty_input",
            Outcome::NotMath => "not_math",
            Outcome::Solved { .. } => "solved",
            Outcome::Unsolved { .. } => "unsolved",
            Outcome::Failed { .. } => "failed",
        }
    }

    /// Level and text of the banner for this outcome
    pub fn banner(&self) -> (BannerLevel, String) {
        match self {
            Outcome::EmptyInput => (BannerLevel::Warning, EMPTY_INPUT_MESSAGE.to_string()),
            Outcome::NotMath => (BannerLevel::Warning, NOT_MATH_MESSAGE.to_string()),
            Outcome::Solved { .. } => (BannerLevel::Success, SOLVED_MESSAGE.to_string()),
            Outcome::Unsolved { .. } => (BannerLevel::Error, UNSOLVED_MESSAGE.to_string()),
            Outcome::Failed { message } => {
                (BannerLevel::Error, format!("An error occurred: {message}"))
            }
        }
    }

    /// Follow-up suggestion shown under the banner
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Outcome::Failed { .. } => Some(REPHRASE_HINT),
            _ => None,
        }
    }
}

/// Run one submission through the gate, the solver and the formatter
pub async fn process_problem(
    solver: &ProblemSolver,
    classifier: &RelevanceClassifier,
    input: &str,
) -> Outcome {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("solve", %request_id);

    async move {
        let problem = input.trim();
        if problem.is_empty() {
            tracing::info!("Rejected: empty input");
            return Outcome::EmptyInput;
        }

        let relevance = classifier.classify(problem);
        if !relevance.is_match() {
            tracing::info!("Rejected: not math-related");
            return Outcome::NotMath;
        }
        tracing::info!(check = relevance.as_str(), "Accepted by relevance gate");

        match solver.solve(problem).await {
            Ok(Solution::Solved(text)) => Outcome::Solved {
                problem: problem.to_string(),
                solution: format_for_display(&text),
            },
            Ok(Solution::Empty) => Outcome::Unsolved {
                problem: problem.to_string(),
            },
            Err(e) => {
                tracing::error!("{}", e);
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await
}
