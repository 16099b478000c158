// Mathagent - step-by-step math solutions from a hosted model
// Library exports

pub mod classifier;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod solver;

pub use classifier::{ClassifierTables, Relevance, RelevanceClassifier};
pub use error::{ClassifierError, ConfigError, SolverError};
pub use pipeline::{process_problem, Outcome};
pub use solver::{ClarityVerdict, ProblemSolver, Solution};
