// Example problems and the per-session pending-selection slots

use dashmap::DashMap;

/// The fixed example palette shown next to the input field
pub const EXAMPLE_PROBLEMS: [&str; 6] = [
    "Solve for x: 3x - 7 = 14",
    "Find the area of a triangle with base 8 and height 6",
    "What is sin(30°)?",
    "Find the derivative of f(x) = x³ + 2x²",
    "Simplify: (x² - 4)/(x - 2)",
    "A train travels 120 miles in 2 hours. What is its speed?",
];

/// One pending example per browser session.
///
/// A slot is read once then cleared. A second selection in the same session
/// before the first is consumed replaces it; other sessions are unaffected.
#[derive(Debug, Default)]
pub struct PendingExamples {
    slots: DashMap<String, &'static str>,
}

impl PendingExamples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the example at `index` for `session`; `None` if the index is out of range
    pub fn select(&self, session: &str, index: usize) -> Option<&'static str> {
        let problem = EXAMPLE_PROBLEMS.get(index).copied()?;
        self.slots.insert(session.to_string(), problem);
        Some(problem)
    }

    /// Take the session's pending example, leaving its slot empty
    pub fn take(&self, session: &str) -> Option<String> {
        self.slots
            .remove(session)
            .map(|(_, problem)| problem.to_string())
    }

    /// Number of sessions with an unconsumed selection
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
