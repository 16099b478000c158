// Fixed instructions sent to the hosted model

/// Instruction prepended to every problem
pub const SOLVER_INSTRUCTION: &str = r#"You are a helpful math assistant that solves mathematical problems step by step.

Your responsibilities:
1. Solve problems in algebra, geometry, trigonometry, calculus, arithmetic and word problems
2. Explain every step in simple, student-friendly language
3. Write mathematics in LaTeX: wrap inline expressions in $ and display equations in $$
4. Show the working clearly so the reader can learn from it
5. Only answer mathematics questions
6. Ask for clarification when a problem is incomplete or unclear

Guidelines:
- Break complex problems into smaller steps
- Explain the reasoning behind each step
- If the problem is unclear or incomplete, ask specific questions to clarify
- If the question is not about mathematics, politely decline and ask for a math problem

Structure every answer in three sections:
1. Understanding the Problem
2. Step-by-Step Solution
3. Final Answer

Always use LaTeX for mathematical expressions (e.g., $x^2 + 3x = 0$ or $$\frac{a}{b} = \frac{c}{d}$$)"#;

/// Instruction for the optional clarity check
pub const VALIDATOR_INSTRUCTION: &str = "You are a math problem validator. Determine if a math problem is clear and complete enough to solve. If not, suggest what additional information is needed.";

/// Words in a clarity judgment that mean the problem needs more information
pub const CLARIFICATION_INDICATORS: &[&str] = &[
    "unclear",
    "incomplete",
    "need",
    "missing",
    "clarification",
    "specify",
];

pub fn build_solve_prompt(problem: &str) -> String {
    format!("{SOLVER_INSTRUCTION}\n\nPlease solve this math problem: {problem}")
}

pub fn build_clarity_prompt(problem: &str) -> String {
    format!(
        "{VALIDATOR_INSTRUCTION}\n\nIs this math problem clear and complete enough to solve? \
         If not, what clarification is needed?\n\nProblem: {problem}"
    )
}

/// True when the judgment contains any clarification indicator
pub fn needs_clarification(judgment: &str) -> bool {
    let lowered = judgment.to_lowercase();
    CLARIFICATION_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_prompt_contains_problem_verbatim() {
        let prompt = build_solve_prompt("Solve for x: 2x=10");
        assert!(prompt.starts_with(SOLVER_INSTRUCTION));
        assert!(prompt.ends_with("Please solve this math problem: Solve for x: 2x=10"));
    }

    #[test]
    fn test_solver_instruction_sections() {
        for section in [
            "Understanding the Problem",
            "Step-by-Step Solution",
            "Final Answer",
        ] {
            assert!(SOLVER_INSTRUCTION.contains(section));
        }
    }

    #[test]
    fn test_clarity_prompt() {
        let prompt = build_clarity_prompt("x + ? = 4");
        assert!(prompt.starts_with(VALIDATOR_INSTRUCTION));
        assert!(prompt.ends_with("Problem: x + ? = 4"));
    }

    #[test]
    fn test_needs_clarification() {
        assert!(needs_clarification("The problem is UNCLEAR about units."));
        assert!(needs_clarification("You need to give the height."));
        assert!(!needs_clarification("Yes, this problem is complete."));
    }
}
