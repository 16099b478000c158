// Keyword and pattern tables for the relevance classifier
//
// The built-in tables are the default; a JSON file with the same shape can
// replace them without touching call sites.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ClassifierError;

const KEYWORDS: &[&str] = &[
    // General math terms
    "solve", "calculate", "find", "compute", "evaluate", "simplify",
    "derive", "integrate", "differentiate", "factor", "expand",
    // Topics
    "algebra", "geometry", "trigonometry", "calculus", "arithmetic",
    "equation", "function", "formula", "expression", "polynomial",
    // Operations
    "add", "subtract", "multiply", "divide", "square", "cube", "power",
    "root", "logarithm", "exponential", "factorial",
    // Geometry
    "area", "perimeter", "volume", "circle", "triangle", "rectangle",
    "sphere", "cylinder", "angle", "radius", "diameter", "circumference",
    // Trigonometry
    "sin", "cos", "tan", "sine", "cosine", "tangent", "degrees", "radians",
    // Calculus
    "derivative", "integral", "limit", "convergence", "series",
    // Units
    "meters", "feet", "inches", "centimeters", "percent", "miles",
];

const SYMBOLIC_PATTERNS: &[&str] = &[
    r"\d+[\+\-\*/\^]\d+",       // 2+3, 4^2
    r"[xyz]\s*[\+\-\*/\^=]",    // x+, y =
    r"\b\d+x\b",                // 2x
    r"=\s*\d+",                 // = 13
    r"[fgh]\([xyz]\)",          // f(x)
    r"\b\d+\s*[°%]\b",          // 30°, 15%
    r"\b[a-z]\s*=\s*\d+",       // a = 4
    r"\([^\)]*[\+\-\*/]\)",     // (x - 2)
];

const QUESTION_PATTERNS: &[&str] = &[
    r"what is.*[\+\-\*/]",
    r"solve.*for.*[xyz]",
    r"find.*[xyz]",
    r"calculate.*",
    r"how.*many.*",
    r"what.*area.*",
    r"what.*volume.*",
    r"derivative.*of",
    r"integral.*of",
];

/// Data driving the relevance classifier.
///
/// Keywords are matched as lower-case substrings; patterns are regular
/// expressions applied to the lower-cased input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierTables {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub symbolic_patterns: Vec<String>,
    #[serde(default)]
    pub question_patterns: Vec<String>,
}

impl Default for ClassifierTables {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            keywords: owned(KEYWORDS),
            symbolic_patterns: owned(SYMBOLIC_PATTERNS),
            question_patterns: owned(QUESTION_PATTERNS),
        }
    }
}

impl ClassifierTables {
    /// Load tables from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ClassifierError> {
        let contents = fs::read_to_string(path).map_err(|e| ClassifierError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| ClassifierError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
