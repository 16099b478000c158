// Relevance classifier
//
// Heuristic gate deciding whether free text plausibly asks a math question.
// It is a pure predicate over fixed tables: no scores, no state between calls.

mod tables;

pub use tables::ClassifierTables;

use regex::Regex;

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;

/// Which check accepted the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relevance {
    /// A table keyword occurred as a substring
    Keyword(String),
    /// A symbolic pattern matched (e.g. `2+3`, `f(x)`)
    Symbolic,
    /// A question-phrasing pattern matched (e.g. "how many")
    Question,
    None,
}

impl Relevance {
    pub fn is_match(&self) -> bool {
        !matches!(self, Relevance::None)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Relevance::Keyword(_) => "keyword",
            Relevance::Symbolic => "symbolic",
            Relevance::Question => "question",
            Relevance::None => "none",
        }
    }
}

pub struct RelevanceClassifier {
    keywords: Vec<String>,
    symbolic: Vec<Regex>,
    question: Vec<Regex>,
}

impl RelevanceClassifier {
    /// Compile a classifier from tables
    pub fn new(tables: ClassifierTables) -> Result<Self, ClassifierError> {
        Ok(Self {
            keywords: tables
                .keywords
                .into_iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            symbolic: compile_all(&tables.symbolic_patterns)?,
            question: compile_all(&tables.question_patterns)?,
        })
    }

    /// Build from configuration: the tables file if one is set, else built-ins
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let tables = match &config.tables_path {
            Some(path) => {
                tracing::info!("Loading classifier tables from {}", path.display());
                ClassifierTables::load_from_file(path)?
            }
            None => ClassifierTables::default(),
        };
        Self::new(tables)
    }

    /// True when any keyword, symbolic pattern or question pattern matches
    pub fn is_math_related(&self, text: &str) -> bool {
        self.classify(text).is_match()
    }

    /// Same decision as `is_math_related`, reporting the first check that fired
    pub fn classify(&self, text: &str) -> Relevance {
        let lowered = text.to_lowercase();

        if let Some(keyword) = self.keywords.iter().find(|k| lowered.contains(k.as_str())) {
            return Relevance::Keyword(keyword.clone());
        }

        if self.symbolic.iter().any(|re| re.is_match(&lowered)) {
            return Relevance::Symbolic;
        }

        if self.question.iter().any(|re| re.is_match(&lowered)) {
            return Relevance::Question;
        }

        Relevance::None
    }
}

impl Default for RelevanceClassifier {
    fn default() -> Self {
        Self::new(ClassifierTables::default()).expect("built-in classifier tables compile")
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, ClassifierError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| ClassifierError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
