// Relevance classifier behaviour over the built-in and custom tables

use mathagent::classifier::{ClassifierTables, Relevance, RelevanceClassifier};
use mathagent::config::ClassifierConfig;
use std::io::Write;

#[test]
fn test_every_keyword_is_accepted_in_any_case() {
    let classifier = RelevanceClassifier::default();
    for keyword in ClassifierTables::default().keywords {
        let sentence = format!("could you {} this for me", keyword.to_uppercase());
        assert!(classifier.is_math_related(&sentence), "keyword: {keyword}");
    }
}

#[test]
fn test_symbolic_inputs() {
    let classifier = RelevanceClassifier::default();
    for input in ["2+3", "7*8", "2^10", "x + 1", "y=", "3x", "= 42", "f(x)", "a = 4", "(x -)"] {
        assert!(classifier.is_math_related(input), "input: {input}");
    }
}

#[test]
fn test_question_phrasings() {
    let classifier = RelevanceClassifier::default();
    for input in [
        "How many marbles does Tom have now",
        "what is 6 / 2",
        "what is the volume of my mug",
    ] {
        assert!(classifier.is_math_related(input), "input: {input}");
    }
}

#[test]
fn test_non_math_inputs() {
    let classifier = RelevanceClassifier::default();
    for input in ["", "   ", "tell me a joke", "hello there", "write a poem about the ocean"] {
        assert!(!classifier.is_math_related(input), "input: {input:?}");
    }
}

#[test]
fn test_custom_tables_replace_builtins() {
    let tables = ClassifierTables {
        keywords: vec!["Matrix".to_string()],
        symbolic_patterns: vec![r"\[\d+,\s*\d+\]".to_string()],
        question_patterns: vec![],
    };
    let classifier = RelevanceClassifier::new(tables).unwrap();

    assert_eq!(
        classifier.classify("invert this MATRIX"),
        Relevance::Keyword("matrix".to_string())
    );
    assert_eq!(classifier.classify("[1, 2]"), Relevance::Symbolic);
    // Built-in keyword no longer applies
    assert!(!classifier.is_math_related("solve it"));
}

#[test]
fn test_tables_loaded_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"keywords": ["vector"], "question_patterns": ["^dot product"]}}"#).unwrap();

    let config = ClassifierConfig {
        tables_path: Some(file.path().to_path_buf()),
    };
    let classifier = RelevanceClassifier::from_config(&config).unwrap();

    assert!(classifier.is_math_related("add two vectors"));
    assert_eq!(classifier.classify("dot product please"), Relevance::Question);
    assert!(!classifier.is_math_related("2+3"));
}

#[test]
fn test_unreadable_tables_file_errors() {
    let config = ClassifierConfig {
        tables_path: Some("/no/such/tables.json".into()),
    };
    assert!(RelevanceClassifier::from_config(&config).is_err());
}
