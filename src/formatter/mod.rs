// Solution formatter
//
// Normalizes `$...$` / `$$...$$` delimiters so the page renders typeset math.
// Model output only follows the delimiter convention because it was asked to,
// so unmatched delimiters are escaped (`\$`) instead of being trusted.

use once_cell::sync::Lazy;
use regex::Regex;

static LEXICAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b\d+[xyz]\b",               // 2x
        r"[xyz]\s*[\+\-\*/\^=]\s*\d+", // x = 5
        r"\b[fgh]\([xyz]\)",           // f(x)
    ]
    .iter()
    .map(|p| Regex::new(p).expect("lexical pattern compiles"))
    .collect()
});

static OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"([+\-*/=])").expect("operator pattern compiles"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// A piece of model output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, including escaped `\$`
    Prose(&'a str),
    /// Content of a `$...$` span (single line)
    Inline(&'a str),
    /// Content of a `$$...$$` span (may span lines)
    Block(&'a str),
    /// A `$` or `$$` without a matching closer
    Stray(&'a str),
}

/// Split text into prose, math spans and stray delimiters.
///
/// `\$` never opens or closes a span. An inline span ends at the first
/// unescaped `$` on the same line; if that `$` starts a `$$`, the opener is
/// stray.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut prose_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'$') => i += 2,
            b'$' => {
                if prose_start < i {
                    out.push(Segment::Prose(&text[prose_start..i]));
                }

                if bytes.get(i + 1) == Some(&b'$') {
                    match find_block_close(bytes, i + 2) {
                        Some(close) => {
                            out.push(Segment::Block(&text[i + 2..close]));
                            i = close + 2;
                        }
                        None => {
                            out.push(Segment::Stray(&text[i..i + 2]));
                            i += 2;
                        }
                    }
                } else {
                    match find_inline_close(bytes, i + 1) {
                        Some(close) => {
                            out.push(Segment::Inline(&text[i + 1..close]));
                            i = close + 1;
                        }
                        None => {
                            out.push(Segment::Stray(&text[i..i + 1]));
                            i += 1;
                        }
                    }
                }
                prose_start = i;
            }
            _ => i += 1,
        }
    }

    if prose_start < bytes.len() {
        out.push(Segment::Prose(&text[prose_start..]));
    }
    out
}

fn find_block_close(bytes: &[u8], mut i: usize) -> Option<usize> {
    while i + 1 < bytes.len() {
        match bytes[i] {
            b'\\' if bytes[i + 1] == b'$' => i += 2,
            b'$' if bytes[i + 1] == b'$' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn find_inline_close(bytes: &[u8], mut i: usize) -> Option<usize> {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'$') => i += 2,
            b'\n' => return None,
            b'$' if bytes.get(i + 1) == Some(&b'$') => return None,
            b'$' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Prepare model output for display.
///
/// Well-formed spans pass through verbatim, stray delimiters become `\$`.
/// Running it twice gives the same text as running it once.
pub fn format_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Prose(prose) => out.push_str(prose),
            Segment::Inline(math) => {
                out.push('$');
                out.push_str(math);
                out.push('$');
            }
            Segment::Block(math) => {
                out.push_str("$$");
                out.push_str(math);
                out.push_str("$$");
            }
            Segment::Stray(delimiter) => {
                for _ in delimiter.chars() {
                    out.push_str("\\$");
                }
            }
        }
    }
    out
}

/// True when every `$`/`$$` in the text has a partner
pub fn has_balanced_delimiters(text: &str) -> bool {
    !segments(text)
        .iter()
        .any(|segment| matches!(segment, Segment::Stray(_)))
}

/// Pull math spans and variable/function fragments out of text.
///
/// Span contents come first in document order, then lexical fragments such
/// as `2x`, `x = 5` and `f(x)`.
pub fn extract_expressions(text: &str) -> Vec<String> {
    let mut expressions: Vec<String> = segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Inline(math) | Segment::Block(math) => Some(math.to_string()),
            _ => None,
        })
        .collect();

    for pattern in LEXICAL_PATTERNS.iter() {
        expressions.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }

    expressions
}

/// Canonicalize a typed problem: single spaces, operators padded.
///
/// Purely lexical; nothing is re-parsed.
pub fn clean_input(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    let padded = OPERATOR.replace_all(&collapsed, " $1 ");
    WHITESPACE.replace_all(padded.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_mixed() {
        let parts = segments("Let $x=2$ so\n$$y = x^2$$ done");
        assert_eq!(
            parts,
            vec![
                Segment::Prose("Let "),
                Segment::Inline("x=2"),
                Segment::Prose(" so\n"),
                Segment::Block("y = x^2"),
                Segment::Prose(" done"),
            ]
        );
    }

    #[test]
    fn test_block_spans_lines() {
        let parts = segments("$$\na\n+ b\n$$");
        assert_eq!(parts, vec![Segment::Block("\na\n+ b\n")]);
    }

    #[test]
    fn test_inline_does_not_cross_lines() {
        let parts = segments("cost $5\nand $x$");
        assert_eq!(
            parts,
            vec![
                Segment::Prose("cost "),
                Segment::Stray("$"),
                Segment::Prose("5\nand "),
                Segment::Inline("x"),
            ]
        );
    }

    #[test]
    fn test_escaped_dollar_is_prose() {
        assert_eq!(segments(r"pay \$5 now"), vec![Segment::Prose(r"pay \$5 now")]);
    }

    #[test]
    fn test_block_not_split_into_inline() {
        assert_eq!(format_for_display("$$x^2$$"), "$$x^2$$");
        assert_eq!(segments("$$x^2$$"), vec![Segment::Block("x^2")]);
    }

    #[test]
    fn test_stray_delimiters_escaped() {
        assert_eq!(format_for_display("costs $5"), r"costs \$5");
        assert_eq!(format_for_display("open $$ x"), r"open \$\$ x");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "plain prose",
            "$a$ and $$b$$",
            "costs $5 and $$",
            "$x$$",
            "\\$$x$$",
            "multi\n$$\n\\frac{1}{2}\n$$\nline $y$",
        ];
        for sample in samples {
            let once = format_for_display(sample);
            assert_eq!(format_for_display(&once), once, "sample: {sample:?}");
        }
    }

    #[test]
    fn test_balanced_delimiters() {
        assert!(has_balanced_delimiters("$a$ and $$b$$"));
        assert!(has_balanced_delimiters("no math"));
        assert!(!has_balanced_delimiters("$a"));
    }

    #[test]
    fn test_extract_expressions() {
        let found = extract_expressions("We have $2x = 10$ so $$x = 5$$ and f(x) too");
        assert_eq!(found[0], "2x = 10");
        assert_eq!(found[1], "x = 5");
        assert!(found.contains(&"2x".to_string()));
        assert!(found.contains(&"f(x)".to_string()));
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  2x+5   =13 "), "2x + 5 = 13");
        assert_eq!(clean_input("a*b/c"), "a * b / c");
        assert_eq!(clean_input(""), "");
    }
}
