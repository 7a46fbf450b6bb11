use super::types::{Classification, QueryComplexity};

/// Phrases that mark a query as needing full analysis.
const COMPLEX_KEYWORDS: [&str; 13] = [
    "analyze",
    "design",
    "simulate",
    "calculate",
    "frequency response",
    "transfer function",
    "bode plot",
    "circuit diagram",
    "schematic",
    "amplifier",
    "filter",
    "oscillator",
    "power supply",
];

/// Phrases that mark a query as a definition-style question.
const SIMPLE_KEYWORDS: [&str; 6] = [
    "what is",
    "define",
    "explain",
    "how does",
    "basic",
    "simple",
];

/// More words than this forces the complex label.
const LONG_QUERY_WORDS: usize = 15;

/// Fewer words than this allows the simple label without a keyword.
const SHORT_QUERY_WORDS: usize = 8;

/// Classify a query as simple or complex using keyword heuristics.
///
/// Keywords are matched as raw substrings of the lowercased query, so
/// multi-word phrases only count when contiguous. Deterministic.
pub fn classify_query(text: &str) -> Classification {
    let lower = text.to_lowercase();
    let complex_hits = count_hits(&lower, &COMPLEX_KEYWORDS);
    let simple_hits = count_hits(&lower, &SIMPLE_KEYWORDS);
    let word_count = text.split_whitespace().count();

    if complex_hits > 0 || word_count > LONG_QUERY_WORDS {
        Classification {
            classification: QueryComplexity::Complex,
            confidence: tenths(8 + complex_hits.min(2)),
            reasoning: format!("Contains {complex_hits} complex keywords"),
        }
    } else if simple_hits > 0 || word_count < SHORT_QUERY_WORDS {
        Classification {
            classification: QueryComplexity::Simple,
            confidence: tenths(7 + simple_hits.min(3)),
            reasoning: format!("Contains {simple_hits} simple keywords"),
        }
    } else {
        Classification {
            classification: QueryComplexity::Simple,
            confidence: 0.6,
            reasoning: "Default classification based on length".to_string(),
        }
    }
}

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

// Integer tenths keep 0.8 + 0.1 from printing as 0.9000000000000001.
fn tenths(n: usize) -> f64 {
    (n.min(10) as f64) / 10.0
}
