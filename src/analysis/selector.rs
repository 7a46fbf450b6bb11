//! Response selection: routes a classified query to a canned answer,
//! a classification summary, or the full analysis artifacts.

use rand::Rng;

use super::classify::classify_query;
use super::templates::{select_report, COMPLEX_RESPONSES, SIMPLE_RESPONSES};
use super::types::{
    Artifact, Classification, EndpointHint, FileLinks, QueryComplexity, QueryOutcome,
};

pub const ANALYSIS_REPORT_FILE: &str = "analysis_report.txt";
pub const SUMMARY_REPORT_FILE: &str = "summary_report.txt";
pub const CIRCUIT_DIAGRAM_FILE: &str = "circuit_diagram.png";
pub const FREQUENCY_PLOT_FILE: &str = "frequency_plot.png";

// ═══════════════════════════════════════════════════════════
// Randomness source
// ═══════════════════════════════════════════════════════════

/// Picks an index into a list of canned strings.
pub trait Chooser: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose_index(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same slot (clamped to the list length).
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

fn choose<'a>(chooser: &dyn Chooser, options: &[&'a str]) -> &'a str {
    options[chooser.choose_index(options.len()).min(options.len() - 1)]
}

// ═══════════════════════════════════════════════════════════
// Selection
// ═══════════════════════════════════════════════════════════

/// Pick a canned answer for a simple question.
pub fn simple_response(chooser: &dyn Chooser) -> &'static str {
    choose(chooser, &SIMPLE_RESPONSES)
}

/// Render a classification as the markdown message used by the
/// `classify` endpoint hint.
pub fn classification_message(classification: &Classification) -> String {
    format!(
        "**Query Classification:**\n\n**Type:** {}\n**Confidence:** {}%\n**Reasoning:** {}",
        classification.classification,
        classification.confidence_percent(),
        classification.reasoning
    )
}

/// Route a query according to its classification and endpoint hint.
///
/// `files_base` is the URL prefix for this session's directory, e.g.
/// `http://localhost:8000/files/<session_id>`. Nothing is written here;
/// the returned artifacts are persisted by the caller.
pub fn select_response(
    query: &str,
    hint: EndpointHint,
    files_base: &str,
    chooser: &dyn Chooser,
) -> QueryOutcome {
    let classification = classify_query(query);

    let simple_route = hint == EndpointHint::Simple
        || (hint == EndpointHint::Auto
            && classification.classification == QueryComplexity::Simple);

    if simple_route {
        return QueryOutcome {
            message: simple_response(chooser).to_string(),
            classification,
            files: None,
            artifacts: Vec::new(),
        };
    }

    if hint == EndpointHint::Classify {
        return QueryOutcome {
            message: classification_message(&classification),
            classification,
            files: None,
            artifacts: Vec::new(),
        };
    }

    let message = choose(chooser, &COMPLEX_RESPONSES).to_string();
    let lower = query.to_lowercase();
    let link = |name: &str| format!("{files_base}/{name}");

    let mut files = FileLinks::default();
    if lower.contains("circuit") || lower.contains("schematic") {
        files.schema_diagram = Some(link(CIRCUIT_DIAGRAM_FILE));
    }
    if lower.contains("plot") || lower.contains("frequency") || lower.contains("analyze") {
        files.circuit_plot = Some(link(FREQUENCY_PLOT_FILE));
    }

    let report = select_report(query);
    files.analysis_report = Some(link(ANALYSIS_REPORT_FILE));

    // Counts the links gathered so far, not the summary itself.
    let summary = format!(
        "Analysis complete for: {query}\n\nGenerated {} output files including circuit analysis report.",
        files.len()
    );
    files.summary_report = Some(link(SUMMARY_REPORT_FILE));

    QueryOutcome {
        message,
        classification,
        files: Some(files),
        artifacts: vec![
            Artifact {
                file_name: ANALYSIS_REPORT_FILE,
                contents: report.body().to_string(),
            },
            Artifact {
                file_name: SUMMARY_REPORT_FILE,
                contents: summary,
            },
        ],
    }
}
