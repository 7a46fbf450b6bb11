use std::fmt;

use serde::{Deserialize, Serialize};

/// Complexity label assigned to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryComplexity {
    Simple,
    Complex,
}

impl fmt::Display for QueryComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// Result of keyword classification. Derived from the query text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub classification: QueryComplexity,
    pub confidence: f64,
    pub reasoning: String,
}

impl Classification {
    /// Confidence as a whole percentage, e.g. `0.9` → `90`.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Routing hint sent alongside a query.
///
/// Unknown values fall through to the full analysis path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointHint {
    #[default]
    Auto,
    Simple,
    Classify,
    #[serde(other)]
    Full,
}

/// Which fixed markdown report a complex query receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTemplate {
    RcFilter,
    Amplifier,
}

/// Links to artifacts for one session. Image links point at files
/// that are never generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_diagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_report: Option<String>,
}

impl FileLinks {
    pub fn len(&self) -> usize {
        [
            &self.schema_diagram,
            &self.circuit_plot,
            &self.analysis_report,
            &self.summary_report,
        ]
        .iter()
        .filter(|link| link.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Artifact to write under `files/<session_id>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: String,
}

/// Outcome of routing one query through the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub message: String,
    pub classification: Classification,
    /// Present only on the full analysis path.
    pub files: Option<FileLinks>,
    pub artifacts: Vec<Artifact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_hint_parses_known_values() {
        let hint: EndpointHint = serde_json::from_str(r#""classify""#).unwrap();
        assert_eq!(hint, EndpointHint::Classify);
        let hint: EndpointHint = serde_json::from_str(r#""simple""#).unwrap();
        assert_eq!(hint, EndpointHint::Simple);
        let hint: EndpointHint = serde_json::from_str(r#""full""#).unwrap();
        assert_eq!(hint, EndpointHint::Full);
    }

    #[test]
    fn unknown_endpoint_hint_means_full() {
        let hint: EndpointHint = serde_json::from_str(r#""deep-dive""#).unwrap();
        assert_eq!(hint, EndpointHint::Full);
    }

    #[test]
    fn file_links_skip_missing_entries() {
        let links = FileLinks {
            analysis_report: Some("http://x/files/a/analysis_report.txt".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&links).unwrap();
        assert!(json.get("schema_diagram").is_none());
        assert_eq!(json["analysis_report"], "http://x/files/a/analysis_report.txt");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn confidence_percent_rounds() {
        let c = Classification {
            classification: QueryComplexity::Simple,
            confidence: 0.7999999999999999,
            reasoning: String::new(),
        };
        assert_eq!(c.confidence_percent(), 80);
    }
}
