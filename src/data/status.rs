//! Status labels and the severity categories they map to.
//!
//! Status text on a metric is open-ended: the known labels are parsed into
//! explicit variants and anything else is carried verbatim in
//! [`StatusLabel::Unrecognized`]. Classification never fails; unknown text
//! lands in [`SeverityCategory::Secondary`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual severity bucket that drives badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityCategory {
    Success,
    Primary,
    Warning,
    Destructive,
    /// Fallback for labels outside the known set.
    Secondary,
}

impl SeverityCategory {
    /// Lowercase name, as used in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityCategory::Success => "success",
            SeverityCategory::Primary => "primary",
            SeverityCategory::Warning => "warning",
            SeverityCategory::Destructive => "destructive",
            SeverityCategory::Secondary => "secondary",
        }
    }
}

impl fmt::Display for SeverityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health-state label attached to a metric.
///
/// Matching is exact and case-sensitive: `"Good"` is not `"good"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusLabel {
    Excellent,
    Optimal,
    Normal,
    Good,
    NeedsAttention,
    Critical,
    /// Any other text, kept as given.
    Unrecognized(String),
}

impl StatusLabel {
    /// Parse a label. Total: unknown text becomes [`StatusLabel::Unrecognized`].
    pub fn parse(label: &str) -> Self {
        Self::known(label).unwrap_or_else(|| StatusLabel::Unrecognized(label.to_string()))
    }

    fn known(label: &str) -> Option<Self> {
        match label {
            "excellent" => Some(StatusLabel::Excellent),
            "optimal" => Some(StatusLabel::Optimal),
            "normal" => Some(StatusLabel::Normal),
            "good" => Some(StatusLabel::Good),
            "needs attention" => Some(StatusLabel::NeedsAttention),
            "critical" => Some(StatusLabel::Critical),
            _ => None,
        }
    }

    /// The label text as it appears on the badge.
    pub fn as_str(&self) -> &str {
        match self {
            StatusLabel::Excellent => "excellent",
            StatusLabel::Optimal => "optimal",
            StatusLabel::Normal => "normal",
            StatusLabel::Good => "good",
            StatusLabel::NeedsAttention => "needs attention",
            StatusLabel::Critical => "critical",
            StatusLabel::Unrecognized(text) => text,
        }
    }

    /// Severity category used to color this label.
    pub fn severity(&self) -> SeverityCategory {
        match self {
            StatusLabel::Excellent | StatusLabel::Optimal | StatusLabel::Normal => {
                SeverityCategory::Success
            }
            StatusLabel::Good => SeverityCategory::Primary,
            StatusLabel::NeedsAttention => SeverityCategory::Warning,
            StatusLabel::Critical => SeverityCategory::Destructive,
            StatusLabel::Unrecognized(_) => SeverityCategory::Secondary,
        }
    }
}

impl From<String> for StatusLabel {
    fn from(label: String) -> Self {
        Self::known(&label).unwrap_or(StatusLabel::Unrecognized(label))
    }
}

impl From<&str> for StatusLabel {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<StatusLabel> for String {
    fn from(label: StatusLabel) -> Self {
        match label {
            StatusLabel::Unrecognized(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map free status text straight to its severity category.
pub fn classify(label: &str) -> SeverityCategory {
    StatusLabel::known(label).map_or(SeverityCategory::Secondary, |status| status.severity())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_labels() {
        assert_eq!(classify("excellent"), SeverityCategory::Success);
        assert_eq!(classify("optimal"), SeverityCategory::Success);
        assert_eq!(classify("normal"), SeverityCategory::Success);
        assert_eq!(classify("good"), SeverityCategory::Primary);
        assert_eq!(classify("needs attention"), SeverityCategory::Warning);
        assert_eq!(classify("critical"), SeverityCategory::Destructive);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        for label in ["", "Good", "unknown", "NEEDS ATTENTION", " normal", "needs-attention"] {
            assert_eq!(classify(label), SeverityCategory::Secondary, "label {:?}", label);
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        for label in ["good", "critical", "whatever"] {
            assert_eq!(classify(label), classify(label));
        }
    }

    #[test]
    fn test_parse_keeps_unrecognized_text() {
        let status = StatusLabel::parse("Elevated");
        assert_eq!(status, StatusLabel::Unrecognized("Elevated".to_string()));
        assert_eq!(status.as_str(), "Elevated");
        assert_eq!(status.severity(), SeverityCategory::Secondary);
    }

    #[test]
    fn test_parse_matches_classify() {
        for label in ["excellent", "good", "needs attention", "critical", "Normal"] {
            assert_eq!(StatusLabel::parse(label).severity(), classify(label));
        }
    }

    #[test]
    fn test_serde_uses_label_text() {
        let status: StatusLabel = serde_json::from_str("\"needs attention\"").unwrap();
        assert_eq!(status, StatusLabel::NeedsAttention);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"needs attention\"");

        let custom: StatusLabel = serde_json::from_str("\"borderline\"").unwrap();
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"borderline\"");
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(SeverityCategory::Destructive.to_string(), "destructive");
        assert_eq!(
            serde_json::to_string(&SeverityCategory::Warning).unwrap(),
            "\"warning\""
        );
    }
}
