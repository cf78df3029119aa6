//! Display records for individual metric cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::status::{SeverityCategory, StatusLabel};

/// A metric's headline value.
///
/// Shown verbatim: numbers use their shortest form (`72`, `7.5`), anything
/// needing formatting (`"8,420"`, `"118/76"`) is passed in as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        MetricValue::Number(n)
    }
}

impl From<u32> for MetricValue {
    fn from(n: u32) -> Self {
        MetricValue::Number(f64::from(n))
    }
}

impl From<String> for MetricValue {
    fn from(text: String) -> Self {
        MetricValue::Text(text)
    }
}

impl From<&str> for MetricValue {
    fn from(text: &str) -> Self {
        MetricValue::Text(text.to_string())
    }
}

/// Glyph shown in a card's top-right corner.
///
/// Opaque to the card: it is drawn as given and never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon(&'static str);

impl Icon {
    pub const HEART: Icon = Icon("♥");
    pub const ACTIVITY: Icon = Icon("∿");
    pub const SCALE: Icon = Icon("⚖");
    pub const FOOTPRINTS: Icon = Icon("⋰");
    pub const MOON: Icon = Icon("☾");
    pub const DROPLET: Icon = Icon("≈");

    pub fn glyph(&self) -> &'static str {
        self.0
    }
}

/// One metric as displayed on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub title: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub status: StatusLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    /// Percentage of goal. Not clamped here; the progress bar bounds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl HealthMetric {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<MetricValue>,
        status: impl Into<StatusLabel>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            unit: None,
            status: status.into(),
            trend: None,
            progress: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn severity(&self) -> SeverityCategory {
        self.status.severity()
    }

    /// Unit suffix, if there is a non-empty one.
    pub fn unit_suffix(&self) -> Option<&str> {
        self.unit.as_deref().filter(|unit| !unit.is_empty())
    }

    /// Value followed by its unit, e.g. `"6 glasses"`.
    pub fn display_value(&self) -> String {
        match self.unit_suffix() {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.to_string(),
        }
    }

    /// Caption under the progress bar, present whenever `progress` is set.
    pub fn progress_caption(&self) -> Option<String> {
        self.progress.map(|progress| format!("{}% of goal", progress))
    }
}
