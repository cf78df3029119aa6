//! Application state.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::data::HealthRecord;
use crate::ui::Theme;

/// Main application state.
///
/// The record is fixed for the lifetime of the app; the only state that
/// changes is whether the event loop should keep running.
pub struct App {
    pub running: bool,
    pub theme: Theme,
    pub record: HealthRecord,
}

impl App {
    pub fn new(record: HealthRecord, theme: Theme) -> Self {
        Self {
            running: true,
            theme,
            record,
        }
    }

    pub fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.running = false;
    }

    /// Build the JSON export: the record plus each card with its derived severity.
    pub fn export_value(&self) -> serde_json::Value {
        let metrics: Vec<serde_json::Value> = self
            .record
            .metric_tiles()
            .iter()
            .map(|tile| {
                let m = &tile.metric;
                json!({
                    "title": m.title,
                    "value": m.value,
                    "display": m.display_value(),
                    "unit": m.unit,
                    "status": m.status,
                    "severity": m.severity(),
                    "trend": m.trend,
                    "progress": m.progress,
                })
            })
            .collect();

        json!({
            "user": self.record.user,
            "overall": self.record.overall,
            "metrics": metrics,
            "weekly_summary": self.record.weekly_summary,
        })
    }

    /// Export current state to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.export_value())?;
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(json.as_bytes())?;
        tracing::info!(path = %path.display(), "exported dashboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn app() -> App {
        App::new(HealthRecord::default(), Theme::dark())
    }

    #[test]
    fn test_new_app_is_running() {
        let mut app = app();
        assert!(app.running);
        app.quit();
        assert!(!app.running);
    }

    #[test]
    fn test_export_value_lists_severities() {
        let value = app().export_value();
        let metrics = value["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 6);

        let severities: Vec<&str> = metrics
            .iter()
            .map(|m| m["severity"].as_str().unwrap())
            .collect();
        assert_eq!(
            severities,
            ["success", "success", "primary", "primary", "success", "warning"]
        );

        assert_eq!(metrics[1]["display"], "118/76 mmHg");
        assert_eq!(metrics[3]["unit"], serde_json::Value::Null);
        assert_eq!(metrics[5]["status"], "needs attention");
        assert_eq!(metrics[5]["progress"], 75.0);
        assert_eq!(value["user"]["age"], 32);
    }

    #[test]
    fn test_export_state_writes_file() {
        let file = NamedTempFile::new().unwrap();
        app().export_state(file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["metrics"][0]["title"], "Heart Rate");
        assert_eq!(parsed["weekly_summary"]["goals"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(app().export_state(&path).is_err());
    }
}
