//! The health record the whole dashboard is built from.
//!
//! A [`HealthRecord`] is constructed once at startup (from the built-in
//! defaults, optionally overlaid by settings) and passed by reference to the
//! view. Nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

use super::metric::{HealthMetric, Icon};
use super::status::{SeverityCategory, StatusLabel};

/// Who the dashboard belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    /// Free text such as "2 minutes ago".
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRate {
    pub current: u32,
    pub resting: u32,
    pub status: StatusLabel,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
    pub status: StatusLabel,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weight {
    pub current: f64,
    pub target: f64,
    pub status: StatusLabel,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Steps {
    pub current: u64,
    pub goal: u64,
    pub status: StatusLabel,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sleep {
    pub last_night: f64,
    pub average: f64,
    pub status: StatusLabel,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hydration {
    pub current: u32,
    pub goal: u32,
    pub status: StatusLabel,
    pub progress: f64,
}

/// The six tracked measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    pub heart_rate: HeartRate,
    pub blood_pressure: BloodPressure,
    pub weight: Weight,
    pub steps: Steps,
    pub sleep: Sleep,
    pub hydration: Hydration,
}

/// Copy for the overall-status banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallStatus {
    pub headline: String,
    pub message: String,
}

/// Bullet lists for the weekly summary panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySummary {
    pub improvements: Vec<String>,
    pub focus_areas: Vec<String>,
    pub goals: Vec<String>,
}

/// One column of the weekly summary.
#[derive(Debug, Clone, Copy)]
pub struct SummarySection<'a> {
    pub heading: &'static str,
    pub tone: SeverityCategory,
    pub items: &'a [String],
}

impl WeeklySummary {
    /// Sections in display order, each with the tone of its heading.
    pub fn sections(&self) -> [SummarySection<'_>; 3] {
        [
            SummarySection {
                heading: "Improvements",
                tone: SeverityCategory::Success,
                items: &self.improvements,
            },
            SummarySection {
                heading: "Areas to Focus",
                tone: SeverityCategory::Warning,
                items: &self.focus_areas,
            },
            SummarySection {
                heading: "Goals for Next Week",
                tone: SeverityCategory::Primary,
                items: &self.goals,
            },
        ]
    }
}

/// A metric paired with the icon its card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTile {
    pub icon: Icon,
    pub metric: HealthMetric,
}

/// Everything the dashboard displays.
///
/// Every section and field is optional when deserializing; anything left
/// out keeps the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthRecord {
    pub user: UserProfile,
    pub vitals: Vitals,
    pub overall: OverallStatus,
    pub weekly_summary: WeeklySummary,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "OFFORDILE, FRANCISCO CHUKWUKA (GROUP 16)".into(),
            age: 32,
            last_updated: "2 minutes ago".into(),
        }
    }
}

impl Default for HeartRate {
    fn default() -> Self {
        Self {
            current: 72,
            resting: 65,
            status: StatusLabel::Normal,
            trend: "+2 from yesterday".into(),
        }
    }
}

impl Default for BloodPressure {
    fn default() -> Self {
        Self {
            systolic: 118,
            diastolic: 76,
            status: StatusLabel::Optimal,
            trend: "stable".into(),
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self {
            current: 142.0,
            target: 140.0,
            status: StatusLabel::Good,
            trend: "-0.5 lbs this week".into(),
        }
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            current: 8420,
            goal: 10000,
            status: StatusLabel::Good,
            progress: 84.0,
        }
    }
}

impl Default for Sleep {
    fn default() -> Self {
        Self {
            last_night: 7.5,
            average: 7.2,
            status: StatusLabel::Excellent,
            trend: "+0.3 hrs this week".into(),
        }
    }
}

impl Default for Hydration {
    fn default() -> Self {
        Self {
            current: 6,
            goal: 8,
            status: StatusLabel::NeedsAttention,
            progress: 75.0,
        }
    }
}

impl Default for OverallStatus {
    fn default() -> Self {
        Self {
            headline: "Good - All vitals within normal ranges".into(),
            message: "Keep up the great work! Consider increasing daily water intake.".into(),
        }
    }
}

impl Default for WeeklySummary {
    fn default() -> Self {
        Self {
            improvements: vec![
                "Sleep quality increased by 15%".into(),
                "Average heart rate improved".into(),
                "Weight loss on track".into(),
            ],
            focus_areas: vec![
                "Increase daily water intake".into(),
                "Hit step goal more consistently".into(),
            ],
            goals: vec![
                "Maintain current sleep schedule".into(),
                "Increase daily steps by 500".into(),
                "Drink 8 glasses of water daily".into(),
            ],
        }
    }
}

impl HealthRecord {
    /// Build the six card tiles in display order.
    pub fn metric_tiles(&self) -> Vec<MetricTile> {
        let v = &self.vitals;
        vec![
            MetricTile {
                icon: Icon::HEART,
                metric: HealthMetric::new("Heart Rate", v.heart_rate.current, v.heart_rate.status.clone())
                    .with_unit("bpm")
                    .with_trend(v.heart_rate.trend.clone()),
            },
            MetricTile {
                icon: Icon::ACTIVITY,
                metric: HealthMetric::new(
                    "Blood Pressure",
                    format!("{}/{}", v.blood_pressure.systolic, v.blood_pressure.diastolic),
                    v.blood_pressure.status.clone(),
                )
                .with_unit("mmHg")
                .with_trend(v.blood_pressure.trend.clone()),
            },
            MetricTile {
                icon: Icon::SCALE,
                metric: HealthMetric::new("Weight", v.weight.current, v.weight.status.clone())
                    .with_unit("lbs")
                    .with_trend(v.weight.trend.clone()),
            },
            MetricTile {
                icon: Icon::FOOTPRINTS,
                metric: HealthMetric::new(
                    "Daily Steps",
                    format_thousands(v.steps.current),
                    v.steps.status.clone(),
                )
                .with_progress(v.steps.progress),
            },
            MetricTile {
                icon: Icon::MOON,
                metric: HealthMetric::new("Sleep Duration", v.sleep.last_night, v.sleep.status.clone())
                    .with_unit("hours")
                    .with_trend(v.sleep.trend.clone()),
            },
            MetricTile {
                icon: Icon::DROPLET,
                metric: HealthMetric::new("Water Intake", v.hydration.current, v.hydration.status.clone())
                    .with_unit("glasses")
                    .with_progress(v.hydration.progress),
            },
        ]
    }
}

/// Format an integer with comma thousands separators (8420 -> "8,420").
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metric::MetricValue;

    fn tile<'a>(tiles: &'a [MetricTile], title: &str) -> &'a HealthMetric {
        &tiles.iter().find(|t| t.metric.title == title).unwrap().metric
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(8420), "8,420");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_tiles_in_display_order() {
        let tiles = HealthRecord::default().metric_tiles();
        let titles: Vec<&str> = tiles.iter().map(|t| t.metric.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Heart Rate",
                "Blood Pressure",
                "Weight",
                "Daily Steps",
                "Sleep Duration",
                "Water Intake"
            ]
        );
        assert_eq!(tiles[0].icon, Icon::HEART);
        assert_eq!(tiles[5].icon, Icon::DROPLET);
    }

    #[test]
    fn test_hydration_tile() {
        let tiles = HealthRecord::default().metric_tiles();
        let water = tile(&tiles, "Water Intake");
        assert_eq!(water.display_value(), "6 glasses");
        assert_eq!(water.severity(), SeverityCategory::Warning);
        assert_eq!(water.progress_caption().as_deref(), Some("75% of goal"));
        assert_eq!(water.trend, None);
    }

    #[test]
    fn test_heart_rate_tile() {
        let tiles = HealthRecord::default().metric_tiles();
        let heart = tile(&tiles, "Heart Rate");
        assert_eq!(heart.display_value(), "72 bpm");
        assert_eq!(heart.severity(), SeverityCategory::Success);
        assert_eq!(heart.trend.as_deref(), Some("+2 from yesterday"));
        assert_eq!(heart.progress, None);
    }

    #[test]
    fn test_blood_pressure_composite_value() {
        let tiles = HealthRecord::default().metric_tiles();
        let bp = tile(&tiles, "Blood Pressure");
        assert_eq!(bp.value, MetricValue::Text("118/76".to_string()));
        assert_eq!(bp.unit.as_deref(), Some("mmHg"));
        assert_eq!(bp.severity(), SeverityCategory::Success);
    }

    #[test]
    fn test_steps_tile_has_no_unit() {
        let tiles = HealthRecord::default().metric_tiles();
        let steps = tile(&tiles, "Daily Steps");
        assert_eq!(steps.display_value(), "8,420");
        assert_eq!(steps.severity(), SeverityCategory::Primary);
        assert_eq!(steps.progress, Some(84.0));
    }

    #[test]
    fn test_summary_sections() {
        let record = HealthRecord::default();
        let sections = record.weekly_summary.sections();
        assert_eq!(sections[0].heading, "Improvements");
        assert_eq!(sections[0].items.len(), 3);
        assert_eq!(sections[1].tone, SeverityCategory::Warning);
        assert_eq!(sections[1].items.len(), 2);
        assert_eq!(sections[2].tone, SeverityCategory::Primary);
    }

    #[test]
    fn test_partial_record_keeps_defaults() {
        let record: HealthRecord = serde_json::from_str(
            r#"{ "vitals": { "hydration": { "current": 8, "goal": 8, "status": "excellent", "progress": 100 } } }"#,
        )
        .unwrap();
        assert_eq!(record.user, HealthRecord::default().user);
        assert_eq!(record.vitals.hydration.current, 8);
        assert_eq!(record.vitals.steps, Vitals::default().steps);
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let record: HealthRecord = serde_json::from_str(
            r#"{ "user": { "name": "X" }, "vitals": { "hydration": { "current": 7 } } }"#,
        )
        .unwrap();
        assert_eq!(record.user.name, "X");
        assert_eq!(record.user.age, 32);
        assert_eq!(record.user.last_updated, "2 minutes ago");
        assert_eq!(record.vitals.hydration.current, 7);
        assert_eq!(record.vitals.hydration.goal, 8);
        assert_eq!(record.vitals.hydration.status, StatusLabel::NeedsAttention);
        assert_eq!(record.vitals.hydration.progress, 75.0);
    }
}
