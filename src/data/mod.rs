//! Data models for the dashboard.
//!
//! ## Submodules
//!
//! - [`status`]: Status labels and their severity categories ([`classify`])
//! - [`metric`]: Card-level display records ([`HealthMetric`], [`MetricValue`], [`Icon`])
//! - [`record`]: The immutable [`HealthRecord`] the screen is built from
//!
//! ## Data Flow
//!
//! ```text
//! HealthRecord (defaults / settings)
//!        │
//!        ▼
//! HealthRecord::metric_tiles()
//!        │
//!        └──▶ HealthMetric ──▶ StatusLabel::severity() ──▶ SeverityCategory
//! ```

pub mod metric;
pub mod record;
pub mod status;

pub use metric::{HealthMetric, Icon, MetricValue};
pub use record::{
    format_thousands, BloodPressure, HealthRecord, HeartRate, Hydration, MetricTile,
    OverallStatus, Sleep, Steps, SummarySection, UserProfile, Vitals, WeeklySummary, Weight,
};
pub use status::{classify, SeverityCategory, StatusLabel};
