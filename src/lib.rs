//! # health-dashboard
//!
//! A terminal dashboard for a personal health record: a header, an
//! overall-status banner, six metric cards and a weekly summary.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  settings ──▶ HealthRecord ──▶ app ──▶ ui::DashboardView ──▶ Terminal │
//! │                    │                        │                  │
//! │                    ▼                        ▼                  │
//! │             metric_tiles()            ui::MetricCard           │
//! │                    │                        │                  │
//! │                    └────▶ classify(status) ◀┘                  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: status classification, metric records and the health record
//! - **[`ui`]**: ratatui widgets for cards and the full screen, plus themes
//! - **[`app`]**: application state and JSON export
//! - **[`settings`]**: layered configuration (file + environment)
//!
//! ## Usage
//!
//! ### Classifying a status label
//!
//! ```
//! use health_dashboard::{classify, SeverityCategory};
//!
//! assert_eq!(classify("needs attention"), SeverityCategory::Warning);
//! assert_eq!(classify("Needs Attention"), SeverityCategory::Secondary);
//! ```
//!
//! ### Rendering the dashboard as text
//!
//! ```
//! use health_dashboard::{ui, HealthRecord, Theme};
//!
//! let text = ui::render_to_text(&HealthRecord::default(), &Theme::dark(), 120);
//! assert!(text.contains("75% of goal"));
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod logging;
pub mod settings;
pub mod ui;

pub use app::App;
pub use data::{
    classify, format_thousands, HealthMetric, HealthRecord, Icon, MetricTile, MetricValue,
    SeverityCategory, StatusLabel,
};
pub use settings::{Settings, SettingsError};
pub use ui::{DashboardView, MetricCard, Theme, ThemeMode};
