//! Metric card widget.
//!
//! Layout inside the rounded border:
//!
//! ```text
//! ╭ Water Intake ───────────── ≈ ╮
//! │6 glasses                     │
//! │                              │
//! │ needs attention              │
//! │███████████████████████░░░░░░░│
//! │75% of goal                   │
//! ╰──────────────────────────────╯
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::data::{HealthMetric, Icon};
use crate::ui::Theme;

/// Total rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 7;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Renders one [`HealthMetric`] as a bordered card.
pub struct MetricCard<'a> {
    metric: &'a HealthMetric,
    icon: Icon,
    theme: &'a Theme,
}

impl<'a> MetricCard<'a> {
    pub fn new(metric: &'a HealthMetric, icon: Icon, theme: &'a Theme) -> Self {
        Self {
            metric,
            icon,
            theme,
        }
    }

    fn value_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            self.metric.value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(unit) = self.metric.unit_suffix() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(unit.to_string(), self.theme.muted_style()));
        }
        Line::from(spans)
    }

    fn badge(&self) -> Span<'a> {
        Span::styled(
            format!(" {} ", self.metric.status),
            self.theme.badge_style(self.metric.severity()),
        )
    }

    /// Whether the trend fits on the badge row, one cell after the badge.
    fn trend_fits_beside_badge(&self, width: u16) -> bool {
        match &self.metric.trend {
            Some(trend) => {
                let needed = self.badge().width() + 1 + Span::raw(trend.as_str()).width();
                needed <= usize::from(width)
            }
            None => true,
        }
    }

    fn render_trend(&self, trend: &str, area: Rect, buf: &mut Buffer) {
        Paragraph::new(trend.to_string())
            .style(self.theme.muted_style())
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    fn render_badge_row(&self, area: Rect, trend_beside: bool, buf: &mut Buffer) {
        let badge = self.badge();
        let badge_width = u16::try_from(badge.width()).unwrap_or(u16::MAX);
        let [badge_area, _, trend_area] = Layout::horizontal([
            Constraint::Length(badge_width),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(Line::from(badge)).render(badge_area, buf);

        if let (true, Some(trend)) = (trend_beside, &self.metric.trend) {
            self.render_trend(trend, trend_area, buf);
        }
    }

    fn render_progress(&self, progress: f64, bar: Rect, caption: Rect, buf: &mut Buffer) {
        // Fill is bounded to the bar; the caption keeps the raw value.
        let ratio = if progress.is_finite() {
            (progress / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (ratio * f64::from(bar.width)).round() as u16;
        let filled = filled.min(bar.width);
        buf.set_string(
            bar.x,
            bar.y,
            BAR_FILLED.repeat(usize::from(filled)),
            Style::default().fg(self.theme.primary),
        );
        buf.set_string(
            bar.x + filled,
            bar.y,
            BAR_EMPTY.repeat(usize::from(bar.width - filled)),
            Style::default().fg(self.theme.track),
        );

        if let Some(text) = self.metric.progress_caption() {
            Paragraph::new(text)
                .style(self.theme.muted_style())
                .render(caption, buf);
        }
    }
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(Style::default().fg(self.theme.border))
            .title_top(Line::from(Span::styled(
                format!(" {} ", self.metric.title),
                self.theme.muted_style().add_modifier(Modifier::BOLD),
            )))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.icon.glyph()),
                    self.theme.muted_style(),
                ))
                .right_aligned(),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        let [value, spacer, badge_row, bar, caption] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.value_line()).render(value, buf);

        // A trend too long for the badge row takes the row under the value.
        let trend_beside = self.trend_fits_beside_badge(badge_row.width);
        if let (false, Some(trend)) = (trend_beside, &self.metric.trend) {
            self.render_trend(trend, spacer, buf);
        }
        self.render_badge_row(badge_row, trend_beside, buf);

        if let Some(progress) = self.metric.progress {
            self.render_progress(progress, bar, caption, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SeverityCategory;
    use crate::ui::buffer_lines;
    use crate::ui::testing::find_text;

    const WIDTH: u16 = 40;

    fn render(metric: &HealthMetric, theme: &Theme) -> Buffer {
        let area = Rect::new(0, 0, WIDTH, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        MetricCard::new(metric, Icon::DROPLET, theme).render(area, &mut buf);
        buf
    }

    fn text(buf: &Buffer) -> String {
        buffer_lines(buf).join("\n")
    }

    #[test]
    fn test_hydration_card() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Water Intake", 6u32, "needs attention")
            .with_unit("glasses")
            .with_progress(75.0);
        let buf = render(&metric, &theme);
        let rendered = text(&buf);

        assert!(rendered.contains("Water Intake"));
        assert!(rendered.contains("6 glasses"));
        assert!(rendered.contains("needs attention"));
        assert!(rendered.contains("75% of goal"));

        let (x, y) = find_text(&buf, "needs attention").unwrap();
        let cell = &buf.content()[buf.index_of(x, y)];
        assert_eq!(cell.bg, theme.severity_color(SeverityCategory::Warning));
    }

    #[test]
    fn test_heart_rate_card_has_trend_and_no_progress() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Heart Rate", 72u32, "normal")
            .with_unit("bpm")
            .with_trend("+2 from yesterday");
        let buf = render(&metric, &theme);
        let rendered = text(&buf);

        assert!(rendered.contains("72 bpm"));
        assert!(rendered.contains("+2 from yesterday"));
        assert!(!rendered.contains("of goal"));
        assert!(!rendered.contains('█'));

        let (x, y) = find_text(&buf, "normal").unwrap();
        let cell = &buf.content()[buf.index_of(x, y)];
        assert_eq!(cell.bg, theme.severity_color(SeverityCategory::Success));
    }

    #[test]
    fn test_zero_progress_still_renders_block() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Daily Steps", "0", "critical").with_progress(0.0);
        let rendered = text(&render(&metric, &theme));
        assert!(rendered.contains("0% of goal"));
    }

    #[test]
    fn test_missing_trend_renders_no_caption() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Weight", 142u32, "good").with_unit("lbs");
        let lines = buffer_lines(&render(&metric, &theme));
        // Badge row holds only the badge between the borders.
        assert_eq!(lines[3].trim_end_matches('│').trim(), "│ good");
    }

    #[test]
    fn test_out_of_range_progress_is_bounded() {
        let theme = Theme::dark();
        let over = HealthMetric::new("Daily Steps", "12,000", "excellent").with_progress(120.0);
        let rendered = text(&render(&over, &theme));
        assert!(rendered.contains("120% of goal"));

        let under = HealthMetric::new("Daily Steps", "0", "good").with_progress(-5.0);
        assert!(text(&render(&under, &theme)).contains("-5% of goal"));

        let nan = HealthMetric::new("Daily Steps", "0", "good").with_progress(f64::NAN);
        assert!(text(&render(&nan, &theme)).contains("NaN% of goal"));
    }

    /// Cells between the side borders on `row`.
    fn inner_row(buf: &Buffer, row: usize) -> String {
        let line = &buffer_lines(buf)[row];
        line.trim_end()
            .trim_start_matches('│')
            .trim_end_matches('│')
            .to_string()
    }

    #[test]
    fn test_progress_bar_fill_is_solid() {
        let theme = Theme::dark();
        for (progress, filled) in [(75.0, 29), (84.0, 32), (50.0, 19)] {
            let metric = HealthMetric::new("Water Intake", 6u32, "good").with_progress(progress);
            let bar = inner_row(&render(&metric, &theme), 4);

            assert_eq!(bar.chars().count(), usize::from(WIDTH - 2));
            assert!(!bar.contains(' '), "gap in bar at {}%: {:?}", progress, bar);
            assert_eq!(bar.matches('█').count(), filled, "fill at {}%", progress);
            assert!(bar.trim_start_matches('█').chars().all(|c| c == '░'));
        }
    }

    #[test]
    fn test_progress_bar_bounds() {
        let theme = Theme::dark();
        let full = HealthMetric::new("Daily Steps", "12,000", "excellent").with_progress(120.0);
        assert_eq!(inner_row(&render(&full, &theme), 4), "█".repeat(38));

        let empty = HealthMetric::new("Daily Steps", "0", "critical").with_progress(0.0);
        let buf = render(&empty, &theme);
        assert_eq!(inner_row(&buf, 4), "░".repeat(38));
        let cell = &buf.content()[buf.index_of(1, 4)];
        assert_eq!(cell.fg, theme.track);
    }

    #[test]
    fn test_long_trend_moves_to_its_own_row() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Weight", 142u32, "needs attention")
            .with_unit("lbs")
            .with_trend("-0.5 lbs this week, +1 this month");
        let buf = render(&metric, &theme);

        assert!(text(&buf).contains("-0.5 lbs this week, +1 this month"));
        assert_eq!(inner_row(&buf, 3).trim(), "needs attention");
        assert_eq!(find_text(&buf, "-0.5 lbs").map(|(_, y)| y), Some(2));
    }

    #[test]
    fn test_short_trend_shares_badge_row() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Weight", 142u32, "good").with_trend("stable");
        let buf = render(&metric, &theme);
        assert_eq!(find_text(&buf, "stable").map(|(_, y)| y), Some(3));
        assert_eq!(inner_row(&buf, 2).trim(), "");
    }

    #[test]
    fn test_unknown_status_uses_secondary_badge() {
        let theme = Theme::dark();
        let metric = HealthMetric::new("Heart Rate", 72u32, "Good");
        let buf = render(&metric, &theme);
        let (x, y) = find_text(&buf, "Good").unwrap();
        let cell = &buf.content()[buf.index_of(x, y)];
        assert_eq!(cell.bg, theme.secondary);
    }
}
