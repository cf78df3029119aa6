//! Terminal rendering using ratatui.
//!
//! - [`card`]: the metric card widget
//! - [`dashboard`]: the full-screen composition
//! - [`theme`]: colors and severity styles

pub mod card;
pub mod dashboard;
pub mod theme;

pub use card::{MetricCard, CARD_HEIGHT};
pub use dashboard::{grid_columns, required_height, DashboardView};
pub use theme::{Theme, ThemeMode};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::data::HealthRecord;

/// Smallest terminal the dashboard will draw into.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Draw one frame.
///
/// The dashboard is laid out at its full height off-screen and the top of it
/// is copied into the frame, so short terminals clip rather than squash.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.warning));
        let centered = Rect::new(
            area.x,
            area.y + (area.height / 2).saturating_sub(2),
            area.width,
            5u16.min(area.height),
        );
        frame.render_widget(paragraph, centered);
        return;
    }

    let canvas = render_offscreen(&app.record, &app.theme, area.width);
    let visible = area.height.min(canvas.area.height);
    let target = frame.buffer_mut();
    for y in 0..visible {
        for x in 0..area.width {
            let src = canvas.index_of(x, y);
            let dst = target.index_of(area.x + x, area.y + y);
            target.content[dst] = canvas.content[src].clone();
        }
    }
}

fn render_offscreen(record: &HealthRecord, theme: &Theme, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, required_height(width, record));
    let mut buf = Buffer::empty(area);
    DashboardView::new(record, theme).render(area, &mut buf);
    buf
}

/// Render the whole dashboard as plain text, `width` columns wide.
///
/// Widths below [`MIN_WIDTH`] are raised to it.
pub fn render_to_text(record: &HealthRecord, theme: &Theme, width: u16) -> String {
    let buf = render_offscreen(record, theme, width.max(MIN_WIDTH));
    buffer_lines(&buf).join("\n")
}

/// Rows of a buffer as strings, trailing whitespace removed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = usize::from(buf.area.width.max(1));
    buf.content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}
