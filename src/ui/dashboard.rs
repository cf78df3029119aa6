//! Dashboard composition.
//!
//! Stacks the header, the overall-status banner, the metric card grid and the
//! weekly summary. Everything is read from one [`HealthRecord`].

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::data::{
    HealthRecord, Icon, OverallStatus, SeverityCategory, SummarySection, UserProfile,
    WeeklySummary,
};
use crate::ui::card::{MetricCard, CARD_HEIGHT};
use crate::ui::Theme;

/// Width at which cards go three across and the summary goes side by side.
pub const WIDE_LAYOUT_WIDTH: u16 = 100;
/// Width at which cards go two across. Narrower screens get one column.
pub const MEDIUM_LAYOUT_WIDTH: u16 = 80;

const GAP: u16 = 1;
const LAST_UPDATED: &str = "Last updated";
const BANNER_INDENT: &str = "   ";
const BULLET: &str = "• ";
const BULLET_HANG: &str = "  ";

/// Number of card columns for a given width.
pub fn grid_columns(width: u16) -> usize {
    if width >= WIDE_LAYOUT_WIDTH {
        3
    } else if width >= MEDIUM_LAYOUT_WIDTH {
        2
    } else {
        1
    }
}

fn cell_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Byte offset of the longest prefix of `word` that fits in `width` cells.
/// Always takes at least one char.
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, ch) in word.char_indices() {
        let w = cell_width(ch.encode_utf8(&mut [0; 4]));
        if used + w > width && idx > 0 {
            return idx;
        }
        used += w;
    }
    word.len()
}

/// Greedy word wrap into lines of at most `width` cells.
///
/// Runs of whitespace collapse to one space. Words longer than a line are
/// split across lines. Always returns at least one line.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let rest_width = cell_width(rest);
            let sep = usize::from(!current.is_empty());
            if current_width + sep + rest_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(rest);
                current_width += sep + rest_width;
                break;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                continue;
            }
            let split = split_at_width(rest, width);
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Name column, gap and "Last updated" column of the header.
fn header_areas(area: Rect, user: &UserProfile) -> [Rect; 3] {
    let right = cell_width(LAST_UPDATED)
        .max(cell_width(&user.last_updated))
        .min(usize::from(area.width / 2));
    Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GAP),
        Constraint::Length(to_u16(right)),
    ])
    .areas(area)
}

fn welcome_lines(user: &UserProfile, width: u16) -> Vec<String> {
    wrap_words(&format!("Welcome back, {}", user.name), usize::from(width))
}

fn header_height(width: u16, user: &UserProfile) -> u16 {
    let [left, _, _] = header_areas(Rect::new(0, 0, width, 1), user);
    to_u16(welcome_lines(user, left.width).len()).saturating_add(1)
}

/// Wrapped headline and message, each for a banner of `width` columns.
fn banner_text(overall: &OverallStatus, width: u16) -> (Vec<String>, Vec<String>) {
    let text_width = usize::from(width.saturating_sub(2)).saturating_sub(BANNER_INDENT.len());
    (
        wrap_words(&overall.headline, text_width),
        wrap_words(&overall.message, text_width),
    )
}

fn banner_height(width: u16, overall: &OverallStatus) -> u16 {
    let (headline, message) = banner_text(overall, width);
    to_u16(1 + headline.len() + message.len()).saturating_add(2)
}

fn grid_height(width: u16, cards: usize) -> u16 {
    let rows = cards.div_ceil(grid_columns(width));
    to_u16(rows).saturating_mul(CARD_HEIGHT)
}

/// Heading and bulleted items of one section, wrapped to `width`.
fn section_text(section: &SummarySection<'_>, width: u16) -> (Vec<String>, Vec<String>) {
    let width = usize::from(width);
    let heading = wrap_words(section.heading, width);
    let items = section
        .items
        .iter()
        .flat_map(|item| {
            wrap_words(item, width.saturating_sub(BULLET_HANG.len()))
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    let lead = if i == 0 { BULLET } else { BULLET_HANG };
                    format!("{}{}", lead, line)
                })
        })
        .collect();
    (heading, items)
}

fn section_rows(section: &SummarySection<'_>, width: u16) -> usize {
    let (heading, items) = section_text(section, width);
    heading.len() + items.len()
}

/// Column areas for the side-by-side summary.
fn summary_columns(inner: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(inner)
}

fn summary_height(width: u16, summary: &WeeklySummary) -> u16 {
    let sections = summary.sections();
    let inner = Rect::new(0, 0, width.saturating_sub(2), 1);
    let content = if width >= WIDE_LAYOUT_WIDTH {
        summary_columns(inner)
            .iter()
            .zip(sections.iter())
            .map(|(column, section)| section_rows(section, column.width))
            .max()
            .unwrap_or(0)
    } else {
        sections
            .iter()
            .map(|section| section_rows(section, inner.width))
            .sum()
    };
    to_u16(content).saturating_add(2)
}

fn section_heights(width: u16, record: &HealthRecord) -> [u16; 4] {
    [
        header_height(width, &record.user),
        banner_height(width, &record.overall),
        grid_height(width, record.metric_tiles().len()),
        summary_height(width, &record.weekly_summary),
    ]
}

/// Rows needed to show the whole dashboard at `width`.
pub fn required_height(width: u16, record: &HealthRecord) -> u16 {
    section_heights(width, record)
        .iter()
        .fold(GAP.saturating_mul(3), |total, h| total.saturating_add(*h))
}

/// The full dashboard screen.
pub struct DashboardView<'a> {
    record: &'a HealthRecord,
    theme: &'a Theme,
}

impl<'a> DashboardView<'a> {
    pub fn new(record: &'a HealthRecord, theme: &'a Theme) -> Self {
        Self { record, theme }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let user = &self.record.user;
        let [left, _, right] = header_areas(area, user);

        let mut lines = vec![Line::from(Span::styled("Health Dashboard", self.theme.header))];
        lines.extend(
            welcome_lines(user, left.width)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, self.theme.muted_style()))),
        );
        Paragraph::new(lines).render(left, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(LAST_UPDATED, self.theme.muted_style())),
            Line::from(Span::styled(
                user.last_updated.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Right)
        .render(right, buf);
    }

    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let tone = SeverityCategory::Success;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(Style::default().fg(self.theme.severity_color(tone)));
        let inner = block.inner(area);
        block.render(area, buf);

        let (headline, message) = banner_text(&self.record.overall, area.width);
        let headline_style = self.theme.severity_style(tone).add_modifier(Modifier::BOLD);
        let indented = |text: String, style: Style| {
            Line::from(Span::styled(format!("{}{}", BANNER_INDENT, text), style))
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!(" {} ", Icon::HEART.glyph()),
                self.theme.severity_style(tone),
            ),
            Span::styled("Overall Health Status", self.theme.header),
        ])];
        lines.extend(headline.into_iter().map(|l| indented(l, headline_style)));
        lines.extend(message.into_iter().map(|l| indented(l, self.theme.muted_style())));
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let tiles = self.record.metric_tiles();
        let columns = grid_columns(area.width);
        let rows = tiles.len().div_ceil(columns);

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);
        for (row_area, row_tiles) in row_areas.iter().zip(tiles.chunks(columns)) {
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
            for (cell, tile) in cells.iter().zip(row_tiles) {
                MetricCard::new(&tile.metric, tile.icon, self.theme).render(*cell, buf);
            }
        }
    }

    fn section_lines(&self, section: &SummarySection<'_>, width: u16) -> Vec<Line<'a>> {
        let (heading, items) = section_text(section, width);
        let heading_style = self
            .theme
            .severity_style(section.tone)
            .add_modifier(Modifier::BOLD);
        heading
            .into_iter()
            .map(|line| Line::from(Span::styled(line, heading_style)))
            .chain(
                items
                    .into_iter()
                    .map(|line| Line::from(Span::styled(line, self.theme.muted_style()))),
            )
            .collect()
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(Style::default().fg(self.theme.border))
            .title_top(Line::from(Span::styled(" Weekly Summary ", self.theme.header)));
        let inner = block.inner(area);
        block.render(area, buf);

        let sections = self.record.weekly_summary.sections();
        if area.width >= WIDE_LAYOUT_WIDTH {
            for (column, section) in summary_columns(inner).iter().zip(sections.iter()) {
                Paragraph::new(self.section_lines(section, column.width)).render(*column, buf);
            }
        } else {
            let lines: Vec<Line> = sections
                .iter()
                .flat_map(|section| self.section_lines(section, inner.width))
                .collect();
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, banner, grid, summary] = section_heights(area.width, self.record);
        let chunks = Layout::vertical([
            Constraint::Length(header),
            Constraint::Length(GAP),
            Constraint::Length(banner),
            Constraint::Length(GAP),
            Constraint::Length(grid),
            Constraint::Length(GAP),
            Constraint::Length(summary),
            Constraint::Min(0),
        ])
        .split(area);

        self.render_header(chunks[0], buf);
        self.render_banner(chunks[2], buf);
        self.render_grid(chunks[4], buf);
        self.render_summary(chunks[6], buf);
    }
}
