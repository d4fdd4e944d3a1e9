//! Toast rendering
//!
//! Draws a single toast card: `[icon] title  ✕` on the first row (the title
//! wraps onto following rows), the wrapped message below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::toast_state::ToastEntry;
use crate::theme;
use crate::widgets::popup;
use crate::widgets::text_wrap::{display_width, wrap_text};

pub const CLOSE_ICON: &str = "✕";

/// Borders (2) plus one column of padding on each side
const CHROME_WIDTH: u16 = 4;

/// Icon, space before the title, and the gap + close button after it
const TITLE_DECORATION_WIDTH: usize = 4;

/// Preferred width for `entry`, clamped to `[min_width, max_width]`
pub fn toast_width(entry: &ToastEntry, min_width: u16, max_width: u16) -> u16 {
    let title_width = display_width(&entry.title) + TITLE_DECORATION_WIDTH;
    let message_width = entry
        .message
        .as_deref()
        .map(|message| message.lines().map(display_width).max().unwrap_or(0))
        .unwrap_or(0);

    let content = title_width.max(message_width);
    let desired = u16::try_from(content)
        .unwrap_or(u16::MAX)
        .saturating_add(CHROME_WIDTH);
    desired.clamp(min_width, max_width)
}

/// Height needed to show `entry` at `width`, borders included
pub fn toast_height(entry: &ToastEntry, width: u16) -> u16 {
    let rows = title_lines(entry, width).len().max(1) + message_lines(entry, width).len();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Title wrapped to the columns left beside the icon and close button
fn title_lines(entry: &ToastEntry, width: u16) -> Vec<String> {
    let title_width = (width as usize)
        .saturating_sub(CHROME_WIDTH as usize)
        .saturating_sub(TITLE_DECORATION_WIDTH);
    wrap_text(&entry.title, title_width)
}

fn message_lines(entry: &ToastEntry, width: u16) -> Vec<String> {
    let inner_width = width.saturating_sub(CHROME_WIDTH) as usize;
    entry
        .message
        .as_deref()
        .map(|message| wrap_text(message, inner_width))
        .unwrap_or_default()
}

/// Render one toast into `area`
///
/// # Returns
/// The cell occupied by the close button, for mouse hit testing
pub fn render_toast(frame: &mut Frame, entry: &ToastEntry, area: Rect) -> Option<Rect> {
    if area.width < CHROME_WIDTH + 2 || area.height < 3 {
        return None;
    }

    let colors = entry.kind.colors();
    let accent = Style::default().fg(colors.accent).bg(colors.bg);

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = popup::inset_rect(inner, 1, 0);

    let wrapped_title = title_lines(entry, area.width);
    let title_rows = u16::try_from(wrapped_title.len().max(1)).unwrap_or(u16::MAX);
    let title_area = Rect {
        height: title_rows.min(content.height),
        width: content.width.saturating_sub(2),
        ..content
    };

    // Continuation rows line up under the first word, not the icon
    let mut title: Vec<Line> = Vec::with_capacity(wrapped_title.len().max(1));
    let mut rows = wrapped_title.into_iter();
    title.push(Line::from(vec![
        Span::styled(entry.kind.icon(), accent.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(rows.next().unwrap_or_default(), theme::toast::TITLE),
    ]));
    title.extend(
        rows.map(|row| Line::from(vec![Span::raw("  "), Span::styled(row, theme::toast::TITLE)])),
    );
    frame.render_widget(Paragraph::new(title), title_area);

    let close_area = Rect {
        x: content.right().saturating_sub(1),
        y: content.y,
        width: 1,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_ICON,
            Style::default().fg(theme::toast::CLOSE),
        )),
        close_area,
    );

    let message_area = Rect {
        y: content.y.saturating_add(title_area.height),
        height: content.height.saturating_sub(title_area.height),
        ..content
    };
    if message_area.height > 0 {
        let lines: Vec<Line> = message_lines(entry, area.width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme::toast::MESSAGE))))
            .collect();
        frame.render_widget(Paragraph::new(lines), message_area);
    }

    Some(close_area)
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
