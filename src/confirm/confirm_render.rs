//! Confirmation dialog rendering
//!
//! Dims the whole frame, then draws a centered panel with the title, the
//! optional message and right-aligned cancel/confirm buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::confirm_state::ConfirmOptions;
use crate::config::ConfirmConfig;
use crate::theme;
use crate::widgets::popup;
use crate::widgets::text_wrap::{display_width, wrap_text};

const PANEL_WIDTH: u16 = 50;
const MIN_PANEL_WIDTH: u16 = 20;
const BUTTON_GAP: u16 = 2;

/// Hint shown on the bottom border
const CONFIRM_HINT: &str = " y/Enter confirm • n/Esc cancel ";

/// Screen areas of the rendered dialog, for mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmRegions {
    pub backdrop: Rect,
    pub panel: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
}

/// Render the backdrop and dialog for `options`
///
/// # Returns
/// The dialog regions, or `None` when the frame is too small for the panel
/// (the backdrop is still drawn so the modal stays visible)
pub fn render_confirm(
    frame: &mut Frame,
    options: &ConfirmOptions,
    defaults: &ConfirmConfig,
) -> Option<ConfirmRegions> {
    let frame_area = frame.area();
    popup::dim_area(frame, frame_area, theme::confirm::BACKDROP);

    let panel_width = PANEL_WIDTH.min(frame_area.width.saturating_sub(4));
    if panel_width < MIN_PANEL_WIDTH || frame_area.height < 7 {
        return None;
    }

    let text_width = panel_width.saturating_sub(4) as usize;
    let title_lines = wrap_text(&options.title, text_width);
    let message_lines = options
        .message
        .as_deref()
        .map(|message| wrap_text(message, text_width))
        .unwrap_or_default();

    let panel_height = panel_height(title_lines.len(), message_lines.len());
    let panel_area = popup::centered_popup(frame_area, panel_width, panel_height);
    popup::clear_area(frame, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::confirm::BORDER))
        .style(Style::default().bg(theme::confirm::BACKGROUND))
        .title_bottom(
            Line::from(Span::styled(
                CONFIRM_HINT,
                Style::default().fg(theme::confirm::HINT),
            ))
            .centered(),
        );
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let content = popup::inset_rect(inner, 1, 0);

    // Button row is the last content line; everything above is text
    let mut lines: Vec<Line> = title_lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, theme::confirm::TITLE)))
        .collect();
    if !message_lines.is_empty() {
        lines.push(Line::default());
        lines.extend(message_lines.into_iter().map(|line| {
            Line::from(Span::styled(
                line,
                Style::default().fg(theme::confirm::MESSAGE),
            ))
        }));
    }
    let text_area = Rect {
        height: content.height.saturating_sub(2),
        ..content
    };
    frame.render_widget(Paragraph::new(lines), text_area);

    let button_y = content.bottom().saturating_sub(1);
    let confirm_label = format!(" {} ", options.confirm_label(&defaults.confirm_text));
    let cancel_label = format!(" {} ", options.cancel_label(&defaults.cancel_text));

    let confirm_width = label_width(&confirm_label).min(content.width);
    let confirm = Rect {
        x: content.right().saturating_sub(confirm_width),
        y: button_y,
        width: confirm_width,
        height: 1,
    };

    let cancel_x = confirm
        .x
        .saturating_sub(BUTTON_GAP)
        .saturating_sub(label_width(&cancel_label))
        .max(content.x);
    let cancel = Rect {
        x: cancel_x,
        y: button_y,
        width: confirm.x.saturating_sub(BUTTON_GAP).saturating_sub(cancel_x),
        height: 1,
    };

    frame.render_widget(
        Paragraph::new(Span::styled(cancel_label, theme::confirm::CANCEL_BUTTON)),
        cancel,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(confirm_label, theme::confirm::CONFIRM_BUTTON)),
        confirm,
    );

    Some(ConfirmRegions {
        backdrop: frame_area,
        panel: panel_area,
        cancel,
        confirm,
    })
}

/// Borders, title, optional blank + message, blank, button row
fn panel_height(title_lines: usize, message_lines: usize) -> u16 {
    let message_block = if message_lines == 0 {
        0
    } else {
        message_lines + 1
    };
    let rows = 2 + title_lines.max(1) + message_block + 2;
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn label_width(label: &str) -> u16 {
    u16::try_from(display_width(label)).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "confirm_render_tests.rs"]
mod confirm_render_tests;
