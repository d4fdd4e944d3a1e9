use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::provider::ToastProvider;
use crate::theme;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("1", "Success toast"),
    ("2", "Error toast"),
    ("3", "Warning toast"),
    ("4", "Info toast"),
    ("p", "Persistent toast"),
    ("d", "Delete an item (asks first)"),
    ("q", "Quit (asks first)"),
    ("Ctrl+C", "Quit now"),
];

/// Width of the key column
const KEY_COLUMN: usize = 8;

impl App {
    /// Render the app, then the provider's overlays on top
    pub fn render(&self, frame: &mut Frame, provider: &ToastProvider) {
        self.render_panel(frame);
        provider.render(frame);
    }

    fn render_panel(&self, frame: &mut Frame) {
        let area = frame.area();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" toastbox ", theme::app::TITLE))
            .border_style(Style::default().fg(theme::app::BORDER))
            .style(Style::default().bg(theme::app::BACKGROUND));

        let mut lines: Vec<Line> = KEY_BINDINGS
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!(" {:<width$}", key, width = KEY_COLUMN), theme::app::KEY),
                    Span::styled(*description, Style::default().fg(theme::app::DESCRIPTION)),
                ])
            })
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" Items: {} • {}", self.items(), self.status()),
            Style::default().fg(theme::app::STATUS),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
