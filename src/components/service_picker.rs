// ABOUTME: Service picker component with multi-select toggling and a running total

use super::layout::{ACCENT, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::app::state::AppState;
use crate::catalog;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

pub struct ServicePickerComponent;

impl ServicePickerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(" Select Your Service ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(6),    // service list
                Constraint::Length(1), // price summary
                Constraint::Length(1), // continue hint
            ])
            .split(inner);

        let picker = &state.service_picker;
        let currency = &state.app_config.ui_preferences.currency_symbol;

        let items: Vec<ListItem> = catalog::SERVICES
            .iter()
            .enumerate()
            .map(|(idx, service)| {
                let highlighted = idx == picker.cursor;
                let selected = picker.is_selected(service.id);

                let cursor = if highlighted { "▶ " } else { "  " };
                let mark = if selected { "[x] " } else { "[ ] " };
                let name_style = if selected {
                    Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
                } else if highlighted {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(cursor, Style::default().fg(GOLD)),
                    Span::styled(mark, name_style),
                    Span::styled(format!("{:<18}", service.name), name_style),
                    Span::styled(format!("{:>8}", service.duration), Style::default().fg(MUTED_GRAY)),
                    Span::styled(
                        format!("{:>8}", format!("{currency}{}", service.price)),
                        Style::default().fg(SOFT_WHITE),
                    ),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), chunks[0]);

        if picker.continue_enabled() {
            let summary = Line::from(vec![
                Span::styled(picker.count_label(), Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("  {currency}{}", picker.total_price()),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(Paragraph::new(summary).alignment(Alignment::Center), chunks[1]);
        }

        let hint = if picker.continue_enabled() {
            Paragraph::new("Enter to continue").style(Style::default().fg(SELECTION_GREEN))
        } else {
            Paragraph::new("Toggle at least one service to continue")
                .style(Style::default().fg(MUTED_GRAY))
        };
        frame.render_widget(hint.alignment(Alignment::Center), chunks[2]);
    }
}

impl Default for ServicePickerComponent {
    fn default() -> Self {
        Self::new()
    }
}
