// ABOUTME: Shop picker component presenting the fixed list of locations

use super::layout::{ACCENT, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::app::state::AppState;
use crate::catalog;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

pub struct ShopPickerComponent;

impl ShopPickerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(" Select a Barber Shop ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // subtitle
                Constraint::Min(4),    // shop list
                Constraint::Length(1), // continue hint
            ])
            .split(inner);

        let subtitle = Paragraph::new("Choose your preferred location")
            .style(Style::default().fg(MUTED_GRAY))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, chunks[0]);

        let picker = &state.shop_picker;
        let items: Vec<ListItem> = catalog::SHOPS
            .iter()
            .enumerate()
            .map(|(idx, shop)| {
                let highlighted = idx == picker.cursor;
                let marked = picker.marked.as_deref() == Some(shop.id);

                let cursor = if highlighted { "▶ " } else { "  " };
                let check = if marked { " ✓" } else { "" };
                let header = Line::from(vec![
                    Span::styled(cursor, Style::default().fg(GOLD)),
                    Span::styled(
                        shop.name,
                        if marked {
                            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
                        } else if highlighted {
                            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(SOFT_WHITE)
                        },
                    ),
                    Span::styled(check, Style::default().fg(SELECTION_GREEN)),
                ]);
                let meta = Line::from(vec![
                    Span::raw("    "),
                    Span::styled(shop.address, Style::default().fg(MUTED_GRAY)),
                    Span::styled(
                        format!("  ★ {:.1}  {}", shop.rating, shop.distance),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]);
                ListItem::new(vec![header, meta])
            })
            .collect();

        frame.render_widget(List::new(items), chunks[1]);

        let hint = if picker.continue_enabled() {
            Paragraph::new("Enter to continue").style(Style::default().fg(SELECTION_GREEN))
        } else {
            Paragraph::new("Mark a shop to continue").style(Style::default().fg(MUTED_GRAY))
        };
        frame.render_widget(hint.alignment(Alignment::Center), chunks[2]);
    }
}

impl Default for ShopPickerComponent {
    fn default() -> Self {
        Self::new()
    }
}
