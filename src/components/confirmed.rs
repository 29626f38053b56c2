// ABOUTME: Confirmation screen shown after the simulated payment succeeds

use super::layout::{centered_rect, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::app::state::AppState;
use crate::catalog;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub struct ConfirmedComponent;

impl ConfirmedComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let card = centered_rect(55, 60, area);
        frame.render_widget(Clear, card);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SELECTION_GREEN))
            .title(" Booking Confirmed ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let mut lines: Vec<Line> = vec![
            Line::default(),
            Line::from(Span::styled(
                "✓ Your appointment is booked!",
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        if let Some(reference) = state.booking_reference {
            lines.push(Line::from(vec![
                Span::styled("Reference: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(reference.to_string(), Style::default().fg(SOFT_WHITE)),
            ]));
            lines.push(Line::default());
        }

        if let Some(shop) = state.selected_shop.as_deref().and_then(catalog::shop_by_id) {
            lines.push(Line::from(Span::styled(shop.name, Style::default().fg(SOFT_WHITE))));
        }
        if let (Some(date), Some(slot)) = (state.selected_date, &state.selected_slot) {
            lines.push(Line::from(Span::styled(
                format!("{} at {}", date.format("%A, %B %-d, %Y"), slot),
                Style::default().fg(MUTED_GRAY),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press Enter to return to the start",
            Style::default().fg(MUTED_GRAY),
        )));

        let body = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(body, inner);
    }
}

impl Default for ConfirmedComponent {
    fn default() -> Self {
        Self::new()
    }
}
