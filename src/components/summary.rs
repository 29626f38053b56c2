// ABOUTME: Booking summary component showing shop, schedule, services and totals

use super::layout::{ACCENT, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER};
use crate::app::state::AppState;
use crate::catalog;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub struct SummaryComponent;

impl SummaryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(" Booking Summary ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let currency = &state.app_config.ui_preferences.currency_symbol;
        let ids = state.service_ids();
        let services = catalog::resolve_services(&ids);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(section("Barber Shop"));
        if let Some(shop) = state.selected_shop.as_deref().and_then(catalog::shop_by_id) {
            lines.push(value_line(shop.name));
            lines.push(muted_line(shop.address));
            lines.push(muted_line(shop.phone));
        } else {
            lines.push(muted_line("No shop selected"));
        }
        lines.push(Line::default());

        lines.push(section("Date & Time"));
        if let Some(date) = state.selected_date {
            // e.g. "Tuesday, September 15, 2026"
            lines.push(value_line(date.format("%A, %B %-d, %Y").to_string()));
        }
        if let Some(slot) = &state.selected_slot {
            lines.push(muted_line(slot.clone()));
        }
        lines.push(Line::default());

        lines.push(section("Services"));
        for service in &services {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", service.name), Style::default().fg(SOFT_WHITE)),
                Span::styled(format!("{:>8}", service.duration), Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("{:>8}", format!("{currency}{}", service.price)),
                    Style::default().fg(SOFT_WHITE),
                ),
            ]));
        }
        lines.push(Line::default());

        let minutes = catalog::total_duration_minutes(&ids);
        lines.push(Line::from(vec![
            Span::styled("  Total duration  ", Style::default().fg(MUTED_GRAY)),
            Span::styled(format!("{minutes} min"), Style::default().fg(SOFT_WHITE)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Total amount    ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                format!("{currency}{}", catalog::total_price(&ids)),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());

        if state.summary.is_processing() {
            lines.push(Line::from(Span::styled(
                "  Processing payment...",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("  Enter", Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)),
                Span::styled(" confirm & pay", Style::default().fg(MUTED_GRAY)),
                Span::styled("   │   ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Esc", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                Span::styled(" cancel booking", Style::default().fg(MUTED_GRAY)),
            ]));
        }

        let card = Paragraph::new(lines);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(15), Constraint::Percentage(70), Constraint::Percentage(15)])
            .split(inner);
        frame.render_widget(card, chunks[1]);
    }
}

impl Default for SummaryComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn value_line<'a, T: Into<String>>(text: T) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {}", text.into()),
        Style::default().fg(SOFT_WHITE),
    ))
}

fn muted_line<'a, T: Into<String>>(text: T) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {}", text.into()),
        Style::default().fg(MUTED_GRAY),
    ))
}
