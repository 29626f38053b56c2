// ABOUTME: Date/time picker component rendering the month calendar and slot list

use super::layout::{ACCENT, DANGER_RED, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER};
use crate::app::state::{AppState, DateTimeFocus};
use crate::calendar;
use crate::catalog;
use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

pub struct DateTimePickerComponent;

impl DateTimePickerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(" Select Your Date ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        self.render_calendar(frame, halves[0], state);
        self.render_slots(frame, halves[1], state);
    }

    fn render_calendar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let picker = &state.date_picker;
        let focused = picker.focus == DateTimeFocus::Calendar;
        let border = if focused { GOLD } else { SUBDUED_BORDER };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", picker.month.title()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let today = Local::now().date_naive();
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(
            calendar::WEEKDAY_HEADERS
                .iter()
                .map(|d| Span::styled(format!("{d:>4}"), Style::default().fg(MUTED_GRAY)))
                .collect::<Vec<_>>(),
        ));

        // Leading blanks pad the first week so day 1 lands on its weekday.
        let mut cells: Vec<Span> = Vec::new();
        for _ in 0..picker.month.leading_blanks() {
            cells.push(Span::raw("    "));
        }
        for day in 1..=picker.month.days_in_month() {
            let date = picker.month.date(day);
            let disabled = date.is_some_and(|d| calendar::is_disabled(d, today));
            let selected = date.is_some() && date == picker.selected_date;
            let under_cursor = day == picker.cursor_day;

            let mut style = if disabled {
                Style::default().fg(SUBDUED_BORDER)
            } else if selected {
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            };
            if under_cursor && focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            cells.push(Span::styled(format!("{day:>4}"), style));

            if cells.len() == 7 {
                lines.push(Line::from(std::mem::take(&mut cells)));
            }
        }
        if !cells.is_empty() {
            lines.push(Line::from(cells));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_slots(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let picker = &state.date_picker;
        let focused = picker.focus == DateTimeFocus::Slots;
        let border = if focused { GOLD } else { SUBDUED_BORDER };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(" Select Time Slot ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Slots only open up once a date has been chosen.
        if picker.selected_date.is_none() {
            let placeholder = Paragraph::new("Pick a date first")
                .style(Style::default().fg(MUTED_GRAY))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = catalog::TIME_SLOTS
            .iter()
            .enumerate()
            .map(|(idx, slot)| {
                let under_cursor = idx == picker.slot_cursor;
                let selected = picker.selected_slot_id.as_deref() == Some(slot.id);

                let cursor = if under_cursor && focused { "▶ " } else { "  " };
                let mut spans = vec![
                    Span::styled(cursor, Style::default().fg(GOLD)),
                    Span::styled(
                        slot.label,
                        if !slot.available {
                            Style::default().fg(SUBDUED_BORDER)
                        } else if selected {
                            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(SOFT_WHITE)
                        },
                    ),
                ];
                if !slot.available {
                    spans.push(Span::styled("  Booked", Style::default().fg(DANGER_RED)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        frame.render_widget(List::new(items), chunks[0]);

        let hint = if picker.continue_enabled() {
            Paragraph::new("Enter to continue").style(Style::default().fg(SELECTION_GREEN))
        } else {
            Paragraph::new("Pick an available slot").style(Style::default().fg(MUTED_GRAY))
        };
        frame.render_widget(hint.alignment(Alignment::Center), chunks[1]);
    }
}

impl Default for DateTimePickerComponent {
    fn default() -> Self {
        Self::new()
    }
}
