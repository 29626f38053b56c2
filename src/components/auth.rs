// ABOUTME: Credential form component with sign-in and sign-up variants

use super::layout::{centered_rect, ACCENT, GOLD, MUTED_GRAY, SOFT_WHITE};
use crate::app::state::{AppState, AuthMode};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub struct AuthComponent;

impl AuthComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let form = &state.auth_form;
        let card = centered_rect(50, 70, area);
        frame.render_widget(Clear, card);

        let title = match form.mode {
            AuthMode::SignIn => " Welcome back ",
            AuthMode::SignUp => " Create your account ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        // One labeled input row (label + bordered field) per form field,
        // then a footer hint.
        let mut constraints: Vec<Constraint> = Vec::new();
        for _ in form.fields() {
            constraints.push(Constraint::Length(1)); // label
            constraints.push(Constraint::Length(3)); // input box
        }
        constraints.push(Constraint::Min(1)); // footer
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        for (i, field) in form.fields().iter().enumerate() {
            let label = Paragraph::new(field.label()).style(Style::default().fg(MUTED_GRAY));
            frame.render_widget(label, rows[i * 2]);

            let focused = form.focused_field == *field;
            let raw = form.buffer(*field);
            let shown = if field.is_secret() && !form.reveal_password {
                "•".repeat(raw.chars().count())
            } else {
                raw.to_string()
            };
            let text = if focused { format!("{shown}│") } else { shown };

            let border = if focused {
                Style::default().fg(GOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            let input = Paragraph::new(text).style(Style::default().fg(SOFT_WHITE)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
            frame.render_widget(input, rows[i * 2 + 1]);
        }

        let footer_text = match form.mode {
            AuthMode::SignIn => "No account yet? Ctrl+T to sign up",
            AuthMode::SignUp => "Already have an account? Ctrl+T to sign in",
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(MUTED_GRAY))
            .alignment(Alignment::Center);
        if let Some(last) = rows.last() {
            frame.render_widget(footer, *last);
        }
    }
}

impl Default for AuthComponent {
    fn default() -> Self {
        Self::new()
    }
}
