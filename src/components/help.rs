// ABOUTME: Help overlay listing key bindings for every screen

use super::layout::{centered_rect, ACCENT, GOLD, MUTED_GRAY, SOFT_WHITE};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 75, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(" Help ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines = vec![
            heading("Global"),
            binding("Ctrl+C", "quit from anywhere"),
            binding("?", "toggle this help"),
            Line::default(),
            heading("Sign in / Sign up"),
            binding("Tab / Shift+Tab", "next / previous field"),
            binding("Ctrl+T", "switch sign-in and sign-up"),
            binding("Ctrl+R", "reveal or mask passwords"),
            binding("Enter", "submit"),
            Line::default(),
            heading("Pickers"),
            binding("j/k or arrows", "move the cursor"),
            binding("Space", "select or toggle"),
            binding("Enter", "continue"),
            binding("Esc", "back one step"),
            Line::default(),
            heading("Date & Time"),
            binding("h/l", "previous / next day"),
            binding("[ / ]", "previous / next month"),
            binding("Tab", "switch calendar and slots"),
            Line::default(),
            heading("Summary"),
            binding("Enter", "confirm and pay"),
            binding("Esc", "cancel the booking"),
        ];

        let body = Paragraph::new(lines);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(10)])
            .split(inner);
        frame.render_widget(body, chunks[1]);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(keys: &'a str, what: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{keys:<18}"), Style::default().fg(SOFT_WHITE)),
        Span::styled(what, Style::default().fg(MUTED_GRAY)),
    ])
}
