// ABOUTME: Top-level layout routing the derived screen to exactly one child component

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{
    AuthComponent, ConfirmedComponent, DateTimePickerComponent, HelpComponent,
    ServicePickerComponent, ShopPickerComponent, SummaryComponent,
};
use crate::app::{AppState, Screen};

// Shared palette
pub const ACCENT: Color = Color::Rgb(100, 149, 237);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub const DANGER_RED: Color = Color::Rgb(230, 100, 100);
pub const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct LayoutComponent {
    auth: AuthComponent,
    shop_picker: ShopPickerComponent,
    service_picker: ServicePickerComponent,
    date_picker: DateTimePickerComponent,
    summary: SummaryComponent,
    confirmed: ConfirmedComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            auth: AuthComponent::new(),
            shop_picker: ShopPickerComponent::new(),
            service_picker: ServicePickerComponent::new(),
            date_picker: DateTimePickerComponent::new(),
            summary: SummaryComponent::new(),
            confirmed: ConfirmedComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let screen = state.current_screen();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Active screen
                Constraint::Length(3), // Bottom key bar
            ])
            .split(frame.size());

        // Exactly one screen is active per frame.
        match screen {
            Screen::Auth => self.auth.render(frame, main_layout[0], state),
            Screen::Shops => self.shop_picker.render(frame, main_layout[0], state),
            Screen::Services => self.service_picker.render(frame, main_layout[0], state),
            Screen::DateTime => self.date_picker.render(frame, main_layout[0], state),
            Screen::Summary => self.summary.render(frame, main_layout[0], state),
            Screen::Confirmed => self.confirmed.render(frame, main_layout[0], state),
        }

        self.render_key_bar(frame, main_layout[1], screen, state);

        // Help overlay renders on top of everything.
        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_key_bar(&self, frame: &mut Frame, area: Rect, screen: Screen, state: &AppState) {
        let spans: Vec<Span> = match screen {
            Screen::Auth => vec![
                key("Tab"),
                desc(" next field "),
                sep(),
                key("Enter"),
                desc(" submit "),
                sep(),
                key("Ctrl+T"),
                desc(" sign-in/sign-up "),
                sep(),
                key("Ctrl+R"),
                desc(" reveal "),
                sep(),
                key("Esc"),
                desc(" quit"),
            ],
            Screen::Shops => vec![
                key("j/k"),
                desc(" move "),
                sep(),
                key("Space"),
                desc(" select "),
                sep(),
                key("Enter"),
                desc(" continue "),
                sep(),
                key("?"),
                desc(" help "),
                sep(),
                key("q"),
                desc(" quit"),
            ],
            Screen::Services => vec![
                key("j/k"),
                desc(" move "),
                sep(),
                key("Space"),
                desc(" toggle "),
                sep(),
                key("Enter"),
                desc(" continue "),
                sep(),
                key("Esc"),
                desc(" back"),
            ],
            Screen::DateTime => vec![
                key("h/j/k/l"),
                desc(" move "),
                sep(),
                key("[/]"),
                desc(" month "),
                sep(),
                key("Tab"),
                desc(" calendar/slots "),
                sep(),
                key("Space"),
                desc(" select "),
                sep(),
                key("Enter"),
                desc(" continue "),
                sep(),
                key("Esc"),
                desc(" back"),
            ],
            Screen::Summary => {
                if state.summary.is_processing() {
                    vec![desc("Processing payment...")]
                } else {
                    vec![
                        key("Enter"),
                        desc(" confirm & pay "),
                        sep(),
                        key("Esc"),
                        desc(" cancel"),
                    ]
                }
            }
            Screen::Confirmed => vec![key("Enter"), desc(" back to home "), sep(), key("q"), desc(" quit")],
        };

        let bar = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(bar, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn key(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
}

fn desc(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(MUTED_GRAY))
}

fn sep() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER))
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
