// ABOUTME: Event handling system for keyboard input and wizard actions

use crate::app::state::{AppState, DateTimeFocus, Screen};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Credential form
    AuthInputChar(char),
    AuthBackspace,
    AuthFocusNext,
    AuthFocusPrevious,
    AuthToggleReveal,
    AuthSwitchMode,
    AuthSubmit,
    // Shared list navigation
    CursorUp,
    CursorDown,
    // Marks a shop, toggles a service, or picks a date/slot depending on screen
    ToggleSelection,
    // Advances the wizard when the current picker's selection is complete
    Continue,
    GoBack,
    // Date/time picker
    CursorLeft,
    CursorRight,
    PrevMonth,
    NextMonth,
    SwitchFocus,
    // Summary
    ConfirmBooking,
    CancelBooking,
    // Confirmed screen
    ResetToHome,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key event into an app event for the current screen.
    /// Returns None for keys with no meaning right now.
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits.
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // While the simulated payment is in flight both summary actions are
        // disabled and there is nothing else to interact with.
        if state.summary.is_processing() {
            return None;
        }

        // Help overlay swallows everything except its own dismissal.
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match state.current_screen() {
            Screen::Auth => Self::handle_auth_keys(key_event),
            Screen::Shops => Self::handle_shop_keys(key_event),
            Screen::Services => Self::handle_service_keys(key_event),
            Screen::DateTime => Self::handle_date_time_keys(key_event, state),
            Screen::Summary => Self::handle_summary_keys(key_event),
            Screen::Confirmed => Self::handle_confirmed_keys(key_event),
        }
    }

    // The credential form captures printable characters, so global shortcuts
    // live on control combinations here.
    fn handle_auth_keys(key_event: KeyEvent) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('t') => Some(AppEvent::AuthSwitchMode),
                KeyCode::Char('r') => Some(AppEvent::AuthToggleReveal),
                KeyCode::Char('h') => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::AuthFocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::AuthFocusPrevious),
            KeyCode::Enter => Some(AppEvent::AuthSubmit),
            KeyCode::Backspace => Some(AppEvent::AuthBackspace),
            KeyCode::Char(c) => Some(AppEvent::AuthInputChar(c)),
            _ => None,
        }
    }

    fn handle_shop_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::CursorDown),
            KeyCode::Char(' ') => Some(AppEvent::ToggleSelection),
            KeyCode::Enter => Some(AppEvent::Continue),
            _ => None,
        }
    }

    fn handle_service_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Esc => Some(AppEvent::GoBack),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::CursorDown),
            KeyCode::Char(' ') => Some(AppEvent::ToggleSelection),
            KeyCode::Enter => Some(AppEvent::Continue),
            _ => None,
        }
    }

    fn handle_date_time_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let on_calendar = state.date_picker.focus == DateTimeFocus::Calendar;
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Esc => Some(AppEvent::GoBack),
            KeyCode::Tab | KeyCode::BackTab => Some(AppEvent::SwitchFocus),
            KeyCode::Char('[') | KeyCode::PageUp => Some(AppEvent::PrevMonth),
            KeyCode::Char(']') | KeyCode::PageDown => Some(AppEvent::NextMonth),
            KeyCode::Left | KeyCode::Char('h') if on_calendar => Some(AppEvent::CursorLeft),
            KeyCode::Right | KeyCode::Char('l') if on_calendar => Some(AppEvent::CursorRight),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::CursorDown),
            KeyCode::Char(' ') => Some(AppEvent::ToggleSelection),
            KeyCode::Enter => Some(AppEvent::Continue),
            _ => None,
        }
    }

    fn handle_summary_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Enter => Some(AppEvent::ConfirmBooking),
            KeyCode::Esc => Some(AppEvent::CancelBooking),
            _ => None,
        }
    }

    fn handle_confirmed_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Enter | KeyCode::Char('h') => Some(AppEvent::ResetToHome),
            _ => None,
        }
    }

    /// Apply an app event to the state.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, screen = ?state.current_screen(), "Processing event");
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,

            AppEvent::AuthInputChar(c) => state.auth_form.focused_buffer_mut().push(c),
            AppEvent::AuthBackspace => {
                state.auth_form.focused_buffer_mut().pop();
            }
            AppEvent::AuthFocusNext => state.auth_form.focus_next(),
            AppEvent::AuthFocusPrevious => state.auth_form.focus_previous(),
            AppEvent::AuthToggleReveal => {
                state.auth_form.reveal_password = !state.auth_form.reveal_password;
            }
            AppEvent::AuthSwitchMode => state.auth_form.switch_mode(),
            AppEvent::AuthSubmit => state.submit_credentials(),

            AppEvent::CursorUp => Self::cursor_up(state),
            AppEvent::CursorDown => Self::cursor_down(state),
            AppEvent::ToggleSelection => Self::toggle_selection(state),
            AppEvent::Continue => Self::advance(state),
            AppEvent::GoBack => Self::go_back(state),

            AppEvent::CursorLeft => state.date_picker.cursor_left(),
            AppEvent::CursorRight => state.date_picker.cursor_right(),
            AppEvent::PrevMonth => state.date_picker.prev_month(),
            AppEvent::NextMonth => state.date_picker.next_month(),
            AppEvent::SwitchFocus => state.date_picker.toggle_focus(),

            AppEvent::ConfirmBooking => state.begin_processing(Instant::now()),
            AppEvent::CancelBooking => state.cancel_booking(),
            AppEvent::ResetToHome => state.reset_to_start(),
        }
    }

    fn cursor_up(state: &mut AppState) {
        match state.current_screen() {
            Screen::Shops => state.shop_picker.cursor_up(),
            Screen::Services => state.service_picker.cursor_up(),
            Screen::DateTime => match state.date_picker.focus {
                DateTimeFocus::Calendar => state.date_picker.cursor_up_week(),
                DateTimeFocus::Slots => state.date_picker.slot_cursor_up(),
            },
            _ => {}
        }
    }

    fn cursor_down(state: &mut AppState) {
        match state.current_screen() {
            Screen::Shops => state.shop_picker.cursor_down(),
            Screen::Services => state.service_picker.cursor_down(),
            Screen::DateTime => match state.date_picker.focus {
                DateTimeFocus::Calendar => state.date_picker.cursor_down_week(),
                DateTimeFocus::Slots => state.date_picker.slot_cursor_down(),
            },
            _ => {}
        }
    }

    fn toggle_selection(state: &mut AppState) {
        match state.current_screen() {
            Screen::Shops => state.shop_picker.mark_highlighted(),
            Screen::Services => state.service_picker.toggle_highlighted(),
            Screen::DateTime => match state.date_picker.focus {
                DateTimeFocus::Calendar => {
                    state.date_picker.select_cursor_date(Local::now().date_naive());
                }
                DateTimeFocus::Slots => state.date_picker.select_cursor_slot(),
            },
            _ => {}
        }
    }

    // Continue is a no-op while the required selections are absent; the
    // choose_* methods carry the same guards, so gating lives in one place.
    fn advance(state: &mut AppState) {
        match state.current_screen() {
            Screen::Shops => state.choose_shop(),
            Screen::Services => state.choose_services(),
            Screen::DateTime => state.choose_date_and_slot(),
            _ => {}
        }
    }

    fn go_back(state: &mut AppState) {
        match state.current_screen() {
            Screen::Services => state.back_to_shops(),
            Screen::DateTime => state.back_to_services(),
            _ => {}
        }
    }
}
