// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct wizard actions

use bookstand::app::state::AuthMode;
use bookstand::app::{AppEvent, AppState, EventHandler, Screen};
use bookstand::config::AppConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use std::time::Instant;

const fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn fresh_state() -> AppState {
    AppState::with_config(AppConfig::default())
}

fn authenticated_state() -> AppState {
    let mut state = fresh_state();
    state.authenticated = true;
    state
}

#[test]
fn ctrl_c_quits_on_every_screen() {
    let mut state = fresh_state();
    let ctrl_c = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert_eq!(EventHandler::handle_key_event(ctrl_c, &state), Some(AppEvent::Quit));

    state.authenticated = true;
    assert_eq!(EventHandler::handle_key_event(ctrl_c, &state), Some(AppEvent::Quit));

    state.booking_confirmed = true;
    assert_eq!(EventHandler::handle_key_event(ctrl_c, &state), Some(AppEvent::Quit));
}

#[test]
fn auth_screen_captures_printable_characters() {
    let mut state = fresh_state();
    assert_eq!(state.current_screen(), Screen::Auth);

    // 'q' types into the focused field instead of quitting.
    let event = EventHandler::handle_key_event(key(KeyCode::Char('q')), &state);
    assert_eq!(event, Some(AppEvent::AuthInputChar('q')));

    EventHandler::process_event(AppEvent::AuthInputChar('q'), &mut state);
    assert_eq!(state.auth_form.email, "q");
}

#[test]
fn auth_mode_switch_clears_entered_values() {
    let mut state = fresh_state();
    EventHandler::process_event(AppEvent::AuthInputChar('a'), &mut state);
    assert_eq!(state.auth_form.email, "a");

    let event = EventHandler::handle_key_event(
        key_with(KeyCode::Char('t'), KeyModifiers::CONTROL),
        &state,
    );
    assert_eq!(event, Some(AppEvent::AuthSwitchMode));

    EventHandler::process_event(AppEvent::AuthSwitchMode, &mut state);
    assert_eq!(state.auth_form.mode, AuthMode::SignUp);
    assert_eq!(state.auth_form.email, "");
}

#[test]
fn signup_mismatch_stays_on_auth_screen() {
    let mut state = fresh_state();
    EventHandler::process_event(AppEvent::AuthSwitchMode, &mut state);
    state.auth_form.password = "hunter2".into();
    state.auth_form.confirm_password = "hunter3".into();

    EventHandler::process_event(AppEvent::AuthSubmit, &mut state);
    assert_eq!(state.current_screen(), Screen::Auth);
    assert!(!state.authenticated);
}

#[test]
fn shop_screen_maps_vim_keys_and_selection() {
    let state = authenticated_state();
    assert_eq!(state.current_screen(), Screen::Shops);

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('j')), &state),
        Some(AppEvent::CursorDown)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('k')), &state),
        Some(AppEvent::CursorUp)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char(' ')), &state),
        Some(AppEvent::ToggleSelection)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Enter), &state),
        Some(AppEvent::Continue)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
        Some(AppEvent::Quit)
    );
}

#[test]
fn continue_without_marked_shop_is_a_no_op() {
    let mut state = authenticated_state();
    EventHandler::process_event(AppEvent::Continue, &mut state);
    assert_eq!(state.selected_shop, None);
    assert_eq!(state.current_screen(), Screen::Shops);
}

#[test]
fn escape_on_services_goes_back_and_clears_shop() {
    let mut state = authenticated_state();
    state.selected_shop = Some("1".into());
    assert_eq!(state.current_screen(), Screen::Services);

    let event = EventHandler::handle_key_event(key(KeyCode::Esc), &state);
    assert_eq!(event, Some(AppEvent::GoBack));

    EventHandler::process_event(AppEvent::GoBack, &mut state);
    assert_eq!(state.selected_shop, None);
    assert_eq!(state.current_screen(), Screen::Shops);
}

#[test]
fn escape_on_date_time_clears_service_selection() {
    let mut state = authenticated_state();
    state.selected_shop = Some("1".into());
    state.selected_services = Some("1,2".into());
    assert_eq!(state.current_screen(), Screen::DateTime);

    EventHandler::process_event(AppEvent::GoBack, &mut state);
    assert_eq!(state.selected_shop.as_deref(), Some("1"));
    assert_eq!(state.selected_services, None);
    assert_eq!(state.current_screen(), Screen::Services);
}

#[test]
fn date_time_screen_maps_month_and_focus_keys() {
    let mut state = authenticated_state();
    state.selected_shop = Some("1".into());
    state.selected_services = Some("1".into());

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('[')), &state),
        Some(AppEvent::PrevMonth)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char(']')), &state),
        Some(AppEvent::NextMonth)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Tab), &state),
        Some(AppEvent::SwitchFocus)
    );
    // h/l navigate days while the calendar half is focused.
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('h')), &state),
        Some(AppEvent::CursorLeft)
    );

    EventHandler::process_event(AppEvent::SwitchFocus, &mut state);
    // With the slot list focused, h has no meaning.
    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Char('h')), &state), None);
}

#[test]
fn help_overlay_swallows_other_keys() {
    let mut state = authenticated_state();
    EventHandler::process_event(AppEvent::ToggleHelp, &mut state);
    assert!(state.help_visible);

    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Char('j')), &state), None);
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &state),
        Some(AppEvent::ToggleHelp)
    );

    EventHandler::process_event(AppEvent::ToggleHelp, &mut state);
    assert!(!state.help_visible);
}

#[test]
fn processing_swallows_every_key_except_ctrl_c() {
    let mut state = authenticated_state();
    state.selected_shop = Some("1".into());
    state.selected_services = Some("1".into());
    state.begin_processing(Instant::now());

    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Enter), &state), None);
    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Esc), &state), None);
    assert_eq!(
        EventHandler::handle_key_event(
            key_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &state
        ),
        Some(AppEvent::Quit)
    );
}

#[test]
fn confirmed_screen_maps_reset_and_quit() {
    let mut state = authenticated_state();
    state.booking_confirmed = true;

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Enter), &state),
        Some(AppEvent::ResetToHome)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
        Some(AppEvent::Quit)
    );
}
