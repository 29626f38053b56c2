// ABOUTME: Application state and screen derivation for the booking wizard TUI

use crate::calendar::{self, MonthGrid};
use crate::catalog;
use crate::config::AppConfig;
use chrono::{Datelike, Local, NaiveDate};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Which single screen the flow controller renders for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Shops,
    Services,
    DateTime,
    Summary,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Transient editing state of the credential form.
#[derive(Debug, Clone)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub focused_field: AuthField,
    pub reveal_password: bool,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self {
            mode: AuthMode::SignIn,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            focused_field: AuthField::Email,
            reveal_password: false,
        }
    }
}

impl AuthFormState {
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password],
            AuthMode::SignUp => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    fn focused_index(&self) -> usize {
        self.fields().iter().position(|f| *f == self.focused_field).unwrap_or(0)
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        self.focused_field = fields[(self.focused_index() + 1) % fields.len()];
    }

    pub fn focus_previous(&mut self) {
        let fields = self.fields();
        let idx = self.focused_index();
        self.focused_field = fields[(idx + fields.len() - 1) % fields.len()];
    }

    pub fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focused_field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn buffer(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Switch between sign-in and sign-up, clearing all entered values.
    pub fn switch_mode(&mut self) {
        let mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        *self = Self::default();
        self.mode = mode;
        self.focused_field = match mode {
            AuthMode::SignIn => AuthField::Email,
            AuthMode::SignUp => AuthField::Name,
        };
    }
}

/// Transient state of the shop picker: a highlight cursor and the marked shop.
#[derive(Debug, Clone, Default)]
pub struct ShopPickerState {
    pub cursor: usize,
    pub marked: Option<String>,
}

impl ShopPickerState {
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < catalog::SHOPS.len() {
            self.cursor += 1;
        }
    }

    /// Mark the highlighted shop (single selection).
    pub fn mark_highlighted(&mut self) {
        if let Some(shop) = catalog::SHOPS.get(self.cursor) {
            self.marked = Some(shop.id.to_string());
        }
    }

    pub fn continue_enabled(&self) -> bool {
        self.marked.is_some()
    }
}

/// Transient state of the service picker: cursor plus toggled ids in toggle order.
#[derive(Debug, Clone, Default)]
pub struct ServicePickerState {
    pub cursor: usize,
    pub selected: Vec<String>,
}

impl ServicePickerState {
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < catalog::SERVICES.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle_highlighted(&mut self) {
        let Some(service) = catalog::SERVICES.get(self.cursor) else {
            return;
        };
        if let Some(pos) = self.selected.iter().position(|id| id == service.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(service.id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn total_price(&self) -> u32 {
        catalog::total_price(&self.selected)
    }

    /// Count label with singular/plural wording.
    pub fn count_label(&self) -> String {
        let count = self.selected.len();
        let noun = if count == 1 { "service" } else { "services" };
        format!("{count} {noun} selected")
    }

    /// The comma-joined id string handed to the rest of the wizard.
    pub fn joined(&self) -> String {
        self.selected.join(",")
    }

    pub fn continue_enabled(&self) -> bool {
        !self.selected.is_empty()
    }
}

/// Which half of the date/time picker has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeFocus {
    Calendar,
    Slots,
}

/// Transient state of the date/time picker.
#[derive(Debug, Clone)]
pub struct DateTimePickerState {
    pub month: MonthGrid,
    pub cursor_day: u32,
    pub selected_date: Option<NaiveDate>,
    pub selected_slot_id: Option<String>,
    pub focus: DateTimeFocus,
    pub slot_cursor: usize,
}

impl Default for DateTimePickerState {
    fn default() -> Self {
        Self::starting_at(Local::now().date_naive())
    }
}

impl DateTimePickerState {
    /// Picker opened on the month containing `today`, cursor on today.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            month: MonthGrid::containing(today),
            cursor_day: today.day(),
            selected_date: None,
            selected_slot_id: None,
            focus: DateTimeFocus::Calendar,
            slot_cursor: 0,
        }
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev_month();
        self.clamp_cursor();
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next_month();
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor_day = self.cursor_day.clamp(1, self.month.days_in_month());
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_day > 1 {
            self.cursor_day -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_day < self.month.days_in_month() {
            self.cursor_day += 1;
        }
    }

    pub fn cursor_up_week(&mut self) {
        self.cursor_day = self.cursor_day.saturating_sub(7).max(1);
    }

    pub fn cursor_down_week(&mut self) {
        self.cursor_day = (self.cursor_day + 7).min(self.month.days_in_month());
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DateTimeFocus::Calendar => DateTimeFocus::Slots,
            DateTimeFocus::Slots => DateTimeFocus::Calendar,
        };
    }

    pub fn slot_cursor_up(&mut self) {
        self.slot_cursor = self.slot_cursor.saturating_sub(1);
    }

    pub fn slot_cursor_down(&mut self) {
        if self.slot_cursor + 1 < catalog::TIME_SLOTS.len() {
            self.slot_cursor += 1;
        }
    }

    /// Select the date under the cursor unless it is disabled.
    /// Changing the date always clears a previously chosen slot.
    pub fn select_cursor_date(&mut self, today: NaiveDate) {
        let Some(date) = self.month.date(self.cursor_day) else {
            return;
        };
        if calendar::is_disabled(date, today) {
            return;
        }
        self.selected_date = Some(date);
        self.selected_slot_id = None;
    }

    /// Select the slot under the slot cursor; unavailable slots are ignored,
    /// and a slot can only be chosen once a date is set.
    pub fn select_cursor_slot(&mut self) {
        if self.selected_date.is_none() {
            return;
        }
        let Some(slot) = catalog::TIME_SLOTS.get(self.slot_cursor) else {
            return;
        };
        if slot.available {
            self.selected_slot_id = Some(slot.id.to_string());
        }
    }

    pub fn selected_slot_label(&self) -> Option<&'static str> {
        self.selected_slot_id
            .as_deref()
            .and_then(catalog::slot_by_id)
            .map(|slot| slot.label)
    }

    pub fn continue_enabled(&self) -> bool {
        self.selected_date.is_some() && self.selected_slot_label().is_some()
    }
}

/// Transient state of the summary screen.
#[derive(Debug, Clone, Default)]
pub struct SummaryState {
    /// When set, the simulated payment is in flight until this deadline.
    pub processing_deadline: Option<Instant>,
}

impl SummaryState {
    pub fn is_processing(&self) -> bool {
        self.processing_deadline.is_some()
    }
}

/// All wizard state, owned by the app for the lifetime of one booking attempt.
///
/// The wizard fields are only meaningful in the order
/// shop -> services -> date+slot -> confirmed. The back/cancel/reset methods
/// are the only mutators that clear, and they always clear a contiguous
/// suffix of that order.
#[derive(Debug, Clone)]
pub struct AppState {
    pub authenticated: bool,
    pub selected_shop: Option<String>,
    /// Comma-joined service ids as emitted by the service picker;
    /// the summary splits this on ','.
    pub selected_services: Option<String>,
    pub selected_date: Option<NaiveDate>,
    /// Chosen slot label, e.g. "10:00 AM".
    pub selected_slot: Option<String>,
    pub booking_confirmed: bool,
    pub booking_reference: Option<Uuid>,

    pub should_quit: bool,
    pub help_visible: bool,

    pub auth_form: AuthFormState,
    pub shop_picker: ShopPickerState,
    pub service_picker: ServicePickerState,
    pub date_picker: DateTimePickerState,
    pub summary: SummaryState,

    pub app_config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        let app_config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });
        Self::with_config(app_config)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh wizard run keeping the given configuration.
    pub fn with_config(app_config: AppConfig) -> Self {
        Self {
            authenticated: false,
            selected_shop: None,
            selected_services: None,
            selected_date: None,
            selected_slot: None,
            booking_confirmed: false,
            booking_reference: None,
            should_quit: false,
            help_visible: false,
            auth_form: AuthFormState::default(),
            shop_picker: ShopPickerState::default(),
            service_picker: ServicePickerState::default(),
            date_picker: DateTimePickerState::default(),
            summary: SummaryState::default(),
            app_config,
        }
    }

    /// Derive the single screen to render, in fixed priority order.
    pub fn current_screen(&self) -> Screen {
        if self.booking_confirmed {
            return Screen::Confirmed;
        }
        if self.authenticated
            && self.selected_shop.is_some()
            && self.selected_services.is_some()
            && self.selected_date.is_some()
            && self.selected_slot.is_some()
        {
            return Screen::Summary;
        }
        if self.authenticated && self.selected_shop.is_some() && self.selected_services.is_some() {
            return Screen::DateTime;
        }
        if self.authenticated && self.selected_shop.is_some() {
            return Screen::Services;
        }
        if self.authenticated {
            return Screen::Shops;
        }
        Screen::Auth
    }

    /// Service ids split back out of the comma-joined selection.
    pub fn service_ids(&self) -> Vec<&str> {
        self.selected_services
            .as_deref()
            .map(|joined| joined.split(',').filter(|id| !id.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Submit the credential form. Sign-up requires matching passwords;
    /// everything else succeeds unconditionally (no backend).
    pub fn submit_credentials(&mut self) {
        if self.auth_form.mode == AuthMode::SignUp
            && self.auth_form.password != self.auth_form.confirm_password
        {
            // Diagnostic only; the submit aborts with no visible error surface.
            warn!("Passwords do not match; staying on sign-up form");
            return;
        }
        info!(email = %self.auth_form.email, "Authenticated (mock)");
        self.authenticated = true;
    }

    pub fn choose_shop(&mut self) {
        if let Some(id) = self.shop_picker.marked.clone() {
            info!(shop = %id, "Shop selected");
            self.selected_shop = Some(id);
        }
    }

    pub fn choose_services(&mut self) {
        if !self.service_picker.continue_enabled() {
            return;
        }
        let joined = self.service_picker.joined();
        info!(services = %joined, "Services selected");
        self.selected_services = Some(joined);
    }

    pub fn choose_date_and_slot(&mut self) {
        let Some(date) = self.date_picker.selected_date else {
            return;
        };
        let Some(label) = self.date_picker.selected_slot_label() else {
            return;
        };
        info!(%date, slot = label, "Date and time slot selected");
        self.selected_date = Some(date);
        self.selected_slot = Some(label.to_string());
    }

    /// Back from the service picker: clear the shop choice and everything after.
    pub fn back_to_shops(&mut self) {
        self.selected_shop = None;
        self.selected_services = None;
        self.selected_date = None;
        self.selected_slot = None;
        self.service_picker = ServicePickerState::default();
    }

    /// Back from the date/time picker: clear services and everything after.
    pub fn back_to_services(&mut self) {
        self.selected_services = None;
        self.selected_date = None;
        self.selected_slot = None;
        self.date_picker = DateTimePickerState::default();
    }

    /// Cancel from the summary: clear every selection, back to the shop picker.
    pub fn cancel_booking(&mut self) {
        info!("Booking cancelled from summary");
        self.selected_shop = None;
        self.selected_services = None;
        self.selected_date = None;
        self.selected_slot = None;
        self.shop_picker = ShopPickerState::default();
        self.service_picker = ServicePickerState::default();
        self.date_picker = DateTimePickerState::default();
        self.summary = SummaryState::default();
    }

    /// Start the simulated payment. Both summary actions stay disabled until
    /// the deadline passes; the wait cannot be cancelled and always succeeds.
    pub fn begin_processing(&mut self, now: Instant) {
        if self.summary.is_processing() {
            return;
        }
        let delay = Duration::from_millis(self.app_config.booking.processing_delay_ms);
        info!(delay_ms = self.app_config.booking.processing_delay_ms, "Payment processing started");
        self.summary.processing_deadline = Some(now + delay);
    }

    /// Advance timers. Completes the processing wait once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.summary.processing_deadline {
            if now >= deadline {
                self.summary.processing_deadline = None;
                self.booking_confirmed = true;
                let reference = Uuid::new_v4();
                self.booking_reference = Some(reference);
                info!(%reference, "Booking confirmed");
            }
        }
    }

    /// Reset control on the confirmed screen: back to the initial
    /// unauthenticated screen with all selections cleared.
    pub fn reset_to_start(&mut self) {
        info!("Resetting wizard to initial screen");
        *self = Self::with_config(self.app_config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn authenticated_state() -> AppState {
        let mut state = AppState::with_config(AppConfig::default());
        state.authenticated = true;
        state
    }

    #[test]
    fn screen_derivation_follows_priority_order() {
        let mut state = AppState::with_config(AppConfig::default());
        assert_eq!(state.current_screen(), Screen::Auth);

        state.authenticated = true;
        assert_eq!(state.current_screen(), Screen::Shops);

        state.selected_shop = Some("2".into());
        assert_eq!(state.current_screen(), Screen::Services);

        state.selected_services = Some("1,2".into());
        assert_eq!(state.current_screen(), Screen::DateTime);

        state.selected_date = Some(ymd(2026, 9, 15));
        // A date without a slot is not enough for the summary.
        assert_eq!(state.current_screen(), Screen::DateTime);

        state.selected_slot = Some("10:00 AM".into());
        assert_eq!(state.current_screen(), Screen::Summary);

        state.booking_confirmed = true;
        assert_eq!(state.current_screen(), Screen::Confirmed);
    }

    #[test]
    fn confirmed_outranks_every_other_predicate() {
        let mut state = AppState::with_config(AppConfig::default());
        state.booking_confirmed = true;
        // Even with nothing else set, confirmed wins.
        assert_eq!(state.current_screen(), Screen::Confirmed);
    }

    #[test]
    fn back_from_services_clears_shop() {
        let mut state = authenticated_state();
        state.selected_shop = Some("1".into());
        state.back_to_shops();
        assert_eq!(state.selected_shop, None);
        assert_eq!(state.current_screen(), Screen::Shops);
    }

    #[test]
    fn back_from_date_time_clears_service_suffix() {
        let mut state = authenticated_state();
        state.selected_shop = Some("1".into());
        state.selected_services = Some("1,3".into());
        state.date_picker.selected_date = Some(ymd(2026, 9, 15));
        state.back_to_services();
        assert_eq!(state.selected_shop.as_deref(), Some("1"));
        assert_eq!(state.selected_services, None);
        assert_eq!(state.selected_date, None);
        assert_eq!(state.selected_slot, None);
        assert_eq!(state.current_screen(), Screen::Services);
    }

    #[test]
    fn cancel_from_summary_clears_all_selections() {
        let mut state = authenticated_state();
        state.selected_shop = Some("2".into());
        state.selected_services = Some("1,2".into());
        state.selected_date = Some(ymd(2026, 9, 15));
        state.selected_slot = Some("10:00 AM".into());
        state.cancel_booking();
        assert!(state.authenticated);
        assert_eq!(state.selected_shop, None);
        assert_eq!(state.selected_services, None);
        assert_eq!(state.selected_date, None);
        assert_eq!(state.selected_slot, None);
        assert_eq!(state.current_screen(), Screen::Shops);
    }

    #[test]
    fn signup_password_mismatch_blocks_authentication() {
        let mut state = AppState::with_config(AppConfig::default());
        state.auth_form.switch_mode();
        assert_eq!(state.auth_form.mode, AuthMode::SignUp);
        state.auth_form.password = "hunter2".into();
        state.auth_form.confirm_password = "hunter3".into();
        state.submit_credentials();
        assert!(!state.authenticated);
        assert_eq!(state.current_screen(), Screen::Auth);
    }

    #[test]
    fn signup_with_matching_passwords_authenticates() {
        let mut state = AppState::with_config(AppConfig::default());
        state.auth_form.switch_mode();
        state.auth_form.password = "hunter2".into();
        state.auth_form.confirm_password = "hunter2".into();
        state.submit_credentials();
        assert!(state.authenticated);
    }

    #[test]
    fn signin_succeeds_unconditionally() {
        let mut state = AppState::with_config(AppConfig::default());
        state.auth_form.email = "you@example.com".into();
        state.submit_credentials();
        assert!(state.authenticated);
    }

    #[test]
    fn selecting_new_date_clears_chosen_slot() {
        let today = ymd(2026, 8, 30);
        let mut picker = DateTimePickerState::starting_at(today);
        picker.cursor_day = 31;
        picker.select_cursor_date(today);
        picker.slot_cursor = 1; // "10:00 AM", available
        picker.select_cursor_slot();
        assert!(picker.selected_slot_id.is_some());

        picker.cursor_day = 30;
        picker.select_cursor_date(today);
        assert_eq!(picker.selected_slot_id, None);
    }

    #[test]
    fn past_dates_cannot_be_selected() {
        let today = ymd(2026, 8, 30);
        let mut picker = DateTimePickerState::starting_at(today);
        picker.cursor_day = 29;
        picker.select_cursor_date(today);
        assert_eq!(picker.selected_date, None);
    }

    #[test]
    fn unavailable_slot_cannot_be_selected() {
        let today = ymd(2026, 8, 30);
        let mut picker = DateTimePickerState::starting_at(today);
        picker.select_cursor_date(today);
        picker.slot_cursor = 2; // "11:00 AM" is booked
        picker.select_cursor_slot();
        assert_eq!(picker.selected_slot_id, None);
    }

    #[test]
    fn slot_requires_date_first() {
        let mut picker = DateTimePickerState::starting_at(ymd(2026, 8, 30));
        picker.slot_cursor = 0;
        picker.select_cursor_slot();
        assert_eq!(picker.selected_slot_id, None);
        assert!(!picker.continue_enabled());
    }

    #[test]
    fn continue_gating_matches_missing_selections() {
        let shop = ShopPickerState::default();
        assert!(!shop.continue_enabled());
        let mut shop = shop;
        shop.mark_highlighted();
        assert!(shop.continue_enabled());

        let mut services = ServicePickerState::default();
        assert!(!services.continue_enabled());
        services.toggle_highlighted();
        assert!(services.continue_enabled());
        services.toggle_highlighted();
        assert!(!services.continue_enabled());

        let today = ymd(2026, 8, 30);
        let mut picker = DateTimePickerState::starting_at(today);
        assert!(!picker.continue_enabled());
        picker.select_cursor_date(today);
        assert!(!picker.continue_enabled());
        picker.slot_cursor = 0;
        picker.select_cursor_slot();
        assert!(picker.continue_enabled());
    }

    #[test]
    fn service_picker_count_label_wording() {
        let mut services = ServicePickerState::default();
        services.toggle_highlighted();
        assert_eq!(services.count_label(), "1 service selected");
        services.cursor_down();
        services.toggle_highlighted();
        assert_eq!(services.count_label(), "2 services selected");
    }

    #[test]
    fn service_ids_round_trip_through_joined_string() {
        let mut state = authenticated_state();
        state.selected_services = Some("1,3".into());
        assert_eq!(state.service_ids(), vec!["1", "3"]);
        state.selected_services = None;
        assert!(state.service_ids().is_empty());
    }

    #[test]
    fn processing_completes_only_after_deadline() {
        let mut state = authenticated_state();
        let start = Instant::now();
        state.begin_processing(start);
        assert!(state.summary.is_processing());

        state.tick(start + Duration::from_millis(100));
        assert!(!state.booking_confirmed);
        assert!(state.summary.is_processing());

        state.tick(start + Duration::from_millis(1500));
        assert!(state.booking_confirmed);
        assert!(!state.summary.is_processing());
        assert!(state.booking_reference.is_some());
    }

    #[test]
    fn begin_processing_is_idempotent_while_in_flight() {
        let mut state = authenticated_state();
        let start = Instant::now();
        state.begin_processing(start);
        let deadline = state.summary.processing_deadline;
        state.begin_processing(start + Duration::from_millis(500));
        assert_eq!(state.summary.processing_deadline, deadline);
    }

    #[test]
    fn reset_returns_to_unauthenticated_start() {
        let mut state = authenticated_state();
        state.selected_shop = Some("2".into());
        state.selected_services = Some("1,2".into());
        state.selected_date = Some(ymd(2026, 9, 15));
        state.selected_slot = Some("10:00 AM".into());
        state.booking_confirmed = true;
        state.booking_reference = Some(Uuid::new_v4());

        state.reset_to_start();
        assert!(!state.authenticated);
        assert_eq!(state.selected_shop, None);
        assert_eq!(state.selected_services, None);
        assert_eq!(state.selected_date, None);
        assert_eq!(state.selected_slot, None);
        assert!(!state.booking_confirmed);
        assert_eq!(state.booking_reference, None);
        assert_eq!(state.current_screen(), Screen::Auth);
    }

    #[test]
    fn auth_form_focus_cycles_through_mode_fields() {
        let mut form = AuthFormState::default();
        assert_eq!(form.focused_field, AuthField::Email);
        form.focus_next();
        assert_eq!(form.focused_field, AuthField::Password);
        form.focus_next();
        assert_eq!(form.focused_field, AuthField::Email);
        form.focus_previous();
        assert_eq!(form.focused_field, AuthField::Password);

        form.switch_mode();
        assert_eq!(form.focused_field, AuthField::Name);
        assert_eq!(form.fields().len(), 4);
    }
}
