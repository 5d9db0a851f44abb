//! Interactive menu state and key handling.
//!
//! The screen is a small modal machine: the main menu, the add form, and the
//! number prompt used by borrow/return. Every store call ends in a toast.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::time::Instant;

use crate::constants;
use crate::inventory::{InventoryError, InventoryStore};
use crate::state::{BicycleRecord, BicycleType, Toast, ToastType};

/// Field of the add form that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Type,
    Location,
}

/// In-progress "add bicycle" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub kind: BicycleType,
    pub location: String,
    pub focus: AddField,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            kind: BicycleType::City,
            location: String::new(),
            focus: AddField::Type,
        }
    }
}

/// Which store operation a number prompt feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAction {
    Borrow,
    Return,
}

impl IndexAction {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Borrow => constants::TITLE_BORROW_BICYCLE,
            Self::Return => constants::TITLE_RETURN_BICYCLE,
        }
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Borrow => constants::PROMPT_BORROW_INDEX,
            Self::Return => constants::PROMPT_RETURN_INDEX,
        }
    }
}

/// Number prompt for borrow/return. `0` goes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPrompt {
    pub action: IndexAction,
    pub input: String,
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Menu,
    AddForm(AddForm),
    IndexPrompt(IndexPrompt),
}

/// Interactive application state.
pub struct App {
    pub store: InventoryStore,
    pub mode: Mode,
    pub list_state: ListState,
    /// Set by "View bicycles"; highlights the selected row.
    pub list_focused: bool,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: InventoryStore) -> Self {
        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            store,
            mode: Mode::Menu,
            list_state,
            list_focused: false,
            toast: None,
            should_quit: false,
        }
    }

    /// Drop the toast once it has expired.
    pub fn on_tick(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(Instant::now()))
        {
            self.toast = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match std::mem::replace(&mut self.mode, Mode::Menu) {
            Mode::Menu => self.handle_menu_key(key),
            Mode::AddForm(form) => self.handle_add_key(form, key),
            Mode::IndexPrompt(prompt) => self.handle_prompt_key(prompt, key),
        }
    }

    /// Digits needed to type the highest bicycle number the fleet can hold.
    pub fn max_index_digits(&self) -> usize {
        self.store.capacity().max(1).ilog10() as usize + 1
    }

    /// 1-based index of the highlighted row.
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&i| i < self.store.len())
            .map(|i| i + 1)
    }

    // === Main menu ===

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') => self.view(),
            KeyCode::Char('2' | 'a') => self.open_add_form(),
            KeyCode::Char('3') => self.open_prompt(IndexAction::Borrow),
            KeyCode::Char('4') => self.open_prompt(IndexAction::Return),
            KeyCode::Char('5' | 'q') => self.should_quit = true,
            KeyCode::Char('b') => self.act_on_selection(IndexAction::Borrow),
            KeyCode::Char('r') => self.act_on_selection(IndexAction::Return),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Esc => self.list_focused = false,
            KeyCode::Char(_) => self.show_toast(constants::MSG_INVALID_OPTION, ToastType::Warning),
            _ => {}
        }
    }

    fn view(&mut self) {
        if self.store.is_empty() {
            self.show_toast(constants::MSG_EMPTY_FLEET, ToastType::Info);
            return;
        }
        self.list_focused = true;
        if self.selected_index().is_none() {
            self.list_state.select(Some(0));
        }
    }

    fn open_add_form(&mut self) {
        if self.store.is_full() {
            let err = InventoryError::CapacityExceeded {
                capacity: self.store.capacity(),
            };
            self.show_toast(err.to_string(), ToastType::Error);
            return;
        }
        self.mode = Mode::AddForm(AddForm::default());
    }

    fn open_prompt(&mut self, action: IndexAction) {
        if self.store.is_empty() {
            self.show_toast(constants::MSG_EMPTY_FLEET, ToastType::Info);
            return;
        }
        self.mode = Mode::IndexPrompt(IndexPrompt {
            action,
            input: String::new(),
        });
    }

    fn act_on_selection(&mut self, action: IndexAction) {
        match self.selected_index() {
            Some(index) => self.apply(action, index),
            None => self.show_toast(constants::MSG_NOTHING_SELECTED, ToastType::Warning),
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn move_selection(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
        self.list_focused = true;
    }

    // === Add form ===

    fn handle_add_key(&mut self, mut form: AddForm, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Enter => {
                self.submit_add(form);
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                form.focus = match form.focus {
                    AddField::Type => AddField::Location,
                    AddField::Location => AddField::Type,
                };
            }
            KeyCode::Left if form.focus == AddField::Type => form.kind = form.kind.prev(),
            KeyCode::Right if form.focus == AddField::Type => form.kind = form.kind.next(),
            KeyCode::Backspace if form.focus == AddField::Location => {
                form.location.pop();
            }
            KeyCode::Char(c)
                if form.focus == AddField::Location
                    && !c.is_whitespace()
                    && form.location.chars().count() < constants::MAX_LOCATION_LEN =>
            {
                form.location.push(c);
            }
            _ => {}
        }
        self.mode = Mode::AddForm(form);
    }

    fn submit_add(&mut self, form: AddForm) {
        match self.store.add(form.kind.as_str(), &form.location) {
            Ok(index) => {
                self.list_state.select(Some(index - 1));
                self.show_toast(format!("{}{index}", constants::MSG_ADDED), ToastType::Success);
            }
            Err(err @ InventoryError::InvalidLocation(_)) => {
                self.show_toast(err.to_string(), ToastType::Error);
                self.mode = Mode::AddForm(AddForm {
                    focus: AddField::Location,
                    ..form
                });
            }
            Err(err) => {
                if err.is_unsaved_change() {
                    self.list_state.select(Some(self.store.len() - 1));
                }
                self.show_error(&err);
            }
        }
    }

    // === Borrow / return prompt ===

    fn handle_prompt_key(&mut self, mut prompt: IndexPrompt, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Enter => {
                match prompt.input.parse::<usize>() {
                    Ok(0) => {}
                    Ok(index) => self.apply(prompt.action, index),
                    Err(_) => {
                        self.show_toast(constants::MSG_NOT_A_NUMBER, ToastType::Warning);
                        self.mode = Mode::IndexPrompt(prompt);
                    }
                }
                return;
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c)
                if c.is_ascii_digit() && prompt.input.len() < self.max_index_digits() =>
            {
                prompt.input.push(c);
            }
            _ => {}
        }
        self.mode = Mode::IndexPrompt(prompt);
    }

    fn apply(&mut self, action: IndexAction, index: usize) {
        let (result, verb) = match action {
            IndexAction::Borrow => (self.store.borrow(index), constants::MSG_BORROWED),
            IndexAction::Return => (self.store.give_back(index), constants::MSG_RETURNED),
        };
        match result {
            Ok(bike) => {
                self.list_state.select(Some(index - 1));
                self.show_toast(describe(verb, index, &bike), ToastType::Success);
            }
            Err(err) => self.show_error(&err),
        }
    }

    // === Toasts ===

    fn show_error(&mut self, err: &InventoryError) {
        let mut message = err.to_string();
        if err.is_unsaved_change() {
            message.push_str(constants::MSG_UNSAVED_SUFFIX);
        }
        self.show_toast(message, ToastType::Error);
    }

    fn show_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.toast = Some(Toast::new(message, toast_type, constants::TOAST_DURATION));
    }
}

fn describe(verb: &str, index: usize, bike: &BicycleRecord) -> String {
    format!("{verb}{index} ({} at {})", bike.kind, bike.location)
}
