// TUI application state and key handling
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gitfolio_core::{CardView, Portfolio};
use tokio::sync::mpsc::UnboundedSender;

use crate::debounce::SearchDebounce;
use crate::event::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Moving between cards
    Searching, // Typing in the search box
}

/// Something the runner has to do outside the app state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Open(String),
}

pub struct App {
    pub portfolio: Portfolio,
    pub input_mode: InputMode,
    pub selected_index: usize,
    pub owner: String,
    search_debounce: SearchDebounce,
    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(portfolio: Portfolio, owner: String, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            portfolio,
            input_mode: InputMode::Normal,
            selected_index: 0,
            owner,
            search_debounce: SearchDebounce::default(),
            events,
        }
    }

    pub fn cards(&self) -> &[CardView] {
        &self.portfolio.surface().cards
    }

    pub fn selected_card(&self) -> Option<&CardView> {
        self.cards().get(self.selected_index)
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_card(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
    }

    pub fn previous_card(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.cards().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Edit the search box and restart the debounce timer
    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        edit(self.portfolio.search_mut());
        let query = self.portfolio.surface().search.clone();
        self.search_debounce.schedule(query, self.events.clone());
    }

    pub fn load_more(&mut self) {
        if self.portfolio.surface().load_more_visible {
            self.portfolio.load_more();
        }
    }

    /// Apply a finished background job
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FilterReady(query) => {
                self.portfolio.apply_filter(&query);
                self.selected_index = 0;
            }
            AppEvent::Loaded(result) => {
                self.portfolio.finish_load(result);
                self.clamp_selection();
            }
            AppEvent::LocalPhotoReady(src) => self.portfolio.use_local_photo(src),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Searching => match key.code {
                KeyCode::Char(c) => self.edit_search(|s| s.push(c)),
                KeyCode::Backspace => self.edit_search(|s| {
                    s.pop();
                }),
                KeyCode::Esc | KeyCode::Enter => self.enter_normal_mode(),
                _ => {}
            },
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Action::Quit,
                KeyCode::Char('/') => self.enter_search_mode(),
                KeyCode::Char('m') => self.load_more(),
                KeyCode::Char('t') => {
                    self.portfolio.toggle_theme();
                }
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Right | KeyCode::Char('l') => {
                    self.next_card()
                }
                KeyCode::Char('k') | KeyCode::Up | KeyCode::Left | KeyCode::Char('h') => {
                    self.previous_card()
                }
                KeyCode::Enter => {
                    if let Some(card) = self.selected_card() {
                        return Action::Open(card.open.url.clone());
                    }
                }
                KeyCode::Char('c') => {
                    if let Some(card) = self.selected_card() {
                        return Action::Open(card.code.url.clone());
                    }
                }
                _ => {}
            },
        }

        Action::None
    }
}
