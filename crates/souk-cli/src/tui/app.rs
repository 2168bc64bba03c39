//! Browser state and key handling. Rendering lives in `ui`.

use std::time::{Duration, Instant};

use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use souk_core::install;
use souk_core::registry::{Registry, RegistryItem};
use souk_core::selection::Selection;
use souk_core::types::{CategoryFilter, Kind, SortKey};
use souk_core::view::{self, ViewState};

/// How long the copied badge stays up after a copy.
pub const COPIED_BADGE_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Which pane the movement keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Catalog,
    Selected,
}

pub struct App {
    pub registry: Registry,
    pub view: ViewState,
    pub selection: Selection,
    pub input_mode: InputMode,
    pub focus: Focus,
    /// Position in the flattened visible item list; never points at a
    /// section header.
    pub cursor: usize,
    /// Position in the selected panel, in selection order.
    pub selected_cursor: usize,
    pub show_help: bool,
    pub running: bool,
    pub source_label: String,
    copied_at: Option<Instant>,
    clipboard: Option<Clipboard>,
}

impl App {
    pub fn new(registry: Registry, source_label: String, sort: SortKey) -> Self {
        let mut view = ViewState::new();
        view.sort = sort;
        App {
            registry,
            view,
            selection: Selection::new(),
            input_mode: InputMode::Normal,
            focus: Focus::Catalog,
            cursor: 0,
            selected_cursor: 0,
            show_help: false,
            running: true,
            source_label,
            copied_at: None,
            clipboard: Clipboard::new().ok(),
        }
    }

    /// Everything the current view lets through, flattened in grid order:
    /// plugins, then agents, then commands, then hooks.
    pub fn visible(&self) -> Vec<(Kind, &RegistryItem)> {
        let mut out = Vec::new();
        for &kind in Kind::all() {
            for item in view::filter_and_sort(self.registry.items(kind), kind, &self.view) {
                out.push((kind, item));
            }
        }
        out
    }

    pub fn commands_text(&self) -> String {
        install::generate(&self.selection)
    }

    pub fn copied_badge(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Called on every poll timeout; expires the copied badge.
    pub fn tick(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_BADGE_TTL {
                self.copied_at = None;
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // -----------------------------------------------------------------------
    // Key dispatch
    // -----------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        // The help overlay swallows everything except its own close keys.
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
            ) {
                self.show_help = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                self.view.clear_search();
                self.input_mode = InputMode::Normal;
                self.clamp_cursor();
            }
            KeyCode::Backspace => {
                self.view.pop_search();
                self.clamp_cursor();
            }
            KeyCode::Char(c) => {
                self.view.push_search(c);
                self.clamp_cursor();
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                // Unwind one layer at a time: panel focus, then the search,
                // then the app itself.
                if self.focus == Focus::Selected {
                    self.focus = Focus::Catalog;
                } else if !self.view.search().is_empty() {
                    self.view.clear_search();
                    self.clamp_cursor();
                } else {
                    self.quit();
                }
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.step_category(1),
            KeyCode::BackTab => self.step_category(-1),
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(&category) = CategoryFilter::all().get(index) {
                    self.set_category(category);
                }
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.focus = Focus::Catalog;
            }
            KeyCode::Char('s') => self.view.sort = self.view.sort.next(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Home | KeyCode::Char('g') => self.move_top(),
            KeyCode::End | KeyCode::Char('G') => self.move_bottom(),
            KeyCode::Char(' ') | KeyCode::Enter => match self.focus {
                Focus::Catalog => self.toggle_current(),
                Focus::Selected => self.remove_selected_at_cursor(),
            },
            KeyCode::Char('p') => self.toggle_focus(),
            KeyCode::Char('x') => self.clear_selection(),
            KeyCode::Char('y') => self.copy_commands(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Reducers
    // -----------------------------------------------------------------------

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.view.category != category {
            self.view.category = category;
            self.cursor = 0;
        }
    }

    fn step_category(&mut self, delta: isize) {
        let tabs = CategoryFilter::all();
        let pos = tabs
            .iter()
            .position(|c| *c == self.view.category)
            .unwrap_or(0);
        let next = (pos as isize + delta).rem_euclid(tabs.len() as isize) as usize;
        self.set_category(tabs[next]);
    }

    fn move_down(&mut self) {
        match self.focus {
            Focus::Catalog => {
                let len = self.visible().len();
                if len > 0 && self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            Focus::Selected => {
                let len = self.selection.len();
                if len > 0 && self.selected_cursor + 1 < len {
                    self.selected_cursor += 1;
                }
            }
        }
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::Catalog => self.cursor = self.cursor.saturating_sub(1),
            Focus::Selected => self.selected_cursor = self.selected_cursor.saturating_sub(1),
        }
    }

    fn move_top(&mut self) {
        match self.focus {
            Focus::Catalog => self.cursor = 0,
            Focus::Selected => self.selected_cursor = 0,
        }
    }

    fn move_bottom(&mut self) {
        match self.focus {
            Focus::Catalog => self.cursor = self.visible().len().saturating_sub(1),
            Focus::Selected => self.selected_cursor = self.selection.len().saturating_sub(1),
        }
    }

    /// Toggles the item under the catalog cursor in and out of the selection.
    fn toggle_current(&mut self) {
        // Clone out of the visible list before taking &mut self.selection.
        let picked = self
            .visible()
            .get(self.cursor)
            .map(|(kind, item)| (*kind, item.name.clone()));
        if let Some((kind, id)) = picked {
            self.selection.toggle(kind, id);
        }
    }

    fn remove_selected_at_cursor(&mut self) {
        let key = self.selection.get(self.selected_cursor).cloned();
        if let Some(key) = key {
            self.selection.toggle(key.kind, key.id);
            self.clamp_selected_cursor();
            if self.selection.is_empty() {
                self.focus = Focus::Catalog;
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        self.selected_cursor = 0;
        self.focus = Focus::Catalog;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Catalog => Focus::Selected,
            Focus::Selected => Focus::Catalog,
        };
        self.clamp_selected_cursor();
    }

    /// Puts the generated commands on the system clipboard. The badge only
    /// comes up when the write went through; a missing or failing clipboard
    /// shows nothing.
    fn copy_commands(&mut self) {
        let text = self.commands_text();
        if let Some(cb) = self.clipboard.as_mut() {
            if cb.set_text(text).is_ok() {
                self.copied_at = Some(Instant::now());
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn clamp_selected_cursor(&mut self) {
        let len = self.selection.len();
        if len == 0 {
            self.selected_cursor = 0;
        } else if self.selected_cursor >= len {
            self.selected_cursor = len - 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
