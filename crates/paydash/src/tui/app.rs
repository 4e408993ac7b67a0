//! Input handling for the interactive dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::draw::{self, DrawOptions};
use crate::panels;
use crate::view::{Tab, ViewState};

/// What an input event asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select a specific tab.
    Select(Tab),
    /// Select the tab to the right.
    Next,
    /// Select the tab to the left.
    Prev,
    /// Reveal earlier panel content.
    ScrollUp,
    /// Reveal later panel content.
    ScrollDown,
    /// Leave the dashboard.
    Quit,
    /// Nothing to do.
    None,
}

/// Map a key press to an action.
#[must_use]
pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q') | KeyCode::Esc, _) => {
            Action::Quit
        }
        (KeyCode::Char(c @ '1'..='5'), _) => {
            let index = c as usize - '1' as usize;
            Action::Select(Tab::ALL[index])
        }
        (KeyCode::Tab | KeyCode::Right | KeyCode::Char('l'), _) => Action::Next,
        (KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h'), _) => Action::Prev,
        (KeyCode::Down | KeyCode::Char('j'), _) => Action::ScrollDown,
        (KeyCode::Up | KeyCode::Char('k'), _) => Action::ScrollUp,
        _ => Action::None,
    }
}

/// Map a mouse event to an action. `area` is the full frame.
#[must_use]
pub fn handle_mouse(mouse: MouseEvent, area: Rect, with_footer: bool) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let bar = draw::frame_areas(area, with_footer).tabs;
            draw::tab_at(bar, mouse.column, mouse.row).map_or(Action::None, Action::Select)
        }
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Draw again.
    Redraw,
    /// Nothing visible changed.
    Idle,
    /// Exit the event loop.
    Quit,
}

/// Interactive state: the view state plus host-side scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct App {
    /// Selected tab.
    pub state: ViewState,
    scroll: usize,
}

impl App {
    /// Start on `tab`.
    #[must_use]
    pub const fn new(tab: Tab) -> Self {
        Self {
            state: ViewState::new(tab),
            scroll: 0,
        }
    }

    /// Options for the next draw.
    #[must_use]
    pub const fn options(&self) -> DrawOptions {
        DrawOptions {
            scroll: self.scroll,
        }
    }

    fn select(&mut self, tab: Tab) -> Flow {
        if self.state.select_tab(tab) {
            self.scroll = 0;
            Flow::Redraw
        } else {
            Flow::Idle
        }
    }

    /// Apply an action.
    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Select(tab) => self.select(tab),
            Action::Next => self.select(self.state.active().next()),
            Action::Prev => self.select(self.state.active().prev()),
            Action::ScrollDown => {
                let panel = panels::render(self.state.active());
                let last = draw::scroll_len(&panel.sections).saturating_sub(1);
                if self.scroll < last {
                    self.scroll += 1;
                    Flow::Redraw
                } else {
                    Flow::Idle
                }
            }
            Action::ScrollUp => {
                if self.scroll > 0 {
                    self.scroll -= 1;
                    Flow::Redraw
                } else {
                    Flow::Idle
                }
            }
            Action::Quit => Flow::Quit,
            Action::None => Flow::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_number_keys_select_tabs() {
        assert_eq!(
            handle_key(key(KeyCode::Char('1'))),
            Action::Select(Tab::Overview)
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('4'))),
            Action::Select(Tab::Housing)
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('5'))),
            Action::Select(Tab::Solutions)
        );
        assert_eq!(handle_key(key(KeyCode::Char('6'))), Action::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key(key(KeyCode::Esc)), Action::Quit);
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(ctrl_c), Action::Quit);
        assert_eq!(handle_key(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key(key(KeyCode::Tab)), Action::Next);
        assert_eq!(handle_key(key(KeyCode::Right)), Action::Next);
        assert_eq!(handle_key(key(KeyCode::BackTab)), Action::Prev);
        assert_eq!(handle_key(key(KeyCode::Down)), Action::ScrollDown);
        assert_eq!(handle_key(key(KeyCode::Char('k'))), Action::ScrollUp);
    }

    #[test]
    fn test_click_on_tab_button() {
        let area = Rect::new(0, 0, 120, 40);
        let bar = draw::frame_areas(area, true).tabs;
        for (tab, rect) in draw::tab_hit_areas(bar) {
            let action = handle_mouse(click(rect.x + 2, rect.y + 1), area, true);
            assert_eq!(action, Action::Select(tab));
        }
        assert_eq!(handle_mouse(click(0, 0), area, true), Action::None);
    }

    #[test]
    fn test_apply_select_resets_scroll() {
        let mut app = App::default();
        assert_eq!(app.apply(Action::ScrollDown), Flow::Redraw);
        assert_eq!(app.options().scroll, 1);

        assert_eq!(app.apply(Action::Select(Tab::Causes)), Flow::Redraw);
        assert_eq!(app.state.active(), Tab::Causes);
        assert_eq!(app.options().scroll, 0);
    }

    #[test]
    fn test_apply_same_tab_is_idle() {
        let mut app = App::new(Tab::Housing);
        assert_eq!(app.apply(Action::Select(Tab::Housing)), Flow::Idle);
        assert_eq!(app.state.active(), Tab::Housing);
    }

    #[test]
    fn test_apply_next_prev() {
        let mut app = App::default();
        app.apply(Action::Prev);
        assert_eq!(app.state.active(), Tab::Solutions);
        app.apply(Action::Next);
        assert_eq!(app.state.active(), Tab::Overview);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = App::new(Tab::Housing);
        // heading, chart, callouts
        assert_eq!(app.apply(Action::ScrollDown), Flow::Redraw);
        assert_eq!(app.apply(Action::ScrollDown), Flow::Redraw);
        assert_eq!(app.apply(Action::ScrollDown), Flow::Idle);
        assert_eq!(app.options().scroll, 2);

        app.apply(Action::ScrollUp);
        app.apply(Action::ScrollUp);
        assert_eq!(app.apply(Action::ScrollUp), Flow::Idle);
    }

    #[test]
    fn test_quit() {
        assert_eq!(App::default().apply(Action::Quit), Flow::Quit);
    }
}
