//! Terminal host for the dashboard.
//!
//! The host owns the event loop: it reads input, applies it to the
//! [`App`], and redraws the [`Screen`](crate::screen::Screen) only when
//! something visible changed. [`snapshot`] draws a single frame off-screen
//! for headless use.

mod app;
mod draw;

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

pub use app::{handle_key, handle_mouse, Action, App, Flow};
pub use draw::{draw, frame_areas, tab_at, tab_hit_areas, DrawOptions, FrameAreas};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::screen::{Dashboard, Screen};
use crate::view::Tab;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or read
/// from. The terminal is restored before returning, and by a panic hook if
/// drawing panics.
pub fn run(config: &Config, initial: Tab) -> Result<()> {
    let mouse = config.ui.mouse;
    let mut terminal = setup(mouse)?;
    restore_on_panic(mouse);
    info!(tab = %initial, "dashboard started");

    let result = event_loop(&mut terminal, config, initial);
    let restored = restore(&mut terminal, mouse);

    info!("dashboard stopped");
    result.and(restored)
}

fn setup(mouse: bool) -> Result<Term> {
    enable_raw_mode().map_err(|e| Error::terminal("enable raw mode", e))?;
    let terminal = enter_screen(mouse);
    if terminal.is_err() {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout(), mouse);
    }
    terminal
}

fn enter_screen(mouse: bool) -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| Error::terminal("enter alternate screen", e))?;
    if mouse {
        execute!(stdout, EnableMouseCapture)
            .map_err(|e| Error::terminal("enable mouse capture", e))?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| Error::terminal("create terminal", e))
}

/// Undo the alternate screen and mouse capture on `out`.
fn leave_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen)
}

/// Put the terminal back before the panic message is printed.
fn restore_on_panic(mouse: bool) {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout(), mouse);
        original_hook(info);
    }));
}

fn restore(terminal: &mut Term, mouse: bool) -> Result<()> {
    disable_raw_mode().map_err(|e| Error::terminal("disable raw mode", e))?;
    leave_screen(terminal.backend_mut(), mouse)
        .map_err(|e| Error::terminal("leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| Error::terminal("show cursor", e))
}

fn event_loop(terminal: &mut Term, config: &Config, initial: Tab) -> Result<()> {
    let dashboard = Dashboard::new(config.ui.show_sources);
    let with_footer = config.ui.show_sources;
    let tick = config.tick_rate();
    let mut app = App::new(initial);
    let mut area = Rect::default();
    let mut dirty = true;

    loop {
        if dirty {
            let screen = dashboard.render(&app.state);
            let options = app.options();
            let frame = terminal
                .draw(|frame| draw(frame, &screen, &options))
                .map_err(|e| Error::terminal("draw frame", e))?;
            area = frame.area;
            dirty = false;
        }

        if !event::poll(tick).map_err(|e| Error::terminal("poll event", e))? {
            continue;
        }

        let action = match event::read().map_err(|e| Error::terminal("read event", e))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key),
            Event::Mouse(mouse) => handle_mouse(mouse, area, with_footer),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                dirty = true;
                Action::None
            }
            _ => Action::None,
        };

        match app.apply(action) {
            Flow::Quit => return Ok(()),
            Flow::Redraw => dirty = true,
            Flow::Idle => {}
        }
    }
}

/// Draw one frame off-screen and return it as plain text, one line per row
/// with trailing spaces trimmed.
///
/// # Errors
///
/// Returns an error if the off-screen terminal cannot be drawn to.
pub fn snapshot(screen: &Screen, width: u16, height: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .map_err(|e| Error::terminal("create terminal", e))?;
    terminal
        .draw(|frame| draw(frame, screen, &DrawOptions::default()))
        .map_err(|e| Error::terminal("draw frame", e))?;

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewState;

    fn render(tab: Tab) -> String {
        let screen = Dashboard::default().render(&ViewState::new(tab));
        snapshot(&screen, 120, 80).unwrap()
    }

    #[test]
    fn test_snapshot_dimensions() {
        let text = render(Tab::Overview);
        assert_eq!(text.lines().count(), 80);
        assert!(text.lines().all(|l| l.chars().count() <= 120));
    }

    #[test]
    fn test_snapshot_overview() {
        let text = render(Tab::Overview);
        assert!(text.contains("Canadian Financial Crisis Analytics"));
        assert!(text.contains("LIVING PAYCHECK TO PAYCHECK"));
        assert!(text.contains("85%"));
        assert!(text.contains("Financial Security Status"));
        assert!(!text.contains("Financial Stress by Age Group"));
    }

    #[test]
    fn test_snapshot_tabs_always_visible() {
        for tab in Tab::ALL {
            let text = render(tab);
            for label in Tab::ALL.map(Tab::label) {
                assert!(text.contains(label), "{label} missing on {tab}");
            }
        }
    }

    #[test]
    fn test_snapshot_housing_legend() {
        let text = render(Tab::Housing);
        assert!(text.contains("Toronto: 62% of income · Housing costs · Average rent: $2,600"));
    }

    #[test]
    fn test_snapshot_small_frame_does_not_panic() {
        for tab in Tab::ALL {
            let screen = Dashboard::default().render(&ViewState::new(tab));
            snapshot(&screen, 40, 12).unwrap();
        }
    }

    #[test]
    fn test_snapshot_narrow_frames_do_not_panic() {
        for show_sources in [true, false] {
            for tab in Tab::ALL {
                let screen = Dashboard::new(show_sources).render(&ViewState::new(tab));
                for width in 1..=40 {
                    for height in [1, 12, 60, 200] {
                        let text = snapshot(&screen, width, height).unwrap();
                        assert_eq!(text.lines().count(), usize::from(height));
                    }
                }
            }
        }
    }

    #[test]
    fn test_leave_screen_writes_reset_sequences() {
        let mut out = Vec::new();
        leave_screen(&mut out, false).unwrap();
        let plain = String::from_utf8(out).unwrap();
        assert!(plain.contains("\x1b[?1049l"));
        assert!(!plain.contains("\x1b[?1000l"));

        let mut out = Vec::new();
        leave_screen(&mut out, true).unwrap();
        let with_mouse = String::from_utf8(out).unwrap();
        assert!(with_mouse.contains("\x1b[?1000l"));
        assert!(with_mouse.ends_with("\x1b[?1049l"));
    }
}
