mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use souk_core::config::Config;
use souk_core::registry::Registry;

use app::App;

/// Puts the terminal back in cooked mode when it goes out of scope. Dropping
/// runs on panic unwind too, so a crash in the draw path cannot strand the
/// shell in the alternate screen.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show).ok();
    }
}

/// Runs the interactive browser until the user quits.
pub fn run(registry: Registry, source_label: String, config: &Config) -> anyhow::Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let _guard = TerminalGuard;
    execute!(io::stdout(), EnterAlternateScreen).context("enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("create terminal")?;

    let mut app = App::new(registry, source_label, config.ui.sort);
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    run_loop(&mut terminal, &mut app, tick_rate)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate).unwrap_or(false) {
            match event::read().context("read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
        app.tick();
    }
    Ok(())
}
