use std::io;

use chrono::{NaiveDate, Weekday};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use daymark::{app::AppState, input::normal_mode, ui::theme::Theme};

use crate::tui::{presentation::ui, sample_markings::sample_markings};

pub fn run_tui(
    today: NaiveDate,
    month: Option<NaiveDate>,
    theme: Theme,
    first_day_of_week: Weekday,
) -> io::Result<()> {
    let mut app = AppState::new(today, theme, first_day_of_week).with_markings(sample_markings(today));
    if let Some(month) = month {
        app = app.with_cursor(month);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("terminal session ended with error: {}", err);
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            normal_mode::handle_key(key.code, app);
            tracing::debug!(
                cursor = %app.cursor,
                cells = app.last_refresh.cells,
                redrawn = app.last_refresh.redrawn,
                "key handled"
            );
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
