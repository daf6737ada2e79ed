use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use daymark::{app::AppState, ui::widgets::MonthGridWidget};

pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let title_text = format!(
        "{} - theme: {}{}",
        app.cursor.format("%B %Y"),
        app.theme.name,
        if app.theme.fade_others { " (faded)" } else { "" }
    );
    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let grid_block = Block::default().borders(Borders::ALL);
    let inner = grid_block.inner(chunks[1]);
    f.render_widget(grid_block, chunks[1]);
    f.render_widget(
        MonthGridWidget::new(&app.grid, &app.theme).cursor(app.cursor),
        centered(inner, MonthGridWidget::width(), MonthGridWidget::height(&app.grid)),
    );

    let status_text = match &app.status_message {
        Some(message) => format!(
            "{} | redrawn {}/{} | Enter=press x=long-press f=fade t=theme q=quit",
            message, app.last_refresh.redrawn, app.last_refresh.cells
        ),
        None => format!(
            "redrawn {}/{} | hjkl=move {{}}=month Enter=press x=long-press f=fade t=theme q=quit",
            app.last_refresh.redrawn, app.last_refresh.cells
        ),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
