use crate::application::{App, AppMode, Focus, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Home => render_home(f, app),
        Screen::Points { uf, city } => render_points(f, uf, city),
    }
}

fn render_home(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_state_field(f, app, chunks[1]);
    render_city_field(f, app, chunks[2]);
    render_submit(f, app, chunks[3]);
    render_status_bar(f, app, chunks[5]);

    match app.mode {
        AppMode::RegionList => {
            render_list_popup(f, "Select a state", &app.region_list_labels(), app.list_index)
        }
        AppMode::CityList => {
            render_list_popup(f, "Select a city", &app.city_list_labels(), app.list_index)
        }
        AppMode::Browsing => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(
        "recicla - your waste collection marketplace\n\
         We help people find collection points efficiently.\n\
         Pick a state and a city to get started.",
    )
    .block(Block::default().borders(Borders::ALL))
    .style(Style::default().fg(Color::Green));
    f.render_widget(header, area);
}

fn render_state_field(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.regions_loading {
        "Loading states...".to_string()
    } else if app.regions_error.is_some() {
        "States unavailable - press r to retry".to_string()
    } else if app.selection.has_uf() {
        // Show the full name next to the code when we still have it
        match app.regions.iter().find(|r| r.code == app.selection.uf) {
            Some(region) => format!("{} - {}", region.code, region.name),
            None => app.selection.uf.clone(),
        }
    } else {
        "Select a state".to_string()
    };

    render_field(f, "State (UF)", &content, app.focus == Focus::Uf, area);
}

fn render_city_field(f: &mut Frame, app: &App, area: Rect) {
    let content = if !app.selection.has_uf() {
        "Select a state first".to_string()
    } else if app.cities_loading {
        "Loading cities...".to_string()
    } else if app.cities_error.is_some() {
        "Cities unavailable - press r to retry".to_string()
    } else if app.selection.has_city() {
        app.selection.city.clone()
    } else {
        "Select a city".to_string()
    };

    render_field(f, "City", &content, app.focus == Focus::City, area);
}

fn render_field(f: &mut Frame, title: &str, content: &str, focused: bool, area: Rect) {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default()
    };
    let field = Paragraph::new(content.to_string())
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(style);
    f.render_widget(field, area);
}

fn render_submit(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Submit {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else if app.selection.is_complete() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new("Search collection points ->")
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(button, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.mode {
            AppMode::Browsing => {
                "Tab/Up/Down: move | Enter: open list / search | r: retry failed lookup | q: quit"
                    .to_string()
            }
            AppMode::RegionList | AppMode::CityList => {
                "Up/Down: move | PgUp/PgDn: fast scroll | Enter: select | Esc: cancel".to_string()
            }
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Browsing => Style::default(),
            AppMode::RegionList | AppMode::CityList => Style::default().fg(Color::Yellow),
        });
    f.render_widget(status, area);
}

fn render_list_popup(f: &mut Frame, title: &str, labels: &[String], selected: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 6,
        y: area.height / 8,
        width: area.width * 2 / 3,
        height: area.height * 3 / 4,
    };

    f.render_widget(Clear, popup_area);

    let visible = popup_area.height.saturating_sub(2) as usize;
    let start = if selected >= visible && visible > 0 {
        selected + 1 - visible
    } else {
        0
    };
    let end = (start + visible).min(labels.len());

    let mut rows = Vec::new();
    for (i, label) in labels[start..end].iter().enumerate() {
        let index = start + i;
        let style = if index == selected {
            Style::default().bg(Color::Green).fg(Color::Black)
        } else if index == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        rows.push(Row::new(vec![Cell::from(label.clone()).style(style)]).height(1));
    }

    let table = Table::new(rows, [Constraint::Min(1)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({}/{})", title, selected + 1, labels.len()))
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(table, popup_area);
}

fn render_points(f: &mut Frame, uf: &str, city: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(format!("Collection points\n{}, {}", city, uf))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Green));
    f.render_widget(header, chunks[0]);

    let body = Paragraph::new(format!(
        "Searching for collection points in {}, {}.\n\n\
         Point listing is served by the collection-points backend and is\n\
         not part of this client.",
        city, uf
    ))
    .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(body, chunks[1]);

    let status = Paragraph::new("Esc/Backspace: back to search")
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);
}
