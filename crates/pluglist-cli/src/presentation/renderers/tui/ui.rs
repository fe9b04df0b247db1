use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use pluglist_types::{Accessory, NoResults};

use super::TuiTable;

pub(crate) fn draw(f: &mut Frame, table: &mut TuiTable, title: &str, status: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Plugin rows or empty-state panel
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Footer (Help)
        ])
        .split(f.area());

    match table.panel().cloned() {
        Some(panel) => render_panel(f, chunks[0], title, &panel),
        None => render_rows(f, chunks[0], title, table),
    }

    if let Some(status) = status {
        let line = Line::from(Span::styled(status, Style::default().fg(Color::Cyan)));
        f.render_widget(Paragraph::new(line), chunks[1]);
    }

    render_footer(f, chunks[2]);
}

fn render_rows(f: &mut Frame, area: Rect, title: &str, table: &mut TuiTable) {
    let rows: Vec<Row> = table
        .cells()
        .iter()
        .map(|(_, cell)| {
            let marker = match cell.accessory {
                Accessory::Disclosure => ">",
                Accessory::None => " ",
            };
            Row::new(vec![
                cell.title.clone(),
                cell.detail.clone().unwrap_or_default(),
                cell.badge.clone().unwrap_or_default(),
                marker.to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
        Constraint::Length(1),
    ];

    let widget = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(widget, area, table.state_mut());
}

fn render_panel(f: &mut Frame, area: Rect, title: &str, panel: &NoResults) {
    let mut lines = vec![
        Line::from(Span::styled(
            panel.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(message) = &panel.message {
        lines.push(Line::from(message.clone()));
    }
    if let Some(button) = &panel.button_title {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[Enter] {}", button),
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));

    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let footer_line = Line::from(vec![
        Span::styled("[q]", key),
        Span::raw("uit "),
        Span::styled("[j/k]", key),
        Span::raw("move "),
        Span::styled("[a]", key),
        Span::raw("ctive "),
        Span::styled("[u]", key),
        Span::raw("pdates "),
        Span::styled("[r]", key),
        Span::raw("eload "),
        Span::styled("[Enter]", key),
        Span::raw("open"),
    ]);

    f.render_widget(Paragraph::new(footer_line), area);
}
