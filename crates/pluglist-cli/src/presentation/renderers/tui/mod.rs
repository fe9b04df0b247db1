//! Interactive table widget backed by Ratatui.
//!
//! ## Design:
//! - The widget owns UI state (cached cells, reuse pool, selection)
//! - The widget does NOT own data: presenter commands mark rows stale, and
//!   stale rows are re-resolved through the presenter before the next draw
//! - Row reloads leave selection and scroll offset alone; full reloads clamp them

mod table;
mod ui;

pub use table::{PendingReload, TuiTable};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pluglist_types::Row;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::presenters::{PluginListScreen, StatusNavigator};

pub type TuiScreen = PluginListScreen<TuiTable, StatusNavigator>;

/// Requests from the keyboard that the handler carries out against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiAction {
    ToggleActive(String),
    ToggleAutoupdate(String),
    Reload,
}

/// Bring stale rows in the widget up to date with the presenter
pub fn sync(screen: &mut TuiScreen) {
    match screen.widget_mut().take_pending() {
        PendingReload::None => {}
        PendingReload::All => {
            screen.widget_mut().recycle_visible();
            let cells = screen
                .index_paths()
                .into_iter()
                .map(|path| (path, screen.cell_for(path)))
                .collect();
            screen.widget_mut().install_all(cells);
        }
        PendingReload::Rows(paths) => {
            for path in paths {
                let cell = screen.cell_for(path);
                screen.widget_mut().install(path, cell);
            }
        }
    }
}

/// Main event loop. Returns when the user quits.
pub fn run<F>(screen: &mut TuiScreen, title: &str, mut on_action: F) -> Result<()>
where
    F: FnMut(TuiAction),
{
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, screen, title, &mut on_action);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<F>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut TuiScreen,
    title: &str,
    on_action: &mut F,
) -> Result<()>
where
    F: FnMut(TuiAction),
{
    loop {
        screen.pump();
        sync(screen);

        let status = screen.navigator().status().map(str::to_string);
        terminal.draw(|f| ui::draw(f, screen.widget_mut(), title, status.as_deref()))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if !handle_key(screen, key, on_action) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns false when the loop should exit
fn handle_key<F>(screen: &mut TuiScreen, key: KeyEvent, on_action: &mut F) -> bool
where
    F: FnMut(TuiAction),
{
    if key.kind != KeyEventKind::Press {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Down | KeyCode::Char('j') => screen.widget_mut().select_next(),
        KeyCode::Up | KeyCode::Char('k') => screen.widget_mut().select_previous(),
        KeyCode::Char('r') => on_action(TuiAction::Reload),
        KeyCode::Enter => {
            if screen.widget().panel().is_some() {
                screen.on_empty_state_tapped();
            } else if let Some(path) = screen.widget().selected() {
                screen.on_select(path);
            }
        }
        KeyCode::Char('a') => {
            if let Some(slug) = selected_slug(screen) {
                on_action(TuiAction::ToggleActive(slug));
            }
        }
        KeyCode::Char('u') => {
            if let Some(slug) = selected_slug(screen) {
                on_action(TuiAction::ToggleAutoupdate(slug));
            }
        }
        _ => {}
    }
    true
}

fn selected_slug(screen: &TuiScreen) -> Option<String> {
    let path = screen.widget().selected()?;
    match screen.table().row_at(path) {
        Row::Plugin(row) => Some(row.slug.clone()),
        Row::Text(_) => None,
    }
}
