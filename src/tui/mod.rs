//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. Drag-and-drop maps onto a pick-up
//! and drop gesture: Enter grabs a student from the roster or a seat,
//! Enter drops them on the cursor seat, Esc cancels the pick-up.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod chart_view;
pub mod roster_bar;
pub mod settings_panel;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::models::{Roster, SeatAddress};
use crate::parser::parse_roster_csv;
use crate::services::{assign, clear, ChartEvent, ChartState, DragPayload};

// Re-export TUI components
pub use chart_view::ChartView;
pub use roster_bar::RosterBar;
pub use settings_panel::SettingsPanelState;
pub use status_bar::{Notice, NoticeKind, StatusBar};
pub use theme::Theme;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The roster strip of unseated students
    Roster,
    /// The seat grid
    Grid,
    /// The settings popup
    Settings,
}

/// Cursor position within the seat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    /// Index into the sorted column keys
    pub column_idx: usize,
    /// Row within the column
    pub row: usize,
    /// Col within the column
    pub col: usize,
}

/// What a text prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// New student name for the roster
    AddStudent,
    /// Path of a roster CSV to import
    ImportPath,
    /// Output path for a PDF export
    ExportPdfPath,
    /// Output path for a PNG/JPEG export
    ExportImagePath,
}

/// An active single-line text prompt.
#[derive(Debug, Clone)]
pub struct InputPrompt {
    /// What the collected text is for
    pub mode: InputMode,
    /// Text typed so far
    pub buffer: String,
}

impl InputPrompt {
    fn title(&self) -> &'static str {
        match self.mode {
            InputMode::AddStudent => " Add student ",
            InputMode::ImportPath => " Import roster CSV ",
            InputMode::ExportPdfPath => " Export PDF ",
            InputMode::ExportImagePath => " Export image (.png or .jpg) ",
        }
    }
}

/// Main application state for the TUI.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// The seating chart model
    pub chart: ChartState,
    /// Resolved color theme
    pub theme: Theme,
    /// Focused pane
    pub focus: Focus,
    /// Selected roster entry
    pub roster_index: usize,
    /// Seat grid cursor
    pub cursor: GridCursor,
    /// Student currently carried by the cursor
    pub grabbed: Option<DragPayload>,
    /// Transient status notice
    pub notice: Option<Notice>,
    /// Active text prompt, if any
    pub input: Option<InputPrompt>,
    /// Settings working copy while the panel is open
    pub settings: Option<SettingsPanelState>,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the TUI state from a loaded config and initial roster.
    #[must_use]
    pub fn new(config: Config, roster: Roster) -> Self {
        let chart = ChartState::new(roster, &config.layout_config);
        let theme = Theme::from_mode(config.theme);
        Self {
            config,
            chart,
            theme,
            focus: Focus::Roster,
            roster_index: 0,
            cursor: GridCursor::default(),
            grabbed: None,
            notice: None,
            input: None,
            settings: None,
            should_quit: false,
        }
    }

    /// The seat address under the grid cursor, if the grid has columns.
    #[must_use]
    pub fn cursor_address(&self) -> Option<SeatAddress> {
        let key = self
            .chart
            .grid()
            .column_keys()
            .nth(self.cursor.column_idx)?;
        Some(SeatAddress::new(key, self.cursor.row, self.cursor.col))
    }

    fn set_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice::new(text, kind));
    }

    /// Clamps the cursor into the current column's shape. Needed after
    /// a rebuild shrinks a column under the cursor.
    fn clamp_cursor(&mut self) {
        let column_count = self.chart.grid().column_keys().count();
        if column_count == 0 {
            self.cursor = GridCursor::default();
            return;
        }
        self.cursor.column_idx = self.cursor.column_idx.min(column_count - 1);
        let key = self
            .chart
            .grid()
            .column_keys()
            .nth(self.cursor.column_idx)
            .map(str::to_string);
        if let Some(column) = key.as_deref().and_then(|k| self.chart.grid().column(k)) {
            self.cursor.row = self.cursor.row.min(column.rows().saturating_sub(1));
            self.cursor.col = self.cursor.col.min(column.cols().saturating_sub(1));
        }
    }

    fn clamp_roster_index(&mut self) {
        let len = self.chart.roster().len();
        self.roster_index = self.roster_index.min(len.saturating_sub(1));
    }

    fn move_cursor(&mut self, key: KeyCode) {
        let keys: Vec<String> = self
            .chart
            .grid()
            .column_keys()
            .map(str::to_string)
            .collect();
        if keys.is_empty() {
            return;
        }
        let Some(column) = self.chart.grid().column(&keys[self.cursor.column_idx]) else {
            return;
        };

        match key {
            KeyCode::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor.row + 1 < column.rows() {
                    self.cursor.row += 1;
                }
            }
            KeyCode::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.column_idx > 0 {
                    // Slide into the rightmost col of the previous column
                    self.cursor.column_idx -= 1;
                    let prev = &keys[self.cursor.column_idx];
                    if let Some(col) = self.chart.grid().column(prev) {
                        self.cursor.col = col.cols().saturating_sub(1);
                        self.cursor.row = self.cursor.row.min(col.rows().saturating_sub(1));
                    }
                }
            }
            KeyCode::Right => {
                if self.cursor.col + 1 < column.cols() {
                    self.cursor.col += 1;
                } else if self.cursor.column_idx + 1 < keys.len() {
                    self.cursor.column_idx += 1;
                    self.cursor.col = 0;
                    let next = &keys[self.cursor.column_idx];
                    if let Some(col) = self.chart.grid().column(next) {
                        self.cursor.row = self.cursor.row.min(col.rows().saturating_sub(1));
                    }
                }
            }
            _ => {}
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.theme = Theme::from_mode(state.config.theme);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout so notices expire promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break;
                }
            }
        }

        // Views are redrawn wholesale every frame; draining keeps the
        // queue bounded and lets us react to roster shrinkage.
        for event in state.chart.drain_events() {
            if event == ChartEvent::RosterChanged {
                state.clamp_roster_index();
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Top-level key dispatch. Returns `true` when the user quit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    if state.input.is_some() {
        handle_prompt_key(state, key);
        return Ok(false);
    }
    if state.settings.is_some() {
        handle_settings_key(state, key);
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Tab => {
            state.focus = match state.focus {
                Focus::Roster => Focus::Grid,
                Focus::Grid | Focus::Settings => Focus::Roster,
            };
        }
        KeyCode::Esc => {
            if state.grabbed.take().is_some() {
                state.set_notice("Pick-up cancelled", NoticeKind::Info);
            }
        }
        KeyCode::Char('s') => {
            state.settings = Some(SettingsPanelState::from_config(&state.config));
            state.focus = Focus::Settings;
        }
        KeyCode::Char('a') => {
            state.input = Some(InputPrompt {
                mode: InputMode::AddStudent,
                buffer: String::new(),
            });
        }
        KeyCode::Char('i') => {
            state.input = Some(InputPrompt {
                mode: InputMode::ImportPath,
                buffer: String::new(),
            });
        }
        KeyCode::Char('e') => {
            state.input = Some(InputPrompt {
                mode: InputMode::ExportPdfPath,
                buffer: format!(
                    "seating_chart_{}.pdf",
                    chrono::Local::now().format("%Y-%m-%d")
                ),
            });
        }
        KeyCode::Char('p') => {
            state.input = Some(InputPrompt {
                mode: InputMode::ExportImagePath,
                buffer: format!(
                    "seating_chart_{}.png",
                    chrono::Local::now().format("%Y-%m-%d")
                ),
            });
        }
        _ => match state.focus {
            Focus::Roster => handle_roster_key(state, key),
            Focus::Grid => handle_grid_key(state, key),
            Focus::Settings => {}
        },
    }

    Ok(false)
}

fn handle_roster_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up => {
            state.roster_index = state.roster_index.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Down => {
            if state.roster_index + 1 < state.chart.roster().len() {
                state.roster_index += 1;
            }
        }
        KeyCode::Enter => {
            if state.grabbed.is_some() {
                state.set_notice(
                    "Already carrying a student. Drop on a seat or press Esc.",
                    NoticeKind::Error,
                );
                return;
            }
            if let Some(name) = state.chart.roster().get(state.roster_index) {
                state.grabbed = Some(DragPayload::Roster {
                    name: name.to_string(),
                });
                state.focus = Focus::Grid;
                state.set_notice(
                    format!("Picked up {name}. Choose a seat and press Enter."),
                    NoticeKind::Info,
                );
            }
        }
        _ => {}
    }
}

fn handle_grid_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            state.move_cursor(key.code);
        }
        KeyCode::Enter => {
            let Some(address) = state.cursor_address() else {
                return;
            };
            if let Some(payload) = state.grabbed.take() {
                drop_on_seat(state, payload, &address);
            } else {
                pick_up_from_seat(state, &address);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let Some(address) = state.cursor_address() else {
                return;
            };
            match clear(&mut state.chart, &address) {
                Ok(Some(name)) => {
                    // Clearing the seat a payload was picked from makes
                    // that payload stale; drop it instead of letting a
                    // later Enter hit the stale-source rejection.
                    if matches!(
                        &state.grabbed,
                        Some(DragPayload::Seat { address: source, .. }) if *source == address
                    ) {
                        state.grabbed = None;
                    }
                    state.set_notice(
                        format!("{name} returned to the roster"),
                        NoticeKind::Success,
                    );
                }
                Ok(None) => {}
                Err(e) => state.set_notice(e.to_string(), NoticeKind::Error),
            }
        }
        _ => {}
    }
}

fn drop_on_seat(state: &mut AppState, payload: DragPayload, address: &SeatAddress) {
    let name = payload.name().unwrap_or_default().to_string();
    match assign(&mut state.chart, payload.clone(), address) {
        Ok(_) => {
            state.set_notice(format!("Seated {name} at {address}"), NoticeKind::Success);
        }
        Err(e) => {
            // Rejection leaves both sides untouched, so keep carrying
            // the student for another attempt.
            state.grabbed = Some(payload);
            state.set_notice(e.to_string(), NoticeKind::Error);
        }
    }
}

fn pick_up_from_seat(state: &mut AppState, address: &SeatAddress) {
    match state.chart.grid().get(address) {
        Ok(seat) => {
            if let Some(name) = seat.student_name() {
                state.grabbed = Some(DragPayload::Seat {
                    address: address.clone(),
                    name: name.to_string(),
                });
                state.set_notice(
                    format!("Picked up {name}. Choose a seat and press Enter."),
                    NoticeKind::Info,
                );
            }
        }
        Err(e) => state.set_notice(e.to_string(), NoticeKind::Error),
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    let Some(panel) = state.settings.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Up => panel.select_previous(),
        KeyCode::Down => panel.select_next(),
        KeyCode::Char('+') | KeyCode::Char('=') => panel.adjust_rows(1),
        KeyCode::Char('-') => panel.adjust_rows(-1),
        KeyCode::Char('<') | KeyCode::Char(',') => panel.adjust_cols(-1),
        KeyCode::Char('>') | KeyCode::Char('.') => panel.adjust_cols(1),
        KeyCode::Char('t') => panel.toggle_theme(),
        KeyCode::Enter => apply_settings(state),
        KeyCode::Esc => {
            state.settings = None;
            state.focus = Focus::Grid;
        }
        _ => {}
    }
}

fn apply_settings(state: &mut AppState) {
    let Some(panel) = state.settings.take() else {
        return;
    };
    let (layout, theme) = panel.into_parts();

    let mut candidate = state.config.clone();
    candidate.layout_config = layout;
    candidate.theme = theme;
    if let Err(e) = candidate.validate() {
        state.set_notice(format!("Invalid settings: {e}"), NoticeKind::Error);
        state.settings = Some(SettingsPanelState::from_config(&candidate));
        return;
    }

    state.config = candidate;
    // Save failures are reported but never block the in-memory change
    if let Err(e) = state.config.save() {
        state.set_notice(format!("Settings applied but not saved: {e:#}"), NoticeKind::Error);
    } else {
        state.set_notice("Settings applied", NoticeKind::Success);
    }
    state.grabbed = None;
    state.chart.rebuild(&state.config.layout_config);
    state.clamp_cursor();
    state.clamp_roster_index();
    state.focus = Focus::Grid;
}

fn handle_prompt_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.input = None;
        }
        KeyCode::Enter => {
            if let Some(prompt) = state.input.take() {
                commit_prompt(state, &prompt);
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = state.input.as_mut() {
                prompt.buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = state.input.as_mut() {
                prompt.buffer.push(c);
            }
        }
        _ => {}
    }
}

fn commit_prompt(state: &mut AppState, prompt: &InputPrompt) {
    let text = prompt.buffer.trim();
    if text.is_empty() {
        return;
    }
    match prompt.mode {
        InputMode::AddStudent => match state.chart.add_student(text) {
            Ok(()) => state.set_notice(format!("Added {text}"), NoticeKind::Success),
            Err(e) => state.set_notice(e.to_string(), NoticeKind::Error),
        },
        InputMode::ImportPath => match parse_roster_csv(std::path::Path::new(text)) {
            Ok(names) => {
                let count = names.len();
                state.chart.import_roster(names);
                state.roster_index = 0;
                state.set_notice(format!("Imported {count} students"), NoticeKind::Success);
            }
            Err(e) => state.set_notice(format!("Import failed: {e}"), NoticeKind::Error),
        },
        InputMode::ExportPdfPath => {
            let result = crate::export::render_document(&state.chart, &state.config)
                .and_then(|bytes| std::fs::write(text, bytes).map_err(Into::into));
            match result {
                Ok(()) => state.set_notice(format!("Exported {text}"), NoticeKind::Success),
                Err(e) => state.set_notice(format!("Export failed: {e}"), NoticeKind::Error),
            }
        }
        InputMode::ExportImagePath => {
            let render = if text.ends_with(".jpg") || text.ends_with(".jpeg") {
                crate::export::render_jpeg(&state.chart, &state.config)
            } else {
                crate::export::render_png(&state.chart, &state.config)
            };
            let result = render.and_then(|bytes| std::fs::write(text, bytes).map_err(Into::into));
            match result {
                Ok(()) => state.set_notice(format!("Exported {text}"), NoticeKind::Success),
                Err(e) => state.set_notice(format!("Export failed: {e}"), NoticeKind::Error),
            }
        }
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill the screen with the theme background first so the look does
    // not depend on terminal defaults
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Seat grid
            Constraint::Length(5), // Roster strip
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    ChartView::render(f, chunks[1], state, &state.theme);
    RosterBar::render(f, chunks[2], state, &state.theme);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(panel) = &state.settings {
        panel.render(f, &state.config, &state.theme);
    }
    if let Some(prompt) = &state.input {
        render_prompt(f, prompt, &state.theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let carried = state
        .grabbed
        .as_ref()
        .and_then(DragPayload::name)
        .map(|name| format!("  [carrying {name}]"))
        .unwrap_or_default();
    let title = format!(" {}{carried}", state.config.window.title);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.primary)),
    );
    f.render_widget(paragraph, area);
}

/// Popup rect for the prompt. Must not panic on degenerate or very
/// wide terminal sizes.
fn prompt_rect(area: Rect) -> Rect {
    let width = ((u32::from(area.width) * 3 / 5) as u16)
        .max(30)
        .min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height / 2).saturating_sub(1),
        width,
        height: area.height.min(3),
    }
}

fn render_prompt(f: &mut Frame, prompt: &InputPrompt, theme: &Theme) {
    let popup = prompt_rect(f.area());
    f.render_widget(Clear, popup);
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(prompt.buffer.clone(), Style::default().fg(theme.text)),
        Span::styled("_", Style::default().fg(theme.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(prompt.title()),
    );
    f.render_widget(paragraph, popup);
}
