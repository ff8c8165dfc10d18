//! Seat grid widget: the room rendered as labeled columns of seats.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};
use crate::services::DragPayload;

/// Width of one rendered seat cell, including the brackets.
const CELL_WIDTH: usize = 12;

/// Seat grid widget
pub struct ChartView;

impl ChartView {
    /// Render all columns side by side, front of the room at the top.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let keys: Vec<String> = state
            .chart
            .grid()
            .column_keys()
            .map(str::to_string)
            .collect();
        if keys.is_empty() {
            let empty = Paragraph::new("No columns configured. Press 's' to open settings.")
                .style(Style::default().fg(theme.text_muted))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let constraints: Vec<Constraint> = keys
            .iter()
            .map(|_| Constraint::Ratio(1, keys.len() as u32))
            .collect();
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (column_idx, key) in keys.iter().enumerate() {
            Self::render_column(f, chunks[column_idx], state, theme, column_idx, key);
        }
    }

    fn render_column(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        column_idx: usize,
        key: &str,
    ) {
        let Some(column) = state.chart.grid().column(key) else {
            return;
        };

        let focused_column =
            state.focus == Focus::Grid && state.cursor.column_idx == column_idx;
        let border_style = if focused_column {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };

        let mut lines = Vec::with_capacity(column.rows());
        for row in 0..column.rows() {
            let mut spans = Vec::with_capacity(column.cols());
            for col in 0..column.cols() {
                let seat = column.seat(row, col);
                let name = seat.and_then(|s| s.student_name()).unwrap_or("");
                let label = format!("[{:^width$}]", truncate(name), width = CELL_WIDTH - 2);

                let is_cursor =
                    focused_column && state.cursor.row == row && state.cursor.col == col;
                let is_grab_source = matches!(
                    &state.grabbed,
                    Some(DragPayload::Seat { address, .. })
                        if address.column == key && address.row == row && address.col == col
                );

                let mut style = if name.is_empty() {
                    Style::default().fg(theme.text_muted)
                } else {
                    Style::default().fg(theme.occupied)
                };
                if is_grab_source {
                    style = Style::default()
                        .fg(theme.grabbed)
                        .add_modifier(Modifier::BOLD);
                }
                if is_cursor {
                    style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(label, style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        let title = format!(" {} ", state.config.column_name(key));
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(
                    title,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
        );
        f.render_widget(paragraph, area);
    }
}

fn truncate(name: &str) -> String {
    let max = CELL_WIDTH - 2;
    if name.chars().count() <= max {
        return name.to_string();
    }
    let head: String = name.chars().take(max - 1).collect();
    format!("{head}\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_name_unchanged() {
        assert_eq!(truncate("Alice"), "Alice");
    }

    #[test]
    fn test_truncate_long_name_gets_ellipsis() {
        let long = "Maximiliane Johnson";
        let out = truncate(long);
        assert!(out.chars().count() <= CELL_WIDTH - 2);
        assert!(out.ends_with('\u{2026}'));
    }
}
