//! Roster strip widget: unseated students in a horizontal list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};
use crate::services::DragPayload;

/// Roster strip widget
pub struct RosterBar;

impl RosterBar {
    /// Render the roster as a wrapping list of name chips.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let focused = state.focus == Focus::Roster;
        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };

        let line = if state.chart.roster().is_empty() {
            Line::from(Span::styled(
                "Roster is empty. Press 'a' to add a student or 'i' to import a CSV.",
                Style::default().fg(theme.text_muted),
            ))
        } else {
            let mut spans = Vec::new();
            for (idx, name) in state.chart.roster().iter().enumerate() {
                let selected = focused && idx == state.roster_index;
                let grabbed = matches!(
                    &state.grabbed,
                    Some(DragPayload::Roster { name: grabbed }) if grabbed == name
                );

                let mut style = Style::default().fg(theme.text);
                if grabbed {
                    style = Style::default()
                        .fg(theme.grabbed)
                        .add_modifier(Modifier::BOLD);
                }
                if selected {
                    style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!(" {name} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        };

        let title = format!(" Roster ({}) ", state.chart.roster().len());
        let paragraph = Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(Span::styled(
                        title,
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    )),
            )
            .wrap(ratatui::widgets::Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
