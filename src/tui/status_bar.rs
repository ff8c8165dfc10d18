//! Status bar widget for notices and contextual key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use super::{AppState, Focus, Theme};

/// How long a transient notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational message
    Info,
    /// Confirmation of a completed action
    Success,
    /// Rejected action or failure
    Error,
}

/// A transient message shown in the status bar until it expires.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Message text
    pub text: String,
    /// Severity, controls the color
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    /// Creates a notice that expires after [`NOTICE_DURATION`].
    #[must_use]
    pub fn new(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + NOTICE_DURATION,
        }
    }

    /// Whether the notice should still be shown.
    #[must_use]
    pub fn is_live(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: occupancy summary, active notice, and
    /// contextual key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let summary = Line::from(vec![
            Span::styled("Seated: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.chart.placed_count().to_string(),
                Style::default().fg(theme.text),
            ),
            Span::styled("  Unseated: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.chart.unplaced_count().to_string(),
                Style::default().fg(theme.text),
            ),
            Span::styled("  Seats: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.chart.grid().total_seats().to_string(),
                Style::default().fg(theme.text),
            ),
        ]);

        let notice_line = state.notice.as_ref().filter(|n| n.is_live()).map(|n| {
            let color = match n.kind {
                NoticeKind::Info => theme.text,
                NoticeKind::Success => theme.success,
                NoticeKind::Error => theme.error,
            };
            Line::from(Span::styled(
                n.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        });

        let help_line = Line::from(Span::styled(
            Self::contextual_help(state),
            Style::default().fg(theme.text_muted),
        ));

        let mut lines = vec![summary];
        lines.push(notice_line.unwrap_or_else(|| Line::from("")));
        lines.push(help_line);

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }

    fn contextual_help(state: &AppState) -> &'static str {
        if state.input.is_some() {
            return "Enter: confirm | Esc: cancel";
        }
        if state.grabbed.is_some() {
            return "Arrows: move | Enter: drop | Esc: cancel pick-up";
        }
        match state.focus {
            Focus::Roster => {
                "Arrows: select | Enter: pick up | a: add | i: import CSV | Tab: grid | s: settings | q: quit"
            }
            Focus::Grid => {
                "Arrows: move | Enter: pick up | d: clear seat | e: export PDF | p: export image | Tab: roster | q: quit"
            }
            Focus::Settings => "Arrows: select | +/-: rows | </>: cols | t: theme | Enter: apply | Esc: close",
        }
    }
}
