//! Settings panel: column shapes and theme, edited on a working copy.
//!
//! Changes only reach the live config when the user applies them, so
//! closing the panel with Esc discards everything.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;
use crate::config::{Config, LayoutConfig, ThemeMode};

/// Upper bounds enforced while editing, matching config validation.
const MAX_ROWS: usize = 20;
const MAX_COLS: usize = 10;

/// Editable working copy of the layout settings.
#[derive(Debug, Clone)]
pub struct SettingsPanelState {
    layout: LayoutConfig,
    theme: ThemeMode,
    selected: usize,
}

impl SettingsPanelState {
    /// Snapshots the current config for editing.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            layout: config.layout_config.clone(),
            theme: config.theme,
            selected: 0,
        }
    }

    /// The edited values, consumed on apply.
    #[must_use]
    pub fn into_parts(self) -> (LayoutConfig, ThemeMode) {
        (self.layout, self.theme)
    }

    /// Moves the column selection.
    pub fn select_next(&mut self) {
        if !self.layout.is_empty() {
            self.selected = (self.selected + 1) % self.layout.len();
        }
    }

    /// Moves the column selection backwards.
    pub fn select_previous(&mut self) {
        if !self.layout.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.layout.len() - 1);
        }
    }

    /// Adjusts the selected column's row count, clamped to 1..=20.
    pub fn adjust_rows(&mut self, delta: isize) {
        if let Some(shape) = self.selected_shape_mut() {
            shape.rows = clamp_dimension(shape.rows, delta, MAX_ROWS);
        }
    }

    /// Adjusts the selected column's col count, clamped to 1..=10.
    pub fn adjust_cols(&mut self, delta: isize) {
        if let Some(shape) = self.selected_shape_mut() {
            shape.cols = clamp_dimension(shape.cols, delta, MAX_COLS);
        }
    }

    /// Toggles between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    fn selected_shape_mut(&mut self) -> Option<&mut crate::config::ColumnShape> {
        self.layout.values_mut().nth(self.selected)
    }

    /// Render the panel as a centered popup.
    pub fn render(&self, f: &mut Frame, config: &Config, theme: &Theme) {
        let area = centered_rect(50, 60, f.area());
        f.render_widget(Clear, area);

        let mut lines = Vec::new();
        for (idx, (key, shape)) in self.layout.iter().enumerate() {
            let marker = if idx == self.selected { "> " } else { "  " };
            let style = if idx == self.selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{marker}{} ({}): {} rows x {} cols",
                    key,
                    config.column_name(key),
                    shape.rows,
                    shape.cols
                ),
                style,
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Theme: {:?}", self.theme),
            Style::default().fg(theme.text_secondary),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(Span::styled(
                    " Settings ",
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
        );
        f.render_widget(paragraph, area);
    }
}

const fn clamp_dimension(value: usize, delta: isize, max: usize) -> usize {
    let next = value.saturating_add_signed(delta);
    if next < 1 {
        1
    } else if next > max {
        max
    } else {
        next
    }
}

/// Centered popup rect as a percentage of the containing area.
/// Widened before multiplying so extreme terminal sizes cannot wrap.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_rows_clamps() {
        let config = Config::new();
        let mut panel = SettingsPanelState::from_config(&config);
        panel.adjust_rows(-100);
        let (layout, _) = panel.clone().into_parts();
        assert_eq!(layout["column1"].rows, 1);

        panel.adjust_rows(100);
        let (layout, _) = panel.into_parts();
        assert_eq!(layout["column1"].rows, MAX_ROWS);
    }

    #[test]
    fn test_adjust_cols_clamps() {
        let config = Config::new();
        let mut panel = SettingsPanelState::from_config(&config);
        panel.adjust_cols(100);
        let (layout, _) = panel.into_parts();
        assert_eq!(layout["column1"].cols, MAX_COLS);
    }

    #[test]
    fn test_selection_wraps() {
        let config = Config::new();
        let mut panel = SettingsPanelState::from_config(&config);
        panel.select_previous();
        panel.adjust_rows(1);
        let (layout, _) = panel.into_parts();
        // Wrapped to the last column
        assert_eq!(layout["column3"].rows, 9);
    }

    #[test]
    fn test_toggle_theme_round_trips() {
        let config = Config::new();
        let mut panel = SettingsPanelState::from_config(&config);
        panel.toggle_theme();
        assert_eq!(panel.clone().into_parts().1, ThemeMode::Dark);
        panel.toggle_theme();
        assert_eq!(panel.into_parts().1, ThemeMode::Light);
    }

    #[test]
    fn test_centered_rect_handles_extreme_area() {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        let r = centered_rect(50, 60, area);
        assert!(r.x + r.width <= area.width);
        assert!(r.y + r.height <= area.height);

        let tiny = centered_rect(50, 60, Rect::new(0, 0, 1, 1));
        assert!(tiny.width <= 1 && tiny.height <= 1);
    }

    #[test]
    fn test_esc_discards_working_copy() {
        let config = Config::new();
        let mut panel = SettingsPanelState::from_config(&config);
        panel.adjust_rows(5);
        drop(panel);
        // The live config is untouched until apply
        assert_eq!(config.layout_config["column1"].rows, 8);
    }
}
