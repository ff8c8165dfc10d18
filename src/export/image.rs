//! Raster seating chart rendering (PNG and JPEG).
//!
//! Draws the room as colored seat cells, one panel per column, using
//! the per-column pixel dimensions from the layout config. Occupied
//! seats get a highlight fill so the occupancy pattern reads at a
//! glance.

use crate::config::{Config, ThemeMode};
use crate::services::ChartState;
use anyhow::Result;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

const MARGIN: u32 = 20;
const COLUMN_GAP: u32 = 24;
const HEADER_BAND: u32 = 28;
const DESK_BAND: u32 = 36;

struct Palette {
    background: Rgb<u8>,
    band: Rgb<u8>,
    occupied_fill: Rgb<u8>,
    occupied_border: Rgb<u8>,
    empty_fill: Rgb<u8>,
    empty_border: Rgb<u8>,
}

impl Palette {
    fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self {
                background: Rgb([245, 247, 250]),
                band: Rgb([144, 202, 249]),
                occupied_fill: Rgb([227, 242, 253]),
                occupied_border: Rgb([144, 202, 249]),
                empty_fill: Rgb([245, 245, 245]),
                empty_border: Rgb([224, 224, 224]),
            },
            ThemeMode::Dark => Self {
                background: Rgb([30, 32, 36]),
                band: Rgb([66, 99, 146]),
                occupied_fill: Rgb([40, 62, 86]),
                occupied_border: Rgb([100, 150, 200]),
                empty_fill: Rgb([50, 52, 56]),
                empty_border: Rgb([90, 90, 90]),
            },
        }
    }
}

/// Renders the chart into an RGB image buffer.
#[must_use]
pub fn render_image(chart: &ChartState, config: &Config) -> RgbImage {
    let palette = Palette::for_theme(config.theme);

    let mut panel_widths = Vec::new();
    let mut max_panel_height = 0;
    for key in chart.grid().column_keys() {
        let shape = config.layout_config.get(key).copied().unwrap_or_default();
        let Some(column) = chart.grid().column(key) else {
            continue;
        };
        panel_widths.push(column.cols() as u32 * shape.col_width.max(1));
        let height = column.rows() as u32 * shape.row_height.max(1);
        max_panel_height = max_panel_height.max(height);
    }

    let panels_width: u32 = panel_widths.iter().sum::<u32>()
        + COLUMN_GAP * panel_widths.len().saturating_sub(1) as u32;
    let width = (2 * MARGIN + panels_width).max(2 * MARGIN + 1);
    let height = 2 * MARGIN + DESK_BAND + HEADER_BAND + max_panel_height.max(1);

    let mut img = RgbImage::from_pixel(width, height, palette.background);

    // Teacher's desk band across the front of the room
    let desk_width = panels_width.max(1) / 2;
    let desk_x = MARGIN + (panels_width.max(1) - desk_width) / 2;
    fill_rect(&mut img, desk_x, MARGIN, desk_width, DESK_BAND - 12, palette.band);

    let mut panel_x = MARGIN;
    for key in chart.grid().column_keys() {
        let shape = config.layout_config.get(key).copied().unwrap_or_default();
        let Some(column) = chart.grid().column(key) else {
            continue;
        };
        let cell_w = shape.col_width.max(1);
        let cell_h = shape.row_height.max(1);
        let panel_width = column.cols() as u32 * cell_w;

        // Column header band
        fill_rect(
            &mut img,
            panel_x,
            MARGIN + DESK_BAND,
            panel_width,
            HEADER_BAND - 8,
            palette.band,
        );

        let top = MARGIN + DESK_BAND + HEADER_BAND;
        for (row, col, seat) in column.iter() {
            let x = panel_x + col as u32 * cell_w;
            let y = top + row as u32 * cell_h;
            let (fill, border) = if seat.is_occupied() {
                (palette.occupied_fill, palette.occupied_border)
            } else {
                (palette.empty_fill, palette.empty_border)
            };
            // Cells narrower than the border have no interior to fill
            fill_rect(
                &mut img,
                x + 1,
                y + 1,
                cell_w.saturating_sub(2),
                cell_h.saturating_sub(2),
                fill,
            );
            stroke_rect(&mut img, x, y, cell_w, cell_h, border);
        }

        panel_x += panel_width + COLUMN_GAP;
    }

    img
}

/// Renders the chart and encodes it as PNG bytes.
pub fn render_png(chart: &ChartState, config: &Config) -> Result<Vec<u8>> {
    encode(render_image(chart, config), ImageFormat::Png)
}

/// Renders the chart and encodes it as JPEG bytes.
pub fn render_jpeg(chart: &ChartState, config: &Config) -> Result<Vec<u8>> {
    encode(render_image(chart, config), ImageFormat::Jpeg)
}

fn encode(img: RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format)
        .map_err(|e| anyhow::anyhow!("Failed to encode image: {e}"))?;
    Ok(buffer.into_inner())
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    for py in y..(y + height).min(img.height()) {
        for px in x..(x + width).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

fn stroke_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    if width == 0 || height == 0 {
        return;
    }
    fill_rect(img, x, y, width, 1, color);
    fill_rect(img, x, y + height - 1, width, 1, color);
    fill_rect(img, x, y, 1, height, color);
    fill_rect(img, x + width - 1, y, 1, height, color);
}
