//! PDF seating chart rendering.
//!
//! Generates an A4 document with the chart title, a teacher's desk
//! marker, and one seat table per column. Long columns spill onto
//! continuation pages; the footer with generation time and occupancy
//! totals goes on the last page.

use crate::config::Config;
use crate::services::ChartState;
use anyhow::Result;
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, PdfLayerReference, Point};
use std::io::BufWriter;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;

const TITLE_FONT_SIZE: f32 = 18.0;
const HEADING_FONT_SIZE: f32 = 12.0;
const BODY_FONT_SIZE: f32 = 9.0;
const FOOTER_FONT_SIZE: f32 = 8.0;

const ROW_STEP_MM: f32 = 5.0;
const DESK_WIDTH_MM: f32 = 60.0;
const DESK_HEIGHT_MM: f32 = 10.0;

/// Renders the chart as a PDF document and returns the file bytes.
pub fn render_document(chart: &ChartState, config: &Config) -> Result<Vec<u8>> {
    let title = "Classroom Seating Chart";
    let (doc, page1, layer1) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let mut layer = doc.get_page(page1).get_layer(layer1);

    let font_regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow::anyhow!("Failed to load built-in font: {e}"))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow::anyhow!("Failed to load built-in font: {e}"))?;

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    // Title, centered by eye; built-in fonts expose no metrics
    layer.use_text(
        title,
        TITLE_FONT_SIZE,
        Mm(PAGE_WIDTH_MM / 2.0 - 45.0),
        Mm(y),
        &font_bold,
    );
    y -= 12.0;

    // Teacher's desk marker at the front of the room
    let desk_x = (PAGE_WIDTH_MM - DESK_WIDTH_MM) / 2.0;
    draw_rect(&layer, desk_x, y - DESK_HEIGHT_MM, DESK_WIDTH_MM, DESK_HEIGHT_MM);
    layer.use_text(
        "Teacher's Desk",
        BODY_FONT_SIZE,
        Mm(desk_x + 17.0),
        Mm(y - DESK_HEIGHT_MM / 2.0 - 1.5),
        &font_regular,
    );
    y -= DESK_HEIGHT_MM + 10.0;

    for key in chart.grid().column_keys() {
        let Some(column) = chart.grid().column(key) else {
            continue;
        };

        y = ensure_room(&doc, &mut layer, y, ROW_STEP_MM * 3.0);
        layer.use_text(
            config.column_name(key),
            HEADING_FONT_SIZE,
            Mm(MARGIN_MM),
            Mm(y),
            &font_bold,
        );
        y -= ROW_STEP_MM + 1.0;

        for (row, col, seat) in column.iter() {
            y = ensure_room(&doc, &mut layer, y, ROW_STEP_MM);
            let label = format!("Row {} Seat {}", row + 1, col + 1);
            layer.use_text(&label, BODY_FONT_SIZE, Mm(MARGIN_MM + 4.0), Mm(y), &font_regular);
            match seat.student_name() {
                Some(name) => {
                    layer.use_text(name, BODY_FONT_SIZE, Mm(MARGIN_MM + 45.0), Mm(y), &font_bold);
                }
                None => {
                    layer.use_text(
                        "Empty",
                        BODY_FONT_SIZE,
                        Mm(MARGIN_MM + 45.0),
                        Mm(y),
                        &font_regular,
                    );
                }
            }
            y -= ROW_STEP_MM;
        }
        y -= ROW_STEP_MM;
    }

    // Columns that are named but have no layout entry still get a
    // heading, so a half-edited config is visible in the output.
    for (key, name) in &config.column_names {
        if chart.grid().column(key).is_some() {
            continue;
        }
        y = ensure_room(&doc, &mut layer, y, ROW_STEP_MM * 2.0);
        layer.use_text(name, HEADING_FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font_bold);
        y -= ROW_STEP_MM + 1.0;
        layer.use_text("(no data)", BODY_FONT_SIZE, Mm(MARGIN_MM + 4.0), Mm(y), &font_regular);
        y -= ROW_STEP_MM * 2.0;
    }

    let total = chart.grid().total_seats();
    let occupied = chart.grid().occupied_seats();
    let footer = format!(
        "Generated {} | Total seats: {} | Occupied: {} | Empty: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M"),
        total,
        occupied,
        total - occupied
    );
    let _ = ensure_room(&doc, &mut layer, y, ROW_STEP_MM);
    layer.use_text(&footer, FOOTER_FONT_SIZE, Mm(MARGIN_MM), Mm(MARGIN_MM - 6.0), &font_regular);

    let mut buffer = Vec::new();
    doc.save(&mut BufWriter::new(&mut buffer))
        .map_err(|e| anyhow::anyhow!("Failed to serialize PDF: {e}"))?;
    Ok(buffer)
}

/// Starts a continuation page when fewer than `needed` millimetres
/// remain above the bottom margin. Returns the cursor to draw at.
fn ensure_room(
    doc: &printpdf::PdfDocumentReference,
    layer: &mut PdfLayerReference,
    y: f32,
    needed: f32,
) -> f32 {
    if y - needed >= MARGIN_MM {
        return y;
    }
    let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    *layer = doc.get_page(page).get_layer(new_layer);
    PAGE_HEIGHT_MM - MARGIN_MM
}

fn draw_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32) {
    let points = vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + width), Mm(y)), false),
        (Point::new(Mm(x + width), Mm(y + height)), false),
        (Point::new(Mm(x), Mm(y + height)), false),
    ];
    let line = Line {
        points,
        is_closed: true,
    };
    layer.add_line(line);
}
