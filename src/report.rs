//! PDF rendering of the inventory table.
//!
//! The table is laid out on US Letter pages: a grey header row with light
//! bold text, then one beige row per product, all boxed by a black grid. Rows
//! that do not fit continue on a new page that repeats the header.

use printpdf::{
    BuiltinFont, Color, Greyscale, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference,
    Point, Rect, Rgb,
};
use thiserror::Error;

use crate::domain::product::Product;

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 15.0;
const HEADER_HEIGHT: f32 = 11.0;
const ROW_HEIGHT: f32 = 8.0;
const CELL_PADDING: f32 = 1.5;
const HEADER_FONT_SIZE: f32 = 12.0;
const BODY_FONT_SIZE: f32 = 9.0;
const PT_TO_MM: f32 = 0.3528;
/// Rough Helvetica advance per character as a fraction of the font size.
const AVG_CHAR_WIDTH: f32 = 0.55;

const HEADERS: [&str; 5] = ["ID", "Name", "Description", "Price", "Stock"];
const COLUMN_WIDTHS: [f32; 5] = [15.0, 45.0, 75.0, 25.0, 25.0];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render PDF: {0}")]
    Render(String),
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render `products` as a PDF table, returning the document bytes.
///
/// Rows keep the order of the input slice.
pub fn render_inventory_report(products: &[Product]) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Inventory Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Render(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Render(e.to_string()))?,
    };

    let rows: Vec<[String; 5]> = products.iter().map(row_cells).collect();
    let mut chunks = rows.chunks(rows_per_page()).peekable();
    let mut current = doc.get_page(page).get_layer(layer);

    if rows.is_empty() {
        draw_table_page(&current, &fonts, &[]);
    }

    while let Some(chunk) = chunks.next() {
        draw_table_page(&current, &fonts, chunk);
        if chunks.peek().is_some() {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current = doc.get_page(page).get_layer(layer);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::Render(e.to_string()))
}

fn rows_per_page() -> usize {
    let available = PAGE_HEIGHT - 2.0 * MARGIN - HEADER_HEIGHT;
    ((available / ROW_HEIGHT).floor() as usize).max(1)
}

fn row_cells(product: &Product) -> [String; 5] {
    [
        product.id.to_string(),
        product.name.clone(),
        product.description.clone(),
        product.price.to_string(),
        product.stock.to_string(),
    ]
}

fn table_left() -> f32 {
    (PAGE_WIDTH - COLUMN_WIDTHS.iter().sum::<f32>()) / 2.0
}

fn draw_table_page(layer: &PdfLayerReference, fonts: &Fonts, rows: &[[String; 5]]) {
    let left = table_left();
    let right = left + COLUMN_WIDTHS.iter().sum::<f32>();
    let top = PAGE_HEIGHT - MARGIN;
    let header_bottom = top - HEADER_HEIGHT;
    let bottom = header_bottom - ROW_HEIGHT * rows.len() as f32;

    // backgrounds
    layer.set_fill_color(Color::Greyscale(Greyscale::new(0.5, None)));
    layer.add_rect(Rect::new(Mm(left), Mm(header_bottom), Mm(right), Mm(top)));
    if !rows.is_empty() {
        layer.set_fill_color(Color::Rgb(Rgb::new(0.96, 0.96, 0.86, None)));
        layer.add_rect(Rect::new(Mm(left), Mm(bottom), Mm(right), Mm(header_bottom)));
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None)));
    draw_row(
        layer,
        &fonts.bold,
        HEADER_FONT_SIZE,
        header_bottom,
        HEADER_HEIGHT,
        &HEADERS.map(String::from),
    );

    layer.set_fill_color(Color::Greyscale(Greyscale::new(0.0, None)));
    for (index, row) in rows.iter().enumerate() {
        let row_bottom = header_bottom - ROW_HEIGHT * (index + 1) as f32;
        draw_row(
            layer,
            &fonts.regular,
            BODY_FONT_SIZE,
            row_bottom,
            ROW_HEIGHT,
            row,
        );
    }

    draw_grid(layer, left, right, top, header_bottom, rows.len());
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_size: f32,
    row_bottom: f32,
    row_height: f32,
    cells: &[String; 5],
) {
    let cap_height = font_size * PT_TO_MM * 0.7;
    let baseline = row_bottom + (row_height - cap_height) / 2.0;
    let mut cell_left = table_left();

    for (text, width) in cells.iter().zip(COLUMN_WIDTHS) {
        let text = fit_to_width(text, width, font_size);
        let text_width = estimated_width(&text, font_size);
        let x = cell_left + ((width - text_width) / 2.0).max(CELL_PADDING);
        layer.use_text(text, font_size, Mm(x), Mm(baseline), font);
        cell_left += width;
    }
}

fn draw_grid(
    layer: &PdfLayerReference,
    left: f32,
    right: f32,
    top: f32,
    header_bottom: f32,
    row_count: usize,
) {
    layer.set_outline_color(Color::Greyscale(Greyscale::new(0.0, None)));
    layer.set_outline_thickness(1.0);

    let bottom = header_bottom - ROW_HEIGHT * row_count as f32;

    let mut horizontals = vec![top, header_bottom];
    horizontals.extend((1..=row_count).map(|i| header_bottom - ROW_HEIGHT * i as f32));
    for y in horizontals {
        layer.add_line(segment(left, y, right, y));
    }

    let mut x = left;
    layer.add_line(segment(x, top, x, bottom));
    for width in COLUMN_WIDTHS {
        x += width;
        layer.add_line(segment(x, top, x, bottom));
    }
}

fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    }
}

fn estimated_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * PT_TO_MM * AVG_CHAR_WIDTH
}

/// Shorten `text` with a trailing ellipsis so it fits inside a cell.
fn fit_to_width(text: &str, cell_width: f32, font_size: f32) -> String {
    let per_char = font_size * PT_TO_MM * AVG_CHAR_WIDTH;
    let max_chars = ((cell_width - 2.0 * CELL_PADDING) / per_char).floor() as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
