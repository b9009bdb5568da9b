//! PDF table rendering
//!
//! Renders the admission table as a titled grid PDF: purple header band,
//! 10pt body rows, gold background on rows the highlight predicate marks as
//! VIP. Uses the base-14 Helvetica fonts with WinAnsi encoding, so no font
//! embedding is required.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::app::models::AdmissionRecord;
use crate::constants::{EXPORT_HEADERS, colors};
use crate::{Error, Result};

// A4 portrait in PDF points
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;

const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;
const TITLE_BLOCK_HEIGHT: f32 = 28.0;
const HEADER_ROW_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 18.0;
const CELL_PADDING: f32 = 4.0;

/// Per-column widths; sums to the usable width between the margins
const COLUMN_WIDTHS: [f32; 5] = [175.0, 110.0, 80.0, 75.0, 75.0];

const REGULAR_FONT: Name = Name(b"F1");
const BOLD_FONT: Name = Name(b"F2");

/// Render records as a titled PDF table
///
/// `is_vip_row` is evaluated per row index at render time and decides which
/// rows receive the gold background.
pub fn render_pdf<F>(title: &str, records: &[AdmissionRecord], is_vip_row: F) -> Result<Vec<u8>>
where
    F: Fn(usize) -> bool,
{
    if records.is_empty() {
        return Err(Error::pdf_rendering("No rows to render"));
    }

    let pages = paginate(records.len());

    let mut writer = Pdf::new();
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let info_id = Ref::new(3);
    let regular_id = Ref::new(4);
    let bold_id = Ref::new(5);

    let mut next_ref = 6;
    let page_refs: Vec<(Ref, Ref)> = pages
        .iter()
        .map(|_| {
            let ids = (Ref::new(next_ref), Ref::new(next_ref + 1));
            next_ref += 2;
            ids
        })
        .collect();

    writer.catalog(catalog_id).pages(page_tree_id);
    writer.document_info(info_id).title(TextStr(title));
    writer
        .pages(page_tree_id)
        .kids(page_refs.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    writer
        .type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    writer
        .type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (page_index, ((page_id, content_id), range)) in
        page_refs.iter().zip(pages.iter()).enumerate()
    {
        let mut page = writer.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(*content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(REGULAR_FONT, regular_id);
            fonts.pair(BOLD_FONT, bold_id);
            fonts.finish();
        }
        page.finish();

        let content = render_page(
            title,
            &records[range.clone()],
            range.start,
            page_index == 0,
            &is_vip_row,
        );
        writer.stream(*content_id, &content.finish());
    }

    Ok(writer.finish())
}

/// Split the record count into per-page index ranges
fn paginate(record_count: usize) -> Vec<std::ops::Range<usize>> {
    let first_capacity = rows_fitting(PAGE_HEIGHT - 2.0 * MARGIN - TITLE_BLOCK_HEIGHT);
    let rest_capacity = rows_fitting(PAGE_HEIGHT - 2.0 * MARGIN);

    let mut pages = Vec::new();
    let mut start = 0;
    while start < record_count {
        let capacity = if start == 0 { first_capacity } else { rest_capacity };
        let end = (start + capacity).min(record_count);
        pages.push(start..end);
        start = end;
    }
    pages
}

/// Number of body rows fitting below the header band in `available` points
fn rows_fitting(available: f32) -> usize {
    let rows = ((available - HEADER_ROW_HEIGHT) / ROW_HEIGHT) as usize;
    rows.max(1)
}

/// Build the content stream of one page
fn render_page<F>(
    title: &str,
    records: &[AdmissionRecord],
    first_index: usize,
    is_first_page: bool,
    is_vip_row: &F,
) -> Content
where
    F: Fn(usize) -> bool,
{
    let mut content = Content::new();
    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    let mut top = PAGE_HEIGHT - MARGIN;

    if is_first_page {
        content.begin_text();
        content.set_font(BOLD_FONT, TITLE_SIZE);
        content.set_fill_rgb(0.0, 0.0, 0.0);
        content.next_line(MARGIN, top - TITLE_SIZE);
        content.show(Str(&encode_win_ansi(title)));
        content.end_text();
        top -= TITLE_BLOCK_HEIGHT;
    }

    // Header band
    let (r, g, b) = normalize(colors::HEADER_PURPLE);
    content.set_fill_rgb(r, g, b);
    content.rect(MARGIN, top - HEADER_ROW_HEIGHT, table_width, HEADER_ROW_HEIGHT);
    content.fill_nonzero();
    draw_row_text(
        &mut content,
        &EXPORT_HEADERS,
        top - HEADER_ROW_HEIGHT,
        HEADER_ROW_HEIGHT,
        BOLD_FONT,
        (1.0, 1.0, 1.0),
    );

    // Body rows, VIPs first as background fills
    let body_top = top - HEADER_ROW_HEIGHT;
    for (offset, record) in records.iter().enumerate() {
        let row_top = body_top - offset as f32 * ROW_HEIGHT;
        if is_vip_row(first_index + offset) {
            let (r, g, b) = normalize(colors::VIP_GOLD);
            content.set_fill_rgb(r, g, b);
            content.rect(MARGIN, row_top - ROW_HEIGHT, table_width, ROW_HEIGHT);
            content.fill_nonzero();
        }
        draw_row_text(
            &mut content,
            &record.cells(),
            row_top - ROW_HEIGHT,
            ROW_HEIGHT,
            REGULAR_FONT,
            (0.0, 0.0, 0.0),
        );
    }

    draw_grid(&mut content, top, records.len());

    content
}

/// Draw the five cell texts of one row
fn draw_row_text(
    content: &mut Content,
    cells: &[&str; 5],
    row_bottom: f32,
    row_height: f32,
    font: Name,
    fill: (f32, f32, f32),
) {
    let baseline = row_bottom + (row_height - BODY_SIZE) / 2.0 + 1.5;
    let mut x = MARGIN;

    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        content.begin_text();
        content.set_font(font, BODY_SIZE);
        content.set_fill_rgb(fill.0, fill.1, fill.2);
        content.next_line(x + CELL_PADDING, baseline);
        content.show(Str(&encode_win_ansi(&truncate_to_width(cell, width))));
        content.end_text();
        x += width;
    }
}

/// Draw the grid lines around header and body rows
fn draw_grid(content: &mut Content, table_top: f32, row_count: usize) {
    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    let table_bottom = table_top - HEADER_ROW_HEIGHT - row_count as f32 * ROW_HEIGHT;

    content.set_stroke_rgb(0.8, 0.8, 0.8);
    content.set_line_width(0.5);

    // Horizontal lines
    let mut y = table_top;
    content.move_to(MARGIN, y);
    content.line_to(MARGIN + table_width, y);
    y -= HEADER_ROW_HEIGHT;
    for _ in 0..=row_count {
        content.move_to(MARGIN, y);
        content.line_to(MARGIN + table_width, y);
        y -= ROW_HEIGHT;
    }

    // Vertical lines
    let mut x = MARGIN;
    content.move_to(x, table_top);
    content.line_to(x, table_bottom);
    for width in COLUMN_WIDTHS {
        x += width;
        content.move_to(x, table_top);
        content.line_to(x, table_bottom);
    }

    content.stroke();
}

/// Scale an 8-bit RGB triple into the unit range PDF expects
fn normalize(color: (u8, u8, u8)) -> (f32, f32, f32) {
    (
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
    )
}

/// Truncate a cell value to what fits in its column
///
/// Helvetica averages roughly half the font size per glyph at body size;
/// exact metrics are not worth carrying for a guest list.
fn truncate_to_width(text: &str, column_width: f32) -> String {
    let max_chars = ((column_width - 2.0 * CELL_PADDING) / (BODY_SIZE * 0.5)) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars.saturating_sub(1)).chain(['.']).collect()
}

/// Encode text as WinAnsi, replacing unmappable characters
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
