//! Rendering backends: paint composed pages into a document.

use chrono::{Datelike, NaiveDate};
use pdf_writer::{Date, Name, Pdf, Rect, Ref, TextStr};

use crate::canvas::PageCanvas;
use crate::compose::ComposedPage;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::metrics::{FontFace, PT_PER_MM};

/// Document-level metadata written alongside the pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub created: NaiveDate,
}

/// Turns composed pages into document bytes.
pub trait RenderBackend {
    fn render_pages(
        &self,
        pages: &[ComposedPage],
        info: &DocumentInfo,
        config: &RenderConfig,
    ) -> RenderResult<Vec<u8>>;
}

/// PDF 1.7 output using the standard Helvetica family.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfBackend;

const CATALOG_ID: i32 = 1;
const PAGE_TREE_ID: i32 = 2;
const INFO_ID: i32 = 3;
/// Fonts take the next three ids, pages follow.
const FIRST_FONT_ID: i32 = 4;

fn font_ref(face: FontFace) -> Ref {
    let offset = match face {
        FontFace::Regular => 0,
        FontFace::Bold => 1,
        FontFace::Italic => 2,
    };
    Ref::new(FIRST_FONT_ID + offset)
}

impl RenderBackend for PdfBackend {
    fn render_pages(
        &self,
        pages: &[ComposedPage],
        info: &DocumentInfo,
        config: &RenderConfig,
    ) -> RenderResult<Vec<u8>> {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(CATALOG_ID);
        let page_tree_id = Ref::new(PAGE_TREE_ID);
        let mut next_id = FIRST_FONT_ID + FontFace::ALL.len() as i32;
        let mut next_ref = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };

        // (page, content stream) per composed page.
        let ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (next_ref(), next_ref())).collect();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(ids.iter().map(|(page_id, _)| *page_id))
            .count(ids.len() as i32);

        for face in FontFace::ALL {
            pdf.type1_font(font_ref(face))
                .base_font(face.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let media_box = Rect::new(
            0.0,
            0.0,
            config.page.width_mm * PT_PER_MM,
            config.page.height_mm * PT_PER_MM,
        );

        for (page, (page_id, content_id)) in pages.iter().zip(&ids) {
            {
                let mut writer = pdf.page(*page_id);
                writer.media_box(media_box);
                writer.parent(page_tree_id);
                writer.contents(*content_id);
                let mut resources = writer.resources();
                let mut fonts = resources.fonts();
                for face in FontFace::ALL {
                    fonts.pair(face.resource_name(), font_ref(face));
                }
            }

            let stream = paint(page, config);
            pdf.stream(*content_id, &stream);
        }

        let created = Date::new(info.created.year().clamp(0, 9999) as u16)
            .month(info.created.month() as u8)
            .day(info.created.day() as u8);
        pdf.document_info(Ref::new(INFO_ID))
            .title(TextStr(&info.title))
            .creator(TextStr("invoicer"))
            .creation_date(created);

        Ok(pdf.finish())
    }
}

fn paint(page: &ComposedPage, config: &RenderConfig) -> Vec<u8> {
    let mut canvas = PageCanvas::new(config.page.height_mm);
    canvas.set_line_width(config.border_width_mm);
    for cell in &page.cells {
        if cell.border {
            canvas.stroke_rect(cell.x_mm, cell.y_mm, cell.width_mm, cell.height_mm);
        }
        canvas.set_font(cell.font, cell.size_pt);
        canvas.cell_text(
            cell.x_mm,
            cell.y_mm,
            cell.width_mm,
            cell.height_mm,
            &cell.text,
            cell.align,
            config.cell_padding_mm,
        );
    }
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::PlacedCell;
    use crate::layout::Align;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn page(number: usize, text: &str) -> ComposedPage {
        ComposedPage {
            number,
            cells: vec![PlacedCell {
                x_mm: 10.0,
                y_mm: 10.0,
                width_mm: 190.0,
                height_mm: 10.0,
                text: text.to_string(),
                font: FontFace::Regular,
                size_pt: 12.0,
                align: Align::Left,
                border: false,
            }],
        }
    }

    #[test]
    fn every_page_carries_its_font_resources() {
        let info = DocumentInfo {
            title: "Invoice C1".to_string(),
            created: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        };
        let pages = [page(1, "first"), page(2, "second")];
        let bytes = PdfBackend
            .render_pages(&pages, &info, &RenderConfig::default())
            .unwrap();

        assert_eq!(count(&bytes, b"/Type /Page\n"), 2);
        assert_eq!(count(&bytes, b"/Resources"), 2);
        assert_eq!(count(&bytes, b"/F3 6 0 R"), 2);
        assert_eq!(count(&bytes, b"(first) Tj"), 1);
        assert_eq!(count(&bytes, b"(second) Tj"), 1);
    }
}
