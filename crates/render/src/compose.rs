//! Layout pass: places fixed-size cells onto pages.
//!
//! The result is a display list per page. Nothing here knows about PDF; a
//! [`RenderBackend`](crate::backend::RenderBackend) paints the pages afterwards.

use invoicer_invoicing::Invoice;

use crate::config::RenderConfig;
use crate::layout::{item_row, Align, TableSpec};
use crate::metrics::FontFace;

/// A cell at an absolute position (millimetres, top-left origin).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
    pub text: String,
    pub font: FontFace,
    pub size_pt: f32,
    pub align: Align,
    pub border: bool,
}

/// All cells of one page, page header and footer included.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    /// 1-based page number.
    pub number: usize,
    pub cells: Vec<PlacedCell>,
}

impl ComposedPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.text.as_str())
    }

    /// Cell texts grouped by row (cells sharing a top edge), top to bottom.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        let mut rows: Vec<(f32, Vec<&str>)> = Vec::new();
        for cell in &self.cells {
            match rows.iter_mut().find(|(y, _)| (*y - cell.y_mm).abs() < 0.01) {
                Some((_, texts)) => texts.push(&cell.text),
                None => rows.push((cell.y_mm, vec![cell.text.as_str()])),
            }
        }
        rows.sort_by(|a, b| a.0.total_cmp(&b.0));
        rows.into_iter().map(|(_, texts)| texts).collect()
    }
}

/// Lay out `invoice` into pages.
pub fn compose(invoice: &Invoice, config: &RenderConfig) -> Vec<ComposedPage> {
    let meta = invoice.metadata();
    let currency = config.currency_symbol.as_str();
    let mut page = Composer::start(config);

    page.line(format!("Date: {}", meta.date.format("%Y-%m-%d")), FontFace::Regular);
    page.line(format!("Customer REF: {}", meta.customer_ref), FontFace::Regular);
    page.line(format!("Our REF: {}", meta.our_ref), FontFace::Regular);
    page.gap();

    page.line("Bill To:", FontFace::Bold);
    page.line(meta.client_name.as_str(), FontFace::Regular);
    page.line(meta.client_address.as_str(), FontFace::Regular);
    page.gap();

    let rows: Vec<Vec<String>> = invoice
        .items()
        .iter()
        .map(|item| item_row(item, currency))
        .collect();
    page.table(&config.table, &rows);
    page.gap();

    page.line(
        format!("Total Amount: {}", invoice.total().format_with(currency)),
        FontFace::Bold,
    );

    page.finish()
}

struct Composer<'a> {
    config: &'a RenderConfig,
    done: Vec<ComposedPage>,
    current: ComposedPage,
    y: f32,
    /// False until something besides the page header sits on the current page.
    has_body: bool,
}

impl<'a> Composer<'a> {
    fn start(config: &'a RenderConfig) -> Self {
        let mut composer = Self {
            config,
            done: Vec::new(),
            current: ComposedPage {
                number: 1,
                cells: Vec::new(),
            },
            y: 0.0,
            has_body: false,
        };
        composer.page_header();
        composer
    }

    fn page_header(&mut self) {
        let c = self.config;
        self.y = c.page.margin_top_mm;
        self.place(
            c.page.margin_left_mm,
            c.page.printable_width_mm(),
            c.line_height_mm,
            c.title.clone(),
            FontFace::Bold,
            c.title_size_pt,
            Align::Center,
            false,
        );
        self.y += c.line_height_mm + c.block_gap_mm;
        self.has_body = false;
    }

    fn page_footer(&mut self) {
        let c = self.config;
        self.y = c.page.height_mm - c.page.footer_offset_mm;
        let text = format!("Page {}", self.current.number);
        self.place(
            c.page.margin_left_mm,
            c.page.printable_width_mm(),
            c.line_height_mm,
            text,
            FontFace::Italic,
            c.footer_size_pt,
            Align::Center,
            false,
        );
    }

    fn new_page(&mut self) {
        self.page_footer();
        let next = ComposedPage {
            number: self.current.number + 1,
            cells: Vec::new(),
        };
        self.done.push(std::mem::replace(&mut self.current, next));
        tracing::debug!(page = self.current.number, "page break");
        self.page_header();
    }

    /// Start a new page when `height` more does not fit, unless the page is
    /// still empty. Returns whether a break happened.
    fn ensure_room(&mut self, height: f32) -> bool {
        if self.has_body && self.y + height > self.config.page.break_at_mm() {
            self.new_page();
            true
        } else {
            false
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &mut self,
        x_mm: f32,
        width_mm: f32,
        height_mm: f32,
        text: String,
        font: FontFace,
        size_pt: f32,
        align: Align,
        border: bool,
    ) {
        self.current.cells.push(PlacedCell {
            x_mm,
            y_mm: self.y,
            width_mm,
            height_mm,
            text,
            font,
            size_pt,
            align,
            border,
        });
    }

    /// Full-width, borderless, left-aligned text line.
    fn line(&mut self, text: impl Into<String>, font: FontFace) {
        let c = self.config;
        self.ensure_room(c.line_height_mm);
        self.place(
            c.page.margin_left_mm,
            c.page.printable_width_mm(),
            c.line_height_mm,
            text.into(),
            font,
            c.body_size_pt,
            Align::Left,
            false,
        );
        self.y += c.line_height_mm;
        self.has_body = true;
    }

    fn gap(&mut self) {
        self.y += self.config.block_gap_mm;
    }

    fn table(&mut self, spec: &TableSpec, rows: &[Vec<String>]) {
        // Keep the header row together with at least one body row.
        let lead = if rows.is_empty() { 1.0 } else { 2.0 };
        self.ensure_room(spec.row_height_mm * lead);
        self.table_header(spec);

        for row in rows {
            if self.ensure_room(spec.row_height_mm) {
                self.table_header(spec);
            }
            let mut x = self.config.page.margin_left_mm;
            for (column, text) in spec.columns.iter().zip(row) {
                self.place(
                    x,
                    column.width_mm,
                    spec.row_height_mm,
                    text.clone(),
                    FontFace::Regular,
                    self.config.body_size_pt,
                    column.align,
                    true,
                );
                x += column.width_mm;
            }
            self.y += spec.row_height_mm;
        }
    }

    fn table_header(&mut self, spec: &TableSpec) {
        let mut x = self.config.page.margin_left_mm;
        for column in &spec.columns {
            self.place(
                x,
                column.width_mm,
                spec.row_height_mm,
                column.header.clone(),
                FontFace::Bold,
                self.config.body_size_pt,
                Align::Center,
                true,
            );
            x += column.width_mm;
        }
        self.y += spec.row_height_mm;
        self.has_body = true;
    }

    fn finish(mut self) -> Vec<ComposedPage> {
        self.page_footer();
        self.done.push(self.current);
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use invoicer_invoicing::{Collector, InvoiceDetails};

    fn details() -> InvoiceDetails {
        InvoiceDetails {
            client_name: "Acme".to_string(),
            client_address: "1 Main St".to_string(),
            customer_ref: "C100".to_string(),
            our_ref: "R1".to_string(),
        }
    }

    fn invoice_with(count: usize) -> Invoice {
        let mut collector = Collector::new();
        for n in 1..=count {
            collector
                .add_item(&n.to_string(), &format!("Item {n}"), "1", "2.50")
                .unwrap();
        }
        collector
            .generate(&details(), NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
            .unwrap()
    }

    #[test]
    fn single_page_layout_follows_block_order() {
        let mut collector = Collector::new();
        collector.add_item("1", "Widget", "3", "9.99").unwrap();
        let invoice = collector
            .generate(&details(), NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
            .unwrap();

        let pages = compose(&invoice, &RenderConfig::default());
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0].rows(),
            vec![
                vec!["INVOICE"],
                vec!["Date: 2024-05-17"],
                vec!["Customer REF: C100"],
                vec!["Our REF: R1"],
                vec!["Bill To:"],
                vec!["Acme"],
                vec!["1 Main St"],
                vec!["Item nº", "Description", "Quantity", "Unit Price", "Total"],
                vec!["1", "Widget", "3", "$9.99", "$29.97"],
                vec!["Total Amount: $29.97"],
                vec!["Page 1"],
            ]
        );
    }

    #[test]
    fn positions_match_fixed_geometry() {
        let pages = compose(&invoice_with(1), &RenderConfig::default());
        let cells = &pages[0].cells;

        let title = &cells[0];
        assert_eq!((title.y_mm, title.font, title.align), (10.0, FontFace::Bold, Align::Center));

        let header = cells.iter().find(|c| c.text == "Item nº").unwrap();
        assert_eq!((header.x_mm, header.y_mm, header.width_mm), (10.0, 110.0, 30.0));
        assert!(header.border);

        let description = cells.iter().find(|c| c.text == "Item 1").unwrap();
        assert_eq!((description.x_mm, description.y_mm), (40.0, 120.0));
        assert_eq!(description.align, Align::Left);

        let footer = cells.last().unwrap();
        assert_eq!(footer.text, "Page 1");
        assert_eq!((footer.y_mm, footer.font, footer.size_pt), (282.0, FontFace::Italic, 8.0));
    }

    #[test]
    fn overflow_paginates_and_repeats_header() {
        let pages = compose(&invoice_with(40), &RenderConfig::default());
        assert_eq!(pages.len(), 3);

        for (index, page) in pages.iter().enumerate() {
            let texts: Vec<&str> = page.texts().collect();
            assert_eq!(page.number, index + 1);
            assert_eq!(texts.first(), Some(&"INVOICE"));
            assert_eq!(texts.last().copied(), Some(format!("Page {}", index + 1).as_str()));
            assert_eq!(texts.iter().filter(|t| **t == "Description").count(), 1);
            for cell in &page.cells {
                if cell.border {
                    assert!(cell.y_mm + cell.height_mm <= 277.0);
                }
            }
        }

        // Rows: 15 on the first page, 23 on the next, the rest after.
        let per_page: Vec<usize> = pages
            .iter()
            .map(|p| p.texts().filter(|t| t.starts_with("Item ") && *t != "Item nº").count())
            .collect();
        assert_eq!(per_page, vec![15, 23, 2]);

        let all: Vec<String> = pages
            .iter()
            .flat_map(|p| p.texts())
            .filter(|t| t.starts_with("Item ") && *t != "Item nº")
            .map(str::to_string)
            .collect();
        let expected: Vec<String> = (1..=40).map(|n| format!("Item {n}")).collect();
        assert_eq!(all, expected);

        let last: Vec<&str> = pages[2].texts().collect();
        assert!(last.contains(&"Total Amount: $100.00"));
    }
}
