//! Millimetre-based drawing wrapper around a pdf-writer content stream.
//!
//! Callers use top-left origin coordinates in millimetres; the canvas converts
//! them to PDF user space (points, bottom-left origin).

use pdf_writer::{Content, Str};

use crate::layout::Align;
use crate::metrics::{FontFace, PT_PER_MM};
use crate::winansi;

/// Ratio of the font size between a cell's vertical centre and the baseline.
const BASELINE_SHIFT: f32 = 0.3;

/// Canvas for one page.
pub struct PageCanvas {
    content: Content,
    page_height_mm: f32,
    font: FontFace,
    font_size_pt: f32,
}

impl PageCanvas {
    pub fn new(page_height_mm: f32) -> Self {
        Self {
            content: Content::new(),
            page_height_mm,
            font: FontFace::Regular,
            font_size_pt: 12.0,
        }
    }

    /// Encoded content stream.
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    fn x_pt(x_mm: f32) -> f32 {
        x_mm * PT_PER_MM
    }

    fn y_pt(&self, y_mm: f32) -> f32 {
        (self.page_height_mm - y_mm) * PT_PER_MM
    }

    pub fn set_font(&mut self, font: FontFace, size_pt: f32) {
        self.font = font;
        self.font_size_pt = size_pt;
    }

    pub fn set_line_width(&mut self, width_mm: f32) {
        self.content.set_line_width(width_mm * PT_PER_MM);
    }

    /// Stroke a rectangle whose top-left corner is `(x_mm, y_mm)`.
    pub fn stroke_rect(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) {
        let bottom = self.y_pt(y_mm + height_mm);
        self.content.rect(
            Self::x_pt(x_mm),
            bottom,
            width_mm * PT_PER_MM,
            height_mm * PT_PER_MM,
        );
        self.content.stroke();
    }

    /// Draw `text` with its baseline starting at `(x_mm, baseline_mm)`.
    pub fn draw_string(&mut self, x_mm: f32, baseline_mm: f32, text: &str) {
        let encoded = winansi::encode(text);
        let y = self.y_pt(baseline_mm);
        self.content.begin_text();
        self.content
            .set_font(self.font.resource_name(), self.font_size_pt);
        self.content.next_line(Self::x_pt(x_mm), y);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    /// Draw `text` inside a cell box, vertically centred. Left-aligned text is
    /// inset by `padding_mm`.
    #[allow(clippy::too_many_arguments)]
    pub fn cell_text(
        &mut self,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
        text: &str,
        align: Align,
        padding_mm: f32,
    ) {
        if text.is_empty() {
            return;
        }
        let text_width = self.font.text_width_mm(text, self.font_size_pt);
        let x = match align {
            Align::Left => x_mm + padding_mm,
            Align::Center => x_mm + (width_mm - text_width) / 2.0,
        };
        let size_mm = self.font_size_pt / PT_PER_MM;
        let baseline = y_mm + height_mm / 2.0 + BASELINE_SHIFT * size_mm;
        self.draw_string(x, baseline, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn text_is_emitted_with_font_resource() {
        let mut canvas = PageCanvas::new(297.0);
        canvas.set_font(FontFace::Bold, 12.0);
        canvas.cell_text(10.0, 10.0, 190.0, 10.0, "INVOICE", Align::Center, 1.0);
        let bytes = canvas.finish();
        assert!(contains(&bytes, b"/F2 12 Tf"));
        assert!(contains(&bytes, b"(INVOICE) Tj"));
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut canvas = PageCanvas::new(297.0);
        canvas.cell_text(10.0, 10.0, 30.0, 10.0, "", Align::Left, 1.0);
        assert!(canvas.finish().is_empty());
    }

    #[test]
    fn rectangles_are_flipped_to_pdf_space() {
        let mut canvas = PageCanvas::new(100.0);
        canvas.stroke_rect(0.0, 0.0, 25.4, 25.4);
        let text = String::from_utf8(canvas.finish()).unwrap();

        let rect = text.lines().find(|l| l.ends_with(" re")).unwrap();
        let operands: Vec<f32> = rect
            .split_whitespace()
            .take(4)
            .map(|n| n.parse().unwrap())
            .collect();
        // One-inch box at the top-left corner: its bottom edge sits at
        // (100 - 25.4) mm from the bottom, i.e. 211.46 pt.
        let expected = [0.0, 74.6 * PT_PER_MM, 72.0, 72.0];
        for (got, want) in operands.iter().zip(expected) {
            assert!((got - want).abs() < 0.01, "{rect}");
        }
        assert_eq!(operands.len(), 4);
        assert!(text.lines().any(|l| l == "S"));
    }
}
