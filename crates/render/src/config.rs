//! Renderer configuration.
//!
//! All lengths are millimetres, measured from the top-left corner of the page.

use crate::error::{RenderError, RenderResult};
use crate::layout::TableSpec;

/// Page size, margins and break position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    /// A cell that would extend into this band starts a new page.
    pub break_margin_mm: f32,
    /// Distance of the footer cell's top edge from the bottom of the page.
    pub footer_offset_mm: f32,
}

impl PageGeometry {
    /// A4 portrait.
    pub const A4: PageGeometry = PageGeometry {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_top_mm: 10.0,
        margin_right_mm: 10.0,
        break_margin_mm: 20.0,
        footer_offset_mm: 15.0,
    };

    pub fn printable_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Lowest y a cell may reach before a page break.
    pub fn break_at_mm(&self) -> f32 {
        self.height_mm - self.break_margin_mm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// Everything the composer needs besides the invoice itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub page: PageGeometry,
    /// Title printed at the top of every page.
    pub title: String,
    pub currency_symbol: String,
    pub line_height_mm: f32,
    /// Vertical gap after each block.
    pub block_gap_mm: f32,
    /// Horizontal text padding inside a cell.
    pub cell_padding_mm: f32,
    pub title_size_pt: f32,
    pub body_size_pt: f32,
    pub footer_size_pt: f32,
    /// Stroke width of table borders.
    pub border_width_mm: f32,
    pub table: TableSpec,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::A4,
            title: "INVOICE".to_string(),
            currency_symbol: "$".to_string(),
            line_height_mm: 10.0,
            block_gap_mm: 10.0,
            cell_padding_mm: 1.0,
            title_size_pt: 12.0,
            body_size_pt: 12.0,
            footer_size_pt: 8.0,
            border_width_mm: 0.2,
            table: TableSpec::line_items(),
        }
    }
}

impl RenderConfig {
    /// Reject geometry that cannot hold the table or a single row.
    pub fn validate(&self) -> RenderResult<()> {
        let page = &self.page;
        if page.width_mm <= 0.0 || page.height_mm <= 0.0 {
            return Err(RenderError::InvalidConfig("page size must be positive".into()));
        }
        if page.printable_width_mm() <= 0.0 {
            return Err(RenderError::InvalidConfig(
                "margins leave no printable width".into(),
            ));
        }
        if self.line_height_mm <= 0.0 || self.table.row_height_mm <= 0.0 {
            return Err(RenderError::InvalidConfig("row heights must be positive".into()));
        }
        if self.table.columns.is_empty() {
            return Err(RenderError::InvalidConfig("item table has no columns".into()));
        }
        if self.table.width_mm() > page.printable_width_mm() + f32::EPSILON {
            return Err(RenderError::InvalidConfig(format!(
                "item table is {}mm wide but only {}mm are printable",
                self.table.width_mm(),
                page.printable_width_mm()
            )));
        }

        // Header, one block line and a table header plus row must fit on one page.
        let body_top = page.margin_top_mm + self.line_height_mm + self.block_gap_mm;
        let needed = self.line_height_mm.max(self.table.row_height_mm * 2.0);
        if body_top + needed > page.break_at_mm() {
            return Err(RenderError::InvalidConfig(
                "page is too short for the header and one table row".into(),
            ));
        }
        Ok(())
    }
}
