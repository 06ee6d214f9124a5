//! Standard Type1 fonts and their glyph advance widths.

use pdf_writer::Name;

use crate::winansi;

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Glyph width used for WinAnsi bytes with no entry below.
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths (1/1000 em) for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Helvetica and Helvetica-Bold widths for WinAnsi bytes above ASCII, as
/// `(byte, regular, bold)`, sorted by byte.
#[rustfmt::skip]
const WINANSI_EXTRA: [(u8, u16, u16); 27] = [
    (0x80, 556, 556),   // Euro
    (0x92, 222, 278),   // quoteright
    (0x95, 350, 350),   // bullet
    (0x96, 556, 556),   // endash
    (0x97, 1000, 1000), // emdash
    (0xA0, 278, 278),   // nbsp
    (0xA3, 556, 556),   // sterling
    (0xA7, 556, 556),   // section
    (0xA9, 737, 737),   // copyright
    (0xAA, 370, 370),   // ordfeminine
    (0xAE, 737, 737),   // registered
    (0xB0, 400, 400),   // degree
    (0xBA, 365, 365),   // ordmasculine
    (0xC9, 667, 667),   // Eacute
    (0xD1, 722, 722),   // Ntilde
    (0xDF, 611, 611),   // germandbls
    (0xE0, 556, 556),   // agrave
    (0xE1, 556, 556),   // aacute
    (0xE7, 500, 556),   // ccedilla
    (0xE8, 556, 556),   // egrave
    (0xE9, 556, 556),   // eacute
    (0xED, 278, 278),   // iacute
    (0xF1, 556, 611),   // ntilde
    (0xF3, 556, 611),   // oacute
    (0xF6, 556, 611),   // odieresis
    (0xFA, 556, 611),   // uacute
    (0xFC, 556, 611),   // udieresis
];

/// The three faces used on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Italic,
}

impl FontFace {
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Italic];

    /// PostScript name of the standard font.
    pub fn base_font(self) -> Name<'static> {
        match self {
            FontFace::Regular => Name(b"Helvetica"),
            FontFace::Bold => Name(b"Helvetica-Bold"),
            FontFace::Italic => Name(b"Helvetica-Oblique"),
        }
    }

    /// Resource name used inside content streams.
    pub fn resource_name(self) -> Name<'static> {
        match self {
            FontFace::Regular => Name(b"F1"),
            FontFace::Bold => Name(b"F2"),
            FontFace::Italic => Name(b"F3"),
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            // Oblique shares the upright metrics.
            FontFace::Regular | FontFace::Italic => &HELVETICA,
            FontFace::Bold => &HELVETICA_BOLD,
        }
    }

    fn glyph_width(self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7E => self.widths()[usize::from(byte - 0x20)],
            _ => WINANSI_EXTRA
                .binary_search_by_key(&byte, |(b, _, _)| *b)
                .map(|i| {
                    let (_, regular, bold) = WINANSI_EXTRA[i];
                    if self == FontFace::Bold { bold } else { regular }
                })
                .unwrap_or(FALLBACK_WIDTH),
        }
    }

    /// Width of `text` set at `size_pt`, in millimetres.
    pub fn text_width_mm(self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = winansi::encode(text)
            .into_iter()
            .map(|b| u32::from(self.glyph_width(b)))
            .sum();
        units as f32 * size_pt / 1000.0 / PT_PER_MM
    }
}
