// SPDX-License-Identifier: MIT

//!
//! The PDF frontend
//!
//! Each page of a document becomes a page of the PDF.  Layout units are
//! PostScript points, which is what PDF pages are measured in.
//!

use crate::{
    DocumentRenderer, FilledBox, Line, RenderError, Size, TextAlign, TextOut,
    approximate_text_width, colour::Colour,
};
use log::trace;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Pt, Rgb,
};
use std::io::BufWriter;

/// The baseline of text sits this far (as a fraction of the font size) below
/// the top of the text
const BASELINE_RATIO: f64 = 0.8;

/// The page currently being drawn on
struct CurrentPage {
    layer: PdfLayerReference,
    height: f64,
    margin: f64,
}

/// Draws a document as PDF
pub struct PdfRenderer {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    page: Option<CurrentPage>,
    page_count: usize,
}

impl PdfRenderer {
    pub fn new(title: &str) -> Result<Self, RenderError> {
        let doc = PdfDocument::empty(title);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|error| RenderError::Pdf(format!("{error:?}")))?;
        Ok(Self {
            doc,
            font,
            page: None,
            page_count: 0,
        })
    }

    /// The number of pages begun so far
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Content-box coordinates to PDF page coordinates (points, origin bottom
/// left)
fn to_page_space(page_height: f64, margin: f64, x: f64, y: f64) -> (f64, f64) {
    (margin + x, page_height - (margin + y))
}

impl CurrentPage {
    fn mm(&self, x: f64, y: f64) -> (Mm, Mm) {
        let (x, y) = to_page_space(self.height, self.margin, x, y);
        (Mm::from(Pt(x)), Mm::from(Pt(y)))
    }

    fn point(&self, x: f64, y: f64) -> Point {
        let (x, y) = self.mm(x, y);
        Point::new(x, y)
    }

    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> printpdf::Line {
        printpdf::Line {
            points: vec![
                (self.point(x, y), false),
                (self.point(x + width, y), false),
                (self.point(x + width, y + height), false),
                (self.point(x, y + height), false),
            ],
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        }
    }
}

fn pdf_colour(colour: Colour) -> Color {
    let (r, g, b) = colour.as_rgb();
    Color::Rgb(Rgb::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        None,
    ))
}

impl DocumentRenderer for PdfRenderer {
    fn begin_page(&mut self, size: Size, margin: f64, background: Colour) {
        self.page_count += 1;
        trace!("pdf page {}", self.page_count);
        let (page_index, layer_index) = self.doc.add_page(
            Mm::from(Pt(size.x)),
            Mm::from(Pt(size.y)),
            format!("Page {}", self.page_count),
        );
        let page = CurrentPage {
            layer: self.doc.get_page(page_index).get_layer(layer_index),
            height: size.y,
            margin,
        };

        page.layer.set_fill_color(pdf_colour(background));
        page.layer.add_shape(page.rectangle(-margin, -margin, size.x, size.y));
        self.page = Some(page);
    }

    fn fill_box(&mut self, filled_box: &FilledBox) {
        let Some(page) = &self.page else {
            return;
        };
        let position_and_size = filled_box.position_and_size;
        page.layer.set_fill_color(pdf_colour(filled_box.fill_colour));
        page.layer.add_shape(page.rectangle(
            position_and_size.position.x,
            position_and_size.position.y,
            position_and_size.width,
            position_and_size.height,
        ));
    }

    fn stroke_line(&mut self, line: &Line) {
        let Some(page) = &self.page else {
            return;
        };
        page.layer.set_outline_color(pdf_colour(line.style.colour));
        page.layer.set_outline_thickness(line.style.thickness);
        page.layer.add_shape(printpdf::Line {
            points: vec![
                (page.point(line.from.x, line.from.y), false),
                (page.point(line.to.x, line.to.y), false),
            ],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }

    fn draw_text(&mut self, text: &TextOut) {
        let Some(page) = &self.page else {
            return;
        };
        let x = match text.align {
            TextAlign::Start => text.top_left.x,
            TextAlign::Middle => {
                text.top_left.x - (approximate_text_width(text.font_size, &text.text) / 2.0)
            }
        };
        let (x, y) = page.mm(x, text.top_left.y + (text.font_size * BASELINE_RATIO));
        page.layer.set_fill_color(pdf_colour(text.colour));
        page.layer.use_text(text.text.as_str(), text.font_size, x, y, &self.font);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut writer = BufWriter::new(Vec::new());
        self.doc
            .save(&mut writer)
            .map_err(|error| RenderError::Pdf(format!("{error:?}")))?;
        writer
            .into_inner()
            .map_err(|error| RenderError::Pdf(error.to_string()))
    }
}
