// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!
//! Every page of a document is drawn into one SVG file, one below the other.
//!

use crate::{
    DocumentRenderer, FilledBox, Line, RenderError, Size, TextAlign, TextOut, colour::Colour,
};
use log::trace;

/// Font used for all text
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Draws a document as SVG
#[derive(Debug, Default)]
pub struct SvgRenderer {
    /// Everything inside the root `<svg>` element
    body: String,

    /// Whether a page `<g>` is still open
    page_open: bool,

    /// The widest page so far
    width: f64,

    /// The sum of all page heights so far
    height: f64,
}

impl SvgRenderer {
    fn close_page(&mut self) {
        if self.page_open {
            self.body.push_str("</g>\n");
            self.page_open = false;
        }
    }
}

impl DocumentRenderer for SvgRenderer {
    fn begin_page(&mut self, size: Size, margin: f64, background: Colour) {
        self.close_page();
        trace!("svg page at y={}", self.height);
        self.body.push_str(&format!(
            r#"<g class="page" transform="translate({}, {})">"#,
            num(margin),
            num(self.height + margin)
        ));
        self.body.push('\n');
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(-margin),
            num(-margin),
            num(size.x),
            num(size.y),
            background.to_hex()
        ));
        self.body.push('\n');
        self.page_open = true;
        self.width = self.width.max(size.x);
        self.height += size.y;
    }

    fn fill_box(&mut self, filled_box: &FilledBox) {
        let position_and_size = filled_box.position_and_size;
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(position_and_size.position.x),
            num(position_and_size.position.y),
            num(position_and_size.width),
            num(position_and_size.height),
            filled_box.fill_colour.to_hex()
        ));
        self.body.push('\n');
    }

    fn stroke_line(&mut self, line: &Line) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            num(line.from.x),
            num(line.from.y),
            num(line.to.x),
            num(line.to.y),
            line.style.colour.to_hex(),
            num(line.style.thickness)
        ));
        self.body.push('\n');
    }

    fn draw_text(&mut self, text: &TextOut) {
        let anchor = match text.align {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
        };
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="hanging">{}</text>"#,
            num(text.top_left.x),
            num(text.top_left.y),
            num(text.font_size),
            text.colour.to_hex(),
            xml_escape(&text.text)
        ));
        self.body.push('\n');
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.close_page();
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
            w = num(self.width),
            h = num(self.height)
        ));
        svg.push('\n');
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        Ok(svg.into_bytes())
    }
}

/// Format a length with at most 2 decimal places (e.g. `12.5`, `200`)
fn num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Escape text for use in XML content and attributes
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{LayoutEngine, LayoutParams, OutputFormat, Palette, render};
    use chrono::{NaiveDate, NaiveDateTime};
    use mission_timeline_core::{Assignment, Mission, MissionGroup, PersonId, plan_mission};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn svg_for(mission: &str, people: usize) -> String {
        let mission = Mission::from(mission).unwrap();
        let assignments = (0..people)
            .map(|n| {
                Assignment::from(
                    mission.clone(),
                    at(10),
                    at(12),
                    PersonId::from(format!("p{n}")).unwrap(),
                    "Ann <Bar>",
                    "0600",
                )
                .unwrap()
            })
            .collect();
        let plan = plan_mission(&MissionGroup {
            mission,
            assignments,
        });
        let engine = LayoutEngine::new(LayoutParams::default(), Palette::default());
        let document = engine.layout(&plan.plans[0]);
        String::from_utf8(render(&document, OutputFormat::Svg).unwrap()).unwrap()
    }

    #[test]
    fn test_num() {
        assert_eq!(num(200.0), "200");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1199.1666), "1199.17");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("Bar & <Cuisine>"), "Bar &amp; &lt;Cuisine&gt;");
    }

    #[test]
    fn pages_are_stacked() {
        let svg = svg_for("Bar & Cuisine", 23);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"<g class="page""#).count(), 2);
        assert_eq!(svg.matches("</g>").count(), 2);
        assert!(svg.contains(r#"width="842" height="1190""#));
        assert!(svg.contains(r#"translate(36, 631)"#));

        // Title once per page, escaped
        assert_eq!(svg.matches("01 August -- Bar &amp; Cuisine").count(), 2);
        assert!(svg.contains("0600 - Ann &lt;Bar&gt;"));
        assert!(svg.contains(">10:00 - 12:00<"));
    }
}
