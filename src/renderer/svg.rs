//! SVG generation from resolved decks
//!
//! The deck file is one standalone SVG document; each slide is a nested
//! `<svg>` page stacked vertically, with its own `viewBox` in canvas units
//! so all primitive coordinates pass through unscaled.

use crate::deck::{Align, Deck, DrawPrimitive, Slide, TextStyle, VAlign, CANVAS_H, CANVAS_W};

use super::SvgConfig;

/// Average glyph width as a fraction of the font size, for word wrapping
const GLYPH_W: f64 = 0.52;
/// Line height as a fraction of the font size
const LINE_H: f64 = 1.3;

/// Build SVG pages incrementally
struct DeckWriter {
    config: SvgConfig,
    out: String,
    indent: usize,
}

impl DeckWriter {
    fn new(config: SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, content: &str) {
        if self.config.pretty_print {
            self.out.push_str(&"  ".repeat(self.indent));
        }
        self.out.push_str(content);
        if self.config.pretty_print {
            self.out.push('\n');
        }
    }

    fn write_slide(&mut self, slide: &Slide, index: usize) {
        let px = self.config.px_per_unit;
        self.line(&format!(
            r#"<svg x="0" y="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            fmt(index as f64 * CANVAS_H * px),
            fmt(CANVAS_W * px),
            fmt(CANVAS_H * px),
            fmt(CANVAS_W),
            fmt(CANVAS_H),
        ));
        self.indent += 1;

        self.line(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt(CANVAS_W),
            fmt(CANVAS_H),
            slide.background,
        ));
        for primitive in &slide.primitives {
            self.write_primitive(primitive);
        }

        self.indent -= 1;
        self.line("</svg>");
    }

    fn write_primitive(&mut self, primitive: &DrawPrimitive) {
        match primitive {
            DrawPrimitive::Rect {
                x,
                y,
                w,
                h,
                fill,
                alpha,
            } => {
                self.line(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                    fmt(*x),
                    fmt(*y),
                    fmt(*w),
                    fmt(*h),
                    fill,
                    opacity_attr(*alpha),
                ));
            }
            DrawPrimitive::Oval {
                x,
                y,
                w,
                h,
                fill,
                alpha,
            } => {
                self.line(&format!(
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"{}/>"#,
                    fmt(x + w / 2.0),
                    fmt(y + h / 2.0),
                    fmt(w / 2.0),
                    fmt(h / 2.0),
                    fill,
                    opacity_attr(*alpha),
                ));
            }
            DrawPrimitive::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                self.line(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    fmt(*x1),
                    fmt(*y1),
                    fmt(*x2),
                    fmt(*y2),
                    color,
                    fmt(width / 72.0),
                ));
            }
            DrawPrimitive::Text {
                x,
                y,
                w,
                h,
                content,
                style,
            } => self.write_text(*x, *y, *w, *h, content, style),
            DrawPrimitive::Image { x, y, w, h, href } => {
                self.line(&format!(
                    r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet" href="{}"/>"#,
                    fmt(*x),
                    fmt(*y),
                    fmt(*w),
                    fmt(*h),
                    href,
                ));
            }
        }
    }

    fn write_text(&mut self, x: f64, y: f64, w: f64, h: f64, content: &str, style: &TextStyle) {
        if content.is_empty() {
            return;
        }
        let fs = style.size / 72.0;
        let line_h = fs * LINE_H;
        let lines = wrap_text(content, w, style.size);

        let (anchor, tx) = match style.align {
            Align::Left => ("start", x),
            Align::Center => ("middle", x + w / 2.0),
            Align::Right => ("end", x + w),
        };
        // First baseline: hang from the top edge, or center the line block
        let first_baseline = match style.valign {
            VAlign::Top => y + fs,
            VAlign::Middle => y + h / 2.0 + fs * 0.35 - (lines.len() as f64 - 1.0) * line_h / 2.0,
        };

        let weight = if style.bold { r#" font-weight="bold""# } else { "" };
        let slant = if style.italic { r#" font-style="italic""# } else { "" };
        self.line(&format!(
            r#"<text font-family="{}" font-size="{}" fill="{}" text-anchor="{}"{}{}>"#,
            escape_xml(&style.font),
            fmt(fs),
            style.color,
            anchor,
            weight,
            slant,
        ));
        self.indent += 1;
        for (i, line) in lines.iter().enumerate() {
            self.line(&format!(
                r#"<tspan x="{}" y="{}">{}</tspan>"#,
                fmt(tx),
                fmt(first_baseline + i as f64 * line_h),
                escape_xml(line),
            ));
        }
        self.indent -= 1;
        self.line("</text>");
    }

    fn build(mut self, deck: &Deck) -> String {
        let px = self.config.px_per_unit;
        let mut out = String::new();
        if self.config.standalone {
            out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            if self.config.pretty_print {
                out.push('\n');
            }
        }
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            fmt(CANVAS_W * px),
            fmt(deck.len() as f64 * CANVAS_H * px),
        ));
        if self.config.pretty_print {
            out.push('\n');
        }

        self.indent = 1;
        for (index, slide) in deck.slides.iter().enumerate() {
            self.write_slide(slide, index);
        }

        out.push_str(&self.out);
        out.push_str("</svg>");
        if self.config.pretty_print {
            out.push('\n');
        }
        out
    }
}

/// Render a resolved deck to an SVG string
pub fn render_deck(deck: &Deck, config: &SvgConfig) -> String {
    DeckWriter::new(config.clone()).build(deck)
}

/// Greedy word wrap fitted to the box width at the given point size.
/// Always returns at least one line; words longer than a line stand alone.
fn wrap_text(content: &str, box_w: f64, size_pt: f64) -> Vec<String> {
    let max_chars = ((box_w / (size_pt / 72.0 * GLYPH_W)) as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Format a coordinate with up to four decimals, no trailing zeros
fn fmt(value: f64) -> String {
    let s = format!("{value:.4}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn opacity_attr(alpha: f64) -> String {
    if alpha < 1.0 {
        format!(r#" fill-opacity="{}""#, fmt(alpha))
    } else {
        String::new()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
