//! Shared decorative helpers and layout arithmetic
//!
//! Every helper appends primitives to the slide it is given and reads nothing
//! but its arguments. Geometry constants are fixed against the 10 × 5.625
//! canvas.

use crate::assets::Logo;
use crate::deck::{Align, Slide, TextStyle, CANVAS_H, CANVAS_W, MARGIN};

use super::LayoutContext;

/// Corner bracket inset from each canvas edge
const BRACKET_MARGIN: f64 = 0.3;
/// Bracket stroke thickness
const BRACKET_THICKNESS: f64 = 0.03;
/// Accent bar height (top/bottom)
const ACCENT_BAR_H: f64 = 0.06;
/// Side stripe width
const SIDE_STRIPE_W: f64 = 0.12;
/// Dot grid pitch
const DOT_PITCH: f64 = 0.18;
/// Dot diameter
const DOT_D: f64 = 0.05;
/// Dot fill opacity (88% transparent)
const DOT_ALPHA: f64 = 0.12;
/// Footer band height
pub const FOOTER_H: f64 = 0.4;
/// Footer band top edge
pub const FOOTER_Y: f64 = CANVAS_H - FOOTER_H;

/// Four L-shaped corner marks: eight short rectangle segments, `size` long,
/// inset 0.3 units from every edge.
pub fn corner_brackets(slide: &mut Slide, color: &str, size: f64) {
    let m = BRACKET_MARGIN;
    let t = BRACKET_THICKNESS;
    let right = CANVAS_W - m;
    let bottom = CANVAS_H - m;
    // Top-left
    slide.rect(m, m, size, t, color);
    slide.rect(m, m, t, size, color);
    // Top-right
    slide.rect(right - size, m, size, t, color);
    slide.rect(right - t, m, t, size, color);
    // Bottom-left
    slide.rect(m, bottom - t, size, t, color);
    slide.rect(m, bottom - size, t, size, color);
    // Bottom-right
    slide.rect(right - size, bottom - t, size, t, color);
    slide.rect(right - t, bottom - size, t, size, color);
}

/// Full-width thin bar along the top edge
pub fn accent_bar_top(slide: &mut Slide, color: &str) {
    slide.rect(0.0, 0.0, CANVAS_W, ACCENT_BAR_H, color);
}

/// Full-width thin bar along the bottom edge
pub fn accent_bar_bottom(slide: &mut Slide, color: &str) {
    slide.rect(0.0, CANVAS_H - ACCENT_BAR_H, CANVAS_W, ACCENT_BAR_H, color);
}

/// Full-height thin stripe along the left edge
pub fn side_stripe(slide: &mut Slide, color: &str) {
    slide.rect(0.0, 0.0, SIDE_STRIPE_W, CANVAS_H, color);
}

/// One oval of diameter `d` at the given origin with the given fill opacity
pub fn decorative_circle(slide: &mut Slide, x: f64, y: f64, d: f64, color: &str, opacity: f64) {
    slide.oval(x, y, d, d, color, opacity);
}

/// A rows × cols grid of small ovals on a fixed 0.18-unit pitch
pub fn dot_grid(slide: &mut Slide, x: f64, y: f64, rows: usize, cols: usize, color: &str) {
    for row in 0..rows {
        for col in 0..cols {
            slide.oval(
                x + col as f64 * DOT_PITCH,
                y + row as f64 * DOT_PITCH,
                DOT_D,
                DOT_D,
                color,
                DOT_ALPHA,
            );
        }
    }
}

/// A thin vertical accent tick plus a small bold upper-cased caption
pub fn section_label(slide: &mut Slide, x: f64, y: f64, caption: &str, ctx: &LayoutContext) {
    slide.rect(x, y, 0.045, 0.22, &ctx.theme.accent);
    slide.text(
        x + 0.12,
        y - 0.02,
        4.0,
        0.3,
        &caption.to_uppercase(),
        TextStyle::body(ctx.fonts.body, 11.0, &ctx.theme.accent).bold(),
    );
}

/// Place a loaded logo at the given origin: width as given, height
/// width × 0.6, contain-fit within that box.
pub fn place_logo(slide: &mut Slide, logo: &Logo, x: f64, y: f64, width: f64) {
    slide.push(crate::deck::DrawPrimitive::Image {
        x,
        y,
        w: width,
        h: width * 0.6,
        href: logo.href.clone(),
    });
}

/// Bottom footer band: accent tick, company name left, `page / total` right.
/// Dark slides get the primary fill with light text; light slides get the
/// light fill with muted text.
pub fn footer(slide: &mut Slide, ctx: &LayoutContext, dark: bool) {
    let (fill, text_color) = if dark {
        (ctx.theme.primary.as_str(), ctx.theme.text_light.as_str())
    } else {
        (ctx.theme.light.as_str(), ctx.theme.text_muted.as_str())
    };
    slide.rect(0.0, FOOTER_Y, CANVAS_W, FOOTER_H, fill);
    slide.rect(MARGIN, FOOTER_Y + 0.12, 0.045, 0.16, &ctx.theme.accent);
    slide.text(
        MARGIN + 0.12,
        FOOTER_Y,
        4.0,
        FOOTER_H,
        ctx.company,
        TextStyle::body(ctx.fonts.body, 10.0, text_color).middle(),
    );
    slide.text(
        CANVAS_W - MARGIN - 2.0,
        FOOTER_Y,
        2.0,
        FOOTER_H,
        &format!("{} / {}", ctx.page, ctx.total),
        TextStyle::body(ctx.fonts.body, 10.0, text_color)
            .align(Align::Right)
            .middle(),
    );
}

/// Equal horizontal partition: N items across `total_w` with gap `g` between
/// neighbours. Returns (x-offset, width) per item, offsets relative to 0.
/// An empty list yields no entries.
pub fn partition(total_w: f64, n: usize, gap: f64) -> Vec<(f64, f64)> {
    if n == 0 {
        return Vec::new();
    }
    let item_w = (total_w - (n as f64 - 1.0) * gap) / n as f64;
    (0..n)
        .map(|i| (i as f64 * (item_w + gap), item_w))
        .collect()
}

/// Column-count heuristic for grids: 1–3 items use that many columns, 4
/// items use 2, five or more use 3. Zero items report one column so row
/// arithmetic stays defined.
pub fn grid_columns(n: usize) -> usize {
    match n {
        0 => 1,
        1..=3 => n,
        4 => 2,
        _ => 3,
    }
}

/// Row height for a grid of `rows` rows in `avail` vertical units, clamped
/// to a readable range.
pub fn grid_row_height(avail: f64, rows: usize) -> f64 {
    (avail / rows.max(1) as f64).clamp(0.9, 1.6)
}

/// Proportional bar fill width. A non-positive max falls back to 100.
/// Fills below 0.1 unit are not worth a separate segment and return `None`.
pub fn bar_fill(track_w: f64, value: f64, max_value: f64) -> Option<f64> {
    let max = if max_value > 0.0 { max_value } else { 100.0 };
    let w = track_w * (value / max).clamp(0.0, 1.0);
    if w < 0.1 {
        None
    } else {
        Some(w)
    }
}

/// Per-row height for a vertical stack: capped at `cap`, shrinking once the
/// item count no longer fits the vertical budget.
pub fn stack_height(cap: f64, avail: f64, n: usize) -> f64 {
    cap.min(avail / n.max(1) as f64)
}

/// Initials for a team-member avatar: first letters of the first two words
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
