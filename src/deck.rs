//! Core types for the layout resolver's output
//!
//! A [`Deck`] is an ordered list of [`Slide`]s; a slide is a background fill
//! plus an ordered list of [`DrawPrimitive`]s on a fixed logical canvas.
//! Primitive order is paint order (painter's algorithm, no z-index).

/// Logical canvas width in units. Every layout rule positions against this.
pub const CANVAS_W: f64 = 10.0;

/// Logical canvas height in units (16:9).
pub const CANVAS_H: f64 = 5.625;

/// Standard left/right page margin.
pub const MARGIN: f64 = 0.5;

/// Usable content width between the margins.
pub const CONTENT_W: f64 = CANVAS_W - 2.0 * MARGIN;

/// Horizontal text alignment within a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical text alignment within a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
}

/// Resolved text styling for a single text primitive
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name
    pub font: String,
    /// Font size in points (the renderer converts to canvas units)
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    /// Fill color, `#rrggbb`
    pub color: String,
    pub align: Align,
    pub valign: VAlign,
}

impl TextStyle {
    /// Body text at the given size and color, left-aligned from the top
    pub fn body(font: &str, size: f64, color: &str) -> Self {
        Self {
            font: font.to_string(),
            size,
            bold: false,
            italic: false,
            color: color.to_string(),
            align: Align::Left,
            valign: VAlign::Top,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn middle(mut self) -> Self {
        self.valign = VAlign::Middle;
        self
    }
}

/// One atomic visual instruction with absolute position and style
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Filled rectangle. `alpha` is fill opacity in 0..=1.
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: String,
        alpha: f64,
    },
    /// Filled oval inscribed in the given box
    Oval {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: String,
        alpha: f64,
    },
    /// Stroked line segment; `width` is in points
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    /// Word-wrapped text run inside the given box
    Text {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        content: String,
        style: TextStyle,
    },
    /// Embedded image, contain-fit within the given box
    Image {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        href: String,
    },
}

/// One page of the deck, produced from one slide spec
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Background fill for the whole canvas
    pub background: String,
    /// Primitives in paint order
    pub primitives: Vec<DrawPrimitive>,
}

impl Slide {
    /// Create an empty slide with the given background fill
    pub fn new(background: &str) -> Self {
        Self {
            background: background.to_string(),
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    /// Append an opaque filled rectangle
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.push(DrawPrimitive::Rect {
            x,
            y,
            w,
            h,
            fill: fill.to_string(),
            alpha: 1.0,
        });
    }

    /// Append an oval with the given fill opacity
    pub fn oval(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, alpha: f64) {
        self.push(DrawPrimitive::Oval {
            x,
            y,
            w,
            h,
            fill: fill.to_string(),
            alpha,
        });
    }

    /// Append a line segment
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.push(DrawPrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            width,
        });
    }

    /// Append a text box
    pub fn text(&mut self, x: f64, y: f64, w: f64, h: f64, content: &str, style: TextStyle) {
        self.push(DrawPrimitive::Text {
            x,
            y,
            w,
            h,
            content: content.to_string(),
            style,
        });
    }

    /// Count the image primitives on this slide
    pub fn image_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Image { .. }))
            .count()
    }
}

/// The rendered output artifact: all slides in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
