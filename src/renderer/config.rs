//! Configuration for SVG rendering

/// Configuration options for SVG deck output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Pixels per canvas unit; the 10-unit canvas renders 960px wide at 96
    pub px_per_unit: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with newlines
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            px_per_unit: 96.0,
            standalone: true,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel scale per canvas unit
    pub fn with_px_per_unit(mut self, px: f64) -> Self {
        self.px_per_unit = px;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
