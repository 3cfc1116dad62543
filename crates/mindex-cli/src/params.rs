use mindex_config::Settings;
use mindex_engine::{DocumentParams, layout};

/// Current state of the tweakable layout knobs.
///
/// Margins are derived values; they are recomputed whenever a page dimension
/// changes. The column count starts derived from the width but becomes a free
/// knob once the user overrides it in the tweaks menu.
#[derive(Debug, Clone)]
pub struct IndexParams {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub cols: u32,
    pub closing: String,
    pub gutter: String,
    pub indent: String,
}

impl IndexParams {
    pub fn new(title: String, width: f64, height: f64, settings: &Settings) -> Self {
        let (margin_x, margin_y) = layout::margins(settings.paper_dims(), (width, height));
        Self {
            title,
            width,
            height,
            margin_x,
            margin_y,
            cols: layout::column_count(width),
            closing: Settings::default_closing(),
            gutter: settings.gutter.clone(),
            indent: settings.indent.clone(),
        }
    }

    /// Re-derive the margins after a page dimension changed.
    pub fn recompute_margins(&mut self, settings: &Settings) {
        let (x, y) = layout::margins(settings.paper_dims(), (self.width, self.height));
        self.margin_x = x;
        self.margin_y = y;
    }

    /// Pair the layout knobs with a formatted index body for the template.
    pub fn document_params(&self, content: &str) -> DocumentParams {
        DocumentParams {
            title: self.title.clone(),
            content: content.to_string(),
            closing: self.closing.clone(),
            margin_x: self.margin_x,
            margin_y: self.margin_y,
            cols: self.cols,
            gutter: self.gutter.clone(),
            indent: self.indent.clone(),
        }
    }
}
