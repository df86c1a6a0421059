// File: crates/chart-core/src/theme.rs
// Summary: Fixed visual styling for the three profit-chart series and shared chrome colors.

use serde::Serialize;

/// Opaque stroke color, rendered in CSS `rgb(...)` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// Same hue with the given alpha, in CSS `rgba(...)` form.
    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Per-series style: label plus stroke and translucent fill.
#[derive(Clone, Debug, Serialize)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub border_color: String,
    pub background_color: String,
}

impl SeriesStyle {
    fn new(label: &'static str, color: Rgb) -> Self {
        Self {
            label,
            border_color: color.css(),
            background_color: color.css_with_alpha(FILL_ALPHA),
        }
    }

    pub fn profit() -> Self {
        Self::new("Profit", Rgb(54, 162, 235))
    }

    pub fn sales() -> Self {
        Self::new("Sales", Rgb(75, 192, 192))
    }

    pub fn expenses() -> Self {
        Self::new("Expenses", Rgb(255, 99, 132))
    }
}

/// Fill alpha shared by all three series.
pub const FILL_ALPHA: f32 = 0.1;

/// Stroke width for every series line.
pub const BORDER_WIDTH: u32 = 3;

/// Curve smoothing tension.
pub const LINE_TENSION: f64 = 0.3;

pub const POINT_RADIUS: u32 = 4;
pub const POINT_HOVER_RADIUS: u32 = 6;

/// Tooltip backdrop.
pub const TOOLTIP_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";

/// Y-axis gridline tint; the x-axis draws none.
pub const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";

pub const LEGEND_FONT_SIZE: u32 = 14;
pub const LEGEND_PADDING: u32 = 20;
pub const LEGEND_FONT_FAMILY: &str = "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif";

pub const TOOLTIP_TITLE_FONT_SIZE: u32 = 16;
pub const TOOLTIP_BODY_FONT_SIZE: u32 = 14;
pub const TOOLTIP_PADDING: u32 = 12;

pub const TICK_FONT_SIZE: u32 = 12;
pub const AXIS_TITLE_FONT_SIZE: u32 = 14;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_forms_match_page_styles() {
        let profit = SeriesStyle::profit();
        assert_eq!(profit.border_color, "rgb(54, 162, 235)");
        assert_eq!(profit.background_color, "rgba(54, 162, 235, 0.1)");
        assert_eq!(SeriesStyle::expenses().border_color, "rgb(255, 99, 132)");
    }
}
