// File: crates/chart-core/src/config.rs
// Summary: Typed chart configuration mirroring the external library's object shape.
// Notes:
// - Field names serialize in the library's camelCase form so an adapter can
//   hand the whole structure across the boundary unchanged.
// - Formatting callbacks cannot cross a serialization boundary; the config
//   records the currency prefix and adapters install the equivalent
//   callbacks themselves (see chart-web).

use serde::Serialize;

use crate::dataset::ChartDataset;
use crate::format::CURRENCY_PREFIX;
use crate::theme::{
    SeriesStyle, AXIS_TITLE_FONT_SIZE, BORDER_WIDTH, GRID_COLOR, LEGEND_FONT_FAMILY,
    LEGEND_FONT_SIZE, LEGEND_PADDING, LINE_TENSION, POINT_HOVER_RADIUS, POINT_RADIUS,
    TICK_FONT_SIZE, TOOLTIP_BACKGROUND, TOOLTIP_BODY_FONT_SIZE, TOOLTIP_PADDING,
    TOOLTIP_TITLE_FONT_SIZE,
};

#[derive(Clone, Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesSpec>,
}

/// One plotted series with its fixed visual treatment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_hover_radius: u32,
}

impl SeriesSpec {
    fn new(style: SeriesStyle, data: Vec<f64>) -> Self {
        Self {
            label: style.label,
            data,
            border_color: style.border_color,
            background_color: style.background_color,
            border_width: BORDER_WIDTH,
            fill: true,
            tension: LINE_TENSION,
            point_radius: POINT_RADIUS,
            point_hover_radius: POINT_HOVER_RADIUS,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
    pub interaction: InteractionOptions,
    pub hover: InteractionOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct LegendOptions {
    pub position: &'static str,
    pub labels: LegendLabelOptions,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabelOptions {
    pub font: FontSpec,
    pub padding: u32,
    pub use_point_style: bool,
    pub point_style: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub background_color: &'static str,
    pub title_font: FontSpec,
    pub body_font: FontSpec,
    pub padding: u32,
    pub display_colors: bool,
    /// Prefix an adapter applies when installing the value-label callback.
    #[serde(skip)]
    pub value_prefix: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScaleOptions {
    pub y: YAxisOptions,
    pub x: XAxisOptions,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOptions {
    pub begin_at_zero: bool,
    pub grid: GridOptions,
    pub ticks: TickOptions,
    pub title: AxisTitleOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct XAxisOptions {
    pub grid: GridOptions,
    pub ticks: TickOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct GridOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TickOptions {
    pub font: FontSpec,
    /// Prefix an adapter applies when installing the tick-label callback.
    #[serde(skip)]
    pub value_prefix: Option<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AxisTitleOptions {
    pub display: bool,
    pub text: &'static str,
    pub font: FontSpec,
}

#[derive(Clone, Debug, Serialize)]
pub struct FontSpec {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
}

impl FontSpec {
    fn sized(size: u32) -> Self {
        Self { size, family: None, weight: None }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct InteractionOptions {
    pub mode: &'static str,
    pub intersect: bool,
}

/// Build the full line-chart configuration for a validated dataset. Values
/// pass through unmodified; everything else is the page's fixed styling.
pub fn line_chart_config(dataset: &ChartDataset) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: dataset.dates.clone(),
            datasets: vec![
                SeriesSpec::new(SeriesStyle::profit(), dataset.profits.clone()),
                SeriesSpec::new(SeriesStyle::sales(), dataset.sales.clone()),
                SeriesSpec::new(SeriesStyle::expenses(), dataset.expenses.clone()),
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: PluginOptions {
                legend: LegendOptions {
                    position: "top",
                    labels: LegendLabelOptions {
                        font: FontSpec {
                            size: LEGEND_FONT_SIZE,
                            family: Some(LEGEND_FONT_FAMILY),
                            weight: None,
                        },
                        padding: LEGEND_PADDING,
                        use_point_style: true,
                        point_style: "circle",
                    },
                },
                tooltip: TooltipOptions {
                    background_color: TOOLTIP_BACKGROUND,
                    title_font: FontSpec::sized(TOOLTIP_TITLE_FONT_SIZE),
                    body_font: FontSpec::sized(TOOLTIP_BODY_FONT_SIZE),
                    padding: TOOLTIP_PADDING,
                    display_colors: true,
                    value_prefix: CURRENCY_PREFIX,
                },
            },
            scales: ScaleOptions {
                y: YAxisOptions {
                    begin_at_zero: true,
                    grid: GridOptions { color: Some(GRID_COLOR), display: None },
                    ticks: TickOptions {
                        font: FontSpec::sized(TICK_FONT_SIZE),
                        value_prefix: Some(CURRENCY_PREFIX),
                    },
                    title: AxisTitleOptions {
                        display: true,
                        text: "Amount (KES)",
                        font: FontSpec {
                            size: AXIS_TITLE_FONT_SIZE,
                            family: None,
                            weight: Some("bold"),
                        },
                    },
                },
                x: XAxisOptions {
                    grid: GridOptions { color: None, display: Some(false) },
                    ticks: TickOptions {
                        font: FontSpec::sized(TICK_FONT_SIZE),
                        value_prefix: None,
                    },
                },
            },
            interaction: InteractionOptions { mode: "index", intersect: false },
            hover: InteractionOptions { mode: "index", intersect: false },
        },
    }
}
