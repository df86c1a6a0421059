// File: crates/chart-core/src/bootstrap.rs
// Summary: Page-ready routine; locates the chart elements, parses the payload, and renders or reports.

use tracing::{debug, error};

use crate::config::line_chart_config;
use crate::dataset::ChartDataset;
use crate::embed::escape_text;
use crate::error::ChartError;
use crate::host::{HostPage, CHART_TARGET_ID, DATA_ATTR, DATA_ELEMENT_ID, WRAPPER_CLASS};
use crate::render::{ChartHandle, ChartRenderer};

/// Result of one bootstrap pass. The routine never panics and never lets an
/// error escape; failures are reported into the page and the log.
pub enum BootOutcome {
    /// No chart target on this page; nothing was done.
    NotAProfitPage,
    /// Target present but the data element is missing; logged, no panel.
    Skipped,
    /// The chart is live. The host application owns the handle and may hand
    /// it back to the renderer's `dispose`.
    Rendered(ChartHandle),
    /// Initialization failed; the error panel was injected if a wrapper
    /// element exists.
    Failed(ChartError),
}

/// Run the chart bootstrap against a host page. Call once from the hosting
/// application's startup sequence after the document is parsed.
pub fn boot_profit_chart(page: &dyn HostPage, renderer: &dyn ChartRenderer) -> BootOutcome {
    // A page without the target simply does not host the chart.
    if page.element_by_id(CHART_TARGET_ID).is_none() {
        return BootOutcome::NotAProfitPage;
    }

    match initialize(page, renderer) {
        Ok(Some(handle)) => BootOutcome::Rendered(handle),
        Ok(None) => BootOutcome::Skipped,
        Err(err) => {
            error!(error = %err, "chart initialization failed");
            show_error_panel(page, &err);
            BootOutcome::Failed(err)
        }
    }
}

/// The linear initialization sequence. `Ok(None)` means the data element was
/// absent, a recoverable configuration gap rather than a failure.
fn initialize(
    page: &dyn HostPage,
    renderer: &dyn ChartRenderer,
) -> Result<Option<ChartHandle>, ChartError> {
    let Some(data_element) = page.element_by_id(DATA_ELEMENT_ID) else {
        error!("chart data element not found");
        return Ok(None);
    };

    let raw = data_element.data_attr(DATA_ATTR).unwrap_or_default();
    let dataset = ChartDataset::from_json(&raw)?;
    debug!(points = dataset.len(), "parsed chart data");

    // The target is known to exist; the outer check just ran.
    let Some(target) = page.element_by_id(CHART_TARGET_ID) else {
        return Ok(None);
    };
    let surface = target.surface_2d()?;

    let config = line_chart_config(&dataset);
    // Construction failures take the same path as parse failures; a blank
    // wrapper with no panel gives the user no signal.
    let handle = renderer
        .render(surface.as_ref(), &config)
        .map_err(|err| match err {
            ChartError::Construction(_) => err,
            other => ChartError::Construction(other.to_string()),
        })?;

    Ok(Some(handle))
}

/// Heading shown in the error panel.
pub const ERROR_HEADING: &str = "Failed to load profit chart";

/// Build the panel markup: warning icon, fixed heading, escaped detail.
pub fn error_panel_html(err: &ChartError) -> String {
    format!(
        concat!(
            r#"<div class="chart-error">"#,
            r#"<i class="fas fa-exclamation-triangle"></i>"#,
            "<p>{heading}</p>",
            "<p>{detail}</p>",
            "</div>"
        ),
        heading = ERROR_HEADING,
        detail = escape_text(&err.to_string()),
    )
}

fn show_error_panel(page: &dyn HostPage, err: &ChartError) {
    match page.first_by_class(WRAPPER_CLASS) {
        Some(wrapper) => wrapper.set_inner_html(&error_panel_html(err)),
        None => error!("no chart wrapper element; error panel not shown"),
    }
}
