// File: crates/demo/src/main.rs
// Summary: Demo feeds a week of sample figures through the bootstrapper and prints the resulting config.

use std::cell::RefCell;

use anyhow::Result;
use chart_core::embed::data_element_html;
use chart_core::host::{CHART_TARGET_ID, DATA_ATTR, DATA_ELEMENT_ID, WRAPPER_CLASS};
use chart_core::{
    boot_profit_chart, BootOutcome, ChartConfig, ChartDataset, ChartError, ChartHandle,
    ChartRenderer, DrawingSurface, HostElement, HostPage,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // A week of shop figures, the shape the server embeds into the page.
    let dataset = ChartDataset::try_new(
        vec![
            "2026-08-17".into(),
            "2026-08-18".into(),
            "2026-08-19".into(),
            "2026-08-20".into(),
            "2026-08-21".into(),
            "2026-08-22".into(),
            "2026-08-23".into(),
        ],
        vec![15_200.0, 9_850.5, 18_400.0, 12_000.0, 21_350.0, 30_125.75, 8_700.0],
        vec![48_000.0, 31_500.0, 52_300.0, 40_250.0, 61_800.0, 75_900.0, 27_450.0],
        vec![32_800.0, 21_649.5, 33_900.0, 28_250.0, 40_450.0, 45_774.25, 18_750.0],
    )?;

    println!("Embedded carrier markup:\n{}\n", data_element_html(&dataset)?);

    let page = StaticPage::new(dataset.to_embed_json()?);
    match boot_profit_chart(&page, &PrintingRenderer) {
        BootOutcome::Rendered(_) => println!("Chart rendered."),
        BootOutcome::NotAProfitPage => println!("No chart target on this page."),
        BootOutcome::Skipped => println!("Data element missing; nothing rendered."),
        BootOutcome::Failed(err) => {
            println!("Bootstrap failed: {err}");
            println!("Wrapper now shows:\n{}", page.wrapper_html.borrow());
        }
    }

    Ok(())
}

/// In-memory stand-in for the hosting page: a chart target, the data
/// carrier, and a wrapper that captures any injected panel.
struct StaticPage {
    payload: String,
    wrapper_html: RefCell<String>,
}

impl StaticPage {
    fn new(payload: String) -> Self {
        Self { payload, wrapper_html: RefCell::new(String::new()) }
    }
}

impl HostPage for StaticPage {
    fn element_by_id(&self, id: &str) -> Option<Box<dyn HostElement + '_>> {
        match id {
            CHART_TARGET_ID => Some(Box::new(TargetElement)),
            DATA_ELEMENT_ID => Some(Box::new(DataElement { payload: &self.payload })),
            _ => None,
        }
    }

    fn first_by_class(&self, class: &str) -> Option<Box<dyn HostElement + '_>> {
        (class == WRAPPER_CLASS)
            .then(|| Box::new(WrapperElement { html: &self.wrapper_html }) as Box<dyn HostElement + '_>)
    }
}

struct TargetElement;

impl HostElement for TargetElement {
    fn data_attr(&self, _name: &str) -> Option<String> {
        None
    }

    fn surface_2d(&self) -> Result<Box<dyn DrawingSurface>, ChartError> {
        Ok(Box::new(StdoutSurface))
    }

    fn set_inner_html(&self, _html: &str) {}
}

struct DataElement<'a> {
    payload: &'a str,
}

impl HostElement for DataElement<'_> {
    fn data_attr(&self, name: &str) -> Option<String> {
        (name == DATA_ATTR).then(|| self.payload.to_string())
    }

    fn surface_2d(&self) -> Result<Box<dyn DrawingSurface>, ChartError> {
        Err(ChartError::SurfaceUnavailable("data element has no surface".into()))
    }

    fn set_inner_html(&self, _html: &str) {}
}

struct WrapperElement<'a> {
    html: &'a RefCell<String>,
}

impl HostElement for WrapperElement<'_> {
    fn data_attr(&self, _name: &str) -> Option<String> {
        None
    }

    fn surface_2d(&self) -> Result<Box<dyn DrawingSurface>, ChartError> {
        Err(ChartError::SurfaceUnavailable("wrapper has no surface".into()))
    }

    fn set_inner_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
    }
}

struct StdoutSurface;

impl DrawingSurface for StdoutSurface {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Renderer that pretty-prints the configuration instead of drawing.
struct PrintingRenderer;

impl ChartRenderer for PrintingRenderer {
    fn render(
        &self,
        _surface: &dyn DrawingSurface,
        config: &ChartConfig,
    ) -> Result<ChartHandle, ChartError> {
        let pretty = serde_json::to_string_pretty(config)
            .map_err(|e| ChartError::Construction(e.to_string()))?;
        println!("Chart configuration:\n{pretty}");
        Ok(ChartHandle::new(()))
    }

    fn dispose(&self, _handle: ChartHandle) {}
}
