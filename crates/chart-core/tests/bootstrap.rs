// File: crates/chart-core/tests/bootstrap.rs
// Purpose: Validate the page-ready contract: skip paths, panel injection, and the render path.

use std::cell::RefCell;

use chart_core::host::{CHART_TARGET_ID, DATA_ATTR, DATA_ELEMENT_ID, WRAPPER_CLASS};
use chart_core::{
    boot_profit_chart, BootOutcome, ChartConfig, ChartError, ChartHandle, ChartRenderer,
    DrawingSurface, HostElement, HostPage,
};

// ---- fakes ------------------------------------------------------------------

/// Configurable in-memory page: toggles for each contract element, plus the
/// wrapper's captured markup.
#[derive(Default)]
struct FakePage {
    has_target: bool,
    payload: Option<String>,
    has_wrapper: bool,
    wrapper_html: RefCell<Option<String>>,
}

impl FakePage {
    fn profit_page(payload: &str) -> Self {
        Self {
            has_target: true,
            payload: Some(payload.to_string()),
            has_wrapper: true,
            wrapper_html: RefCell::new(None),
        }
    }
}

impl HostPage for FakePage {
    fn element_by_id(&self, id: &str) -> Option<Box<dyn HostElement + '_>> {
        match id {
            CHART_TARGET_ID if self.has_target => Some(Box::new(FakeElement::Target)),
            DATA_ELEMENT_ID => self
                .payload
                .as_deref()
                .map(|p| Box::new(FakeElement::Data(p.to_string())) as Box<dyn HostElement>),
            _ => None,
        }
    }

    fn first_by_class(&self, class: &str) -> Option<Box<dyn HostElement + '_>> {
        (class == WRAPPER_CLASS && self.has_wrapper)
            .then(|| Box::new(FakeElement::Wrapper(&self.wrapper_html)) as Box<dyn HostElement + '_>)
    }
}

enum FakeElement<'a> {
    Target,
    Data(String),
    Wrapper(&'a RefCell<Option<String>>),
}

impl HostElement for FakeElement<'_> {
    fn data_attr(&self, name: &str) -> Option<String> {
        match self {
            Self::Data(payload) if name == DATA_ATTR => Some(payload.clone()),
            _ => None,
        }
    }

    fn surface_2d(&self) -> Result<Box<dyn DrawingSurface>, ChartError> {
        match self {
            Self::Target => Ok(Box::new(FakeSurface)),
            _ => Err(ChartError::SurfaceUnavailable("not the chart target".into())),
        }
    }

    fn set_inner_html(&self, html: &str) {
        if let Self::Wrapper(slot) = self {
            *slot.borrow_mut() = Some(html.to_string());
        }
    }
}

struct FakeSurface;

impl DrawingSurface for FakeSurface {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Records every configuration it is asked to render; optionally fails.
#[derive(Default)]
struct RecordingRenderer {
    fail_with: Option<String>,
    rendered: RefCell<Vec<ChartConfig>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(
        &self,
        _surface: &dyn DrawingSurface,
        config: &ChartConfig,
    ) -> Result<ChartHandle, ChartError> {
        if let Some(msg) = &self.fail_with {
            return Err(ChartError::Construction(msg.clone()));
        }
        self.rendered.borrow_mut().push(config.clone());
        Ok(ChartHandle::new("live-chart"))
    }

    fn dispose(&self, _handle: ChartHandle) {}
}

const GOOD_PAYLOAD: &str = r#"{"dates":["Jan","Feb","Mar"],"profits":[100,200,150],"sales":[300,400,350],"expenses":[200,200,200]}"#;

// ---- tests ------------------------------------------------------------------

#[test]
fn valid_payload_renders_three_series() {
    let page = FakePage::profit_page(GOOD_PAYLOAD);
    let renderer = RecordingRenderer::default();

    let outcome = boot_profit_chart(&page, &renderer);
    assert!(matches!(outcome, BootOutcome::Rendered(_)));

    let rendered = renderer.rendered.borrow();
    assert_eq!(rendered.len(), 1);
    let labels: Vec<_> = rendered[0].data.datasets.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["Profit", "Sales", "Expenses"]);
    assert!(page.wrapper_html.borrow().is_none(), "no panel on success");
}

#[test]
fn page_without_target_does_nothing() {
    let page = FakePage {
        has_target: false,
        payload: Some(GOOD_PAYLOAD.to_string()),
        has_wrapper: true,
        ..Default::default()
    };
    let renderer = RecordingRenderer::default();

    let outcome = boot_profit_chart(&page, &renderer);
    assert!(matches!(outcome, BootOutcome::NotAProfitPage));
    assert!(renderer.rendered.borrow().is_empty());
    assert!(page.wrapper_html.borrow().is_none());
}

#[test]
fn missing_data_element_skips_without_panel() {
    let page = FakePage { has_target: true, payload: None, has_wrapper: true, ..Default::default() };
    let renderer = RecordingRenderer::default();

    let outcome = boot_profit_chart(&page, &renderer);
    assert!(matches!(outcome, BootOutcome::Skipped));
    assert!(renderer.rendered.borrow().is_empty());
    assert!(page.wrapper_html.borrow().is_none());
}

#[test]
fn malformed_json_shows_error_panel() {
    let page = FakePage::profit_page("{not valid");
    let renderer = RecordingRenderer::default();

    let outcome = boot_profit_chart(&page, &renderer);
    let BootOutcome::Failed(err) = outcome else {
        panic!("expected failure outcome");
    };
    assert!(matches!(err, ChartError::MalformedData(_)));

    let html = page.wrapper_html.borrow();
    let html = html.as_deref().expect("panel injected");
    assert!(html.contains("Failed to load profit chart"));
    // The parser's own message rides along in the second paragraph.
    let parse_err = serde_json::from_str::<chart_core::ChartDataset>("{not valid").unwrap_err();
    let expected = chart_core::ChartError::from(parse_err).to_string();
    assert!(html.contains(&expected));
}

#[test]
fn length_mismatch_shows_error_panel() {
    let page = FakePage::profit_page(
        r#"{"dates":["Jan","Feb"],"profits":[100],"sales":[300,400],"expenses":[200,200]}"#,
    );
    let renderer = RecordingRenderer::default();

    let outcome = boot_profit_chart(&page, &renderer);
    assert!(matches!(
        outcome,
        BootOutcome::Failed(ChartError::LengthMismatch { series: "profits", len: 1, expected: 2 })
    ));
    let html = page.wrapper_html.borrow();
    assert!(html.as_deref().unwrap().contains("length mismatch"));
}

#[test]
fn construction_failure_shows_error_panel() {
    // Renderer failures surface the same panel as parse failures.
    let page = FakePage::profit_page(GOOD_PAYLOAD);
    let renderer =
        RecordingRenderer { fail_with: Some("canvas already in use".into()), ..Default::default() };

    let outcome = boot_profit_chart(&page, &renderer);
    assert!(matches!(outcome, BootOutcome::Failed(ChartError::Construction(_))));
    let html = page.wrapper_html.borrow();
    let html = html.as_deref().expect("panel injected");
    assert!(html.contains("Failed to load profit chart"));
    assert!(html.contains("canvas already in use"));
}

#[test]
fn failure_without_wrapper_is_log_only() {
    let page = FakePage {
        has_target: true,
        payload: Some("{not valid".to_string()),
        has_wrapper: false,
        ..Default::default()
    };
    let renderer = RecordingRenderer::default();

    let outcome = boot_profit_chart(&page, &renderer);
    assert!(matches!(outcome, BootOutcome::Failed(_)));
    assert!(page.wrapper_html.borrow().is_none());
}
