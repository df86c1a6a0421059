// File: crates/chart-web/src/lib.rs
// Summary: Browser adapter; implements the host-page traits over the DOM and the renderer seam over Chart.js.
// Notes:
// - Everything lives behind the `web` feature, so the workspace builds
//   without fetching wasm crates unless explicitly enabled.
// - The formatting callbacks Chart.js expects as JS functions are built here
//   from chart-core's formatter and kept alive inside the chart handle.

#[cfg(feature = "web")]
pub mod dom {
    use chart_core::config::ChartConfig;
    use chart_core::format::format_kes;
    use chart_core::{
        boot_profit_chart, BootOutcome, ChartError, ChartHandle, ChartRenderer, DrawingSurface,
        HostElement, HostPage,
    };
    use js_sys::Reflect;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        console, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
    };

    #[wasm_bindgen]
    extern "C" {
        /// The global `Chart` constructor provided by the charting library.
        #[wasm_bindgen(js_name = Chart)]
        type ChartJs;

        #[wasm_bindgen(constructor, js_class = "Chart", catch)]
        fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<ChartJs, JsValue>;

        #[wasm_bindgen(method)]
        fn destroy(this: &ChartJs);
    }

    /// `HostPage` over a live `web_sys::Document`.
    pub struct DomPage {
        document: Document,
    }

    impl DomPage {
        pub fn new(document: Document) -> Self {
            Self { document }
        }
    }

    impl HostPage for DomPage {
        fn element_by_id(&self, id: &str) -> Option<Box<dyn HostElement + '_>> {
            self.document
                .get_element_by_id(id)
                .map(|element| Box::new(DomElement { element }) as Box<dyn HostElement>)
        }

        fn first_by_class(&self, class: &str) -> Option<Box<dyn HostElement + '_>> {
            self.document
                .query_selector(&format!(".{class}"))
                .ok()
                .flatten()
                .map(|element| Box::new(DomElement { element }) as Box<dyn HostElement>)
        }
    }

    struct DomElement {
        element: Element,
    }

    impl HostElement for DomElement {
        fn data_attr(&self, name: &str) -> Option<String> {
            self.element
                .dyn_ref::<HtmlElement>()
                .and_then(|el| el.dataset().get(name))
        }

        fn surface_2d(&self) -> Result<Box<dyn DrawingSurface>, ChartError> {
            let canvas: HtmlCanvasElement = self
                .element
                .clone()
                .dyn_into()
                .map_err(|_| ChartError::SurfaceUnavailable("element is not a canvas".into()))?;
            let ctx = canvas
                .get_context("2d")
                .map_err(|e| ChartError::SurfaceUnavailable(js_err_string(&e)))?
                .ok_or_else(|| ChartError::SurfaceUnavailable("2d context unavailable".into()))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| ChartError::SurfaceUnavailable("unexpected context type".into()))?;
            Ok(Box::new(CanvasSurface { ctx }))
        }

        fn set_inner_html(&self, html: &str) {
            self.element.set_inner_html(html);
        }
    }

    /// 2D canvas context wrapped as the opaque surface type.
    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl DrawingSurface for CanvasSurface {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    /// Chart.js behind the renderer seam.
    pub struct ChartJsRenderer;

    struct ChartJsHandle {
        chart: ChartJs,
        // Closures must outlive the chart instance or Chart.js calls into
        // freed memory on the next tooltip.
        _label_cb: Closure<dyn Fn(JsValue) -> JsValue>,
        _tick_cb: Closure<dyn Fn(JsValue) -> JsValue>,
    }

    impl ChartRenderer for ChartJsRenderer {
        fn render(
            &self,
            surface: &dyn DrawingSurface,
            config: &ChartConfig,
        ) -> Result<ChartHandle, ChartError> {
            let surface = surface
                .as_any()
                .downcast_ref::<CanvasSurface>()
                .ok_or_else(|| {
                    ChartError::SurfaceUnavailable("renderer needs a canvas surface".into())
                })?;

            #[allow(deprecated)]
            let js_config = JsValue::from_serde(config)
                .map_err(|e| ChartError::Construction(e.to_string()))?;

            let label_cb = tooltip_label_callback();
            let tick_cb = tick_label_callback();
            install_callback(
                &js_config,
                &["options", "plugins", "tooltip", "callbacks", "label"],
                label_cb.as_ref(),
            )
            .map_err(|e| ChartError::Construction(js_err_string(&e)))?;
            install_callback(
                &js_config,
                &["options", "scales", "y", "ticks", "callback"],
                tick_cb.as_ref(),
            )
            .map_err(|e| ChartError::Construction(js_err_string(&e)))?;

            let chart = ChartJs::new(&surface.ctx, &js_config)
                .map_err(|e| ChartError::Construction(js_err_string(&e)))?;

            Ok(ChartHandle::new(ChartJsHandle {
                chart,
                _label_cb: label_cb,
                _tick_cb: tick_cb,
            }))
        }

        fn dispose(&self, handle: ChartHandle) {
            if let Ok(handle) = handle.downcast::<ChartJsHandle>() {
                handle.chart.destroy();
            }
        }
    }

    /// `context.dataset.label + ": " + formatted(context.parsed.y)`.
    fn tooltip_label_callback() -> Closure<dyn Fn(JsValue) -> JsValue> {
        Closure::new(|context: JsValue| {
            let label = get_path(&context, &["dataset", "label"])
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            let value = get_path(&context, &["parsed", "y"])
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            JsValue::from_str(&format!("{label}: {}", format_kes(value)))
        })
    }

    /// Axis tick labels, `"KES 1,234,567"`.
    fn tick_label_callback() -> Closure<dyn Fn(JsValue) -> JsValue> {
        Closure::new(|value: JsValue| match value.as_f64() {
            Some(v) => JsValue::from_str(&format_kes(v)),
            None => value,
        })
    }

    fn get_path(obj: &JsValue, path: &[&str]) -> Option<JsValue> {
        let mut current = obj.clone();
        for key in path {
            current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        }
        Some(current)
    }

    fn install_callback(obj: &JsValue, path: &[&str], cb: &JsValue) -> Result<(), JsValue> {
        let mut current = obj.clone();
        for key in &path[..path.len() - 1] {
            let key = JsValue::from_str(key);
            let next = Reflect::get(&current, &key)?;
            current = if next.is_undefined() || next.is_null() {
                let fresh: JsValue = js_sys::Object::new().into();
                Reflect::set(&current, &key, &fresh)?;
                fresh
            } else {
                next
            };
        }
        Reflect::set(&current, &JsValue::from_str(path[path.len() - 1]), cb)?;
        Ok(())
    }

    fn js_err_string(value: &JsValue) -> String {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            String::from(err.message())
        } else {
            value.as_string().unwrap_or_else(|| format!("{value:?}"))
        }
    }

    /// Wasm entry point. The hosting page calls this once after the document
    /// is parsed, passing the document explicitly.
    #[wasm_bindgen]
    pub fn boot(document: Document) {
        let page = DomPage::new(document);
        match boot_profit_chart(&page, &ChartJsRenderer) {
            BootOutcome::NotAProfitPage => {}
            BootOutcome::Skipped => {
                console::error_1(&"Chart data element not found".into());
            }
            BootOutcome::Rendered(handle) => {
                // The chart lives for the rest of the page; leak the handle
                // (and its callbacks) instead of tearing it down.
                std::mem::forget(handle);
            }
            BootOutcome::Failed(err) => {
                console::error_1(&format!("Chart initialization failed: {err}").into());
            }
        }
    }
}
