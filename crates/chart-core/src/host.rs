// File: crates/chart-core/src/host.rs
// Summary: Host page abstraction (element lookup, data attributes, drawing surface) with the page contract ids.

use std::any::Any;

use crate::error::ChartError;

/// Id of the canvas-like element the chart draws into.
pub const CHART_TARGET_ID: &str = "profitChart";

/// Id of the element carrying the JSON payload.
pub const DATA_ELEMENT_ID: &str = "chart-data";

/// Dataset key of the payload attribute; serialized as `data-chart`.
pub const DATA_ATTR: &str = "chart";

/// Class of the container that receives the error panel.
pub const WRAPPER_CLASS: &str = "chart-wrapper";

/// The page hosting the chart. The bootstrapper takes this explicitly; there
/// is no ambient document and no global event registration.
pub trait HostPage {
    fn element_by_id(&self, id: &str) -> Option<Box<dyn HostElement + '_>>;
    fn first_by_class(&self, class: &str) -> Option<Box<dyn HostElement + '_>>;
}

/// A single element on the host page. Only the operations the bootstrapper
/// needs: attribute reads, surface acquisition, and content replacement.
pub trait HostElement {
    /// Read a `data-*` attribute by its dataset key.
    fn data_attr(&self, name: &str) -> Option<String>;

    /// Acquire a 2D drawing surface from this element.
    fn surface_2d(&self) -> Result<Box<dyn DrawingSurface>, ChartError>;

    /// Replace this element's contents with the given markup.
    fn set_inner_html(&self, html: &str);
}

/// Opaque 2D surface handed to the renderer. Concrete adapters downcast to
/// their own surface type.
pub trait DrawingSurface: Any {
    fn as_any(&self) -> &dyn Any;
}
