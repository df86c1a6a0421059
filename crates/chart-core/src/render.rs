// File: crates/chart-core/src/render.rs
// Summary: Renderer seam; the external charting library lives entirely behind this trait.

use std::any::Any;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::host::DrawingSurface;

/// Opaque token for a live chart instance. Adapters downcast it back on
/// `dispose` to tear the instance down.
pub struct ChartHandle(Box<dyn Any>);

impl ChartHandle {
    pub fn new(inner: impl Any) -> Self {
        Self(Box::new(inner))
    }

    pub fn downcast<T: Any>(self) -> Result<Box<T>, Self> {
        self.0.downcast::<T>().map_err(Self)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

/// Narrow interface to the charting library: instantiate a chart with a
/// finished configuration, or tear one down.
pub trait ChartRenderer {
    fn render(
        &self,
        surface: &dyn DrawingSurface,
        config: &ChartConfig,
    ) -> Result<ChartHandle, ChartError>;

    fn dispose(&self, handle: ChartHandle);
}
