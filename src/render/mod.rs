mod cloud_area_renderer;
mod composite;
mod frame;
mod line_renderer;
mod null_renderer;
mod primitives;

pub use cloud_area_renderer::{CloudAreaRendererData, PaneRendererCloudArea};
pub use composite::{CompositeRenderer, SeriesRenderer, SeriesRendererKind};
pub use frame::RenderFrame;
pub use line_renderer::{LineRendererData, PaneRendererLine};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, LineStrokeStyle, PixelPoint, PolygonPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any backend painting a finished frame.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
