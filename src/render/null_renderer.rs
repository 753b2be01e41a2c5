use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Backend that only validates and counts what it receives.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_polygon_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_polygon_count = frame.polygons.len();
        Ok(())
    }
}
