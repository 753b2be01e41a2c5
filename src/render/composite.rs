use smallvec::SmallVec;

use crate::error::ChartResult;
use crate::render::{PaneRendererCloudArea, PaneRendererLine, RenderFrame};

/// Any pane renderer a composite can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesRenderer {
    CloudArea(PaneRendererCloudArea),
    Line(PaneRendererLine),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRendererKind {
    CloudArea,
    Line,
}

impl SeriesRenderer {
    #[must_use]
    pub fn kind(&self) -> SeriesRendererKind {
        match self {
            Self::CloudArea(_) => SeriesRendererKind::CloudArea,
            Self::Line(_) => SeriesRendererKind::Line,
        }
    }

    pub fn draw(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        match self {
            Self::CloudArea(renderer) => renderer.draw(frame),
            Self::Line(renderer) => renderer.draw(frame),
        }
    }
}

impl From<PaneRendererCloudArea> for SeriesRenderer {
    fn from(renderer: PaneRendererCloudArea) -> Self {
        Self::CloudArea(renderer)
    }
}

impl From<PaneRendererLine> for SeriesRenderer {
    fn from(renderer: PaneRendererLine) -> Self {
        Self::Line(renderer)
    }
}

/// Ordered group of renderers painted as one.
///
/// Registration order is paint order: later renderers draw over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeRenderer {
    renderers: SmallVec<[SeriesRenderer; 3]>,
}

impl CompositeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_renderers(&mut self, renderers: impl IntoIterator<Item = SeriesRenderer>) {
        self.renderers = renderers.into_iter().collect();
    }

    #[must_use]
    pub fn renderers(&self) -> &[SeriesRenderer] {
        &self.renderers
    }

    pub fn renderers_mut(&mut self) -> &mut [SeriesRenderer] {
        &mut self.renderers
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<SeriesRendererKind> {
        self.renderers.iter().map(SeriesRenderer::kind).collect()
    }

    pub fn draw(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        for renderer in &self.renderers {
            renderer.draw(frame)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CompositeRenderer, SeriesRenderer, SeriesRendererKind};
    use crate::render::{PaneRendererCloudArea, PaneRendererLine};

    #[test]
    fn keeps_registration_order() {
        let mut composite = CompositeRenderer::new();
        composite.set_renderers([
            SeriesRenderer::from(PaneRendererLine::new()),
            SeriesRenderer::from(PaneRendererCloudArea::new()),
        ]);
        assert_eq!(
            composite.kinds(),
            vec![SeriesRendererKind::Line, SeriesRendererKind::CloudArea]
        );
    }
}
