use crate::core::{ItemsRange, LineType};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, LineStrokeStyle, RenderFrame};
use crate::views::LineStrokeItem;

/// Packet consumed by [`PaneRendererLine`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineRendererData {
    pub items: Vec<LineStrokeItem>,
    pub line_style: LineStrokeStyle,
    pub line_type: LineType,
    pub line_width: f64,
    pub visible_range: Option<ItemsRange>,
    pub bar_width: f64,
}

/// Strokes consecutive projected items of one line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaneRendererLine {
    data: Option<LineRendererData>,
}

impl PaneRendererLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: LineRendererData) {
        self.data = Some(data);
    }

    #[must_use]
    pub fn data(&self) -> Option<&LineRendererData> {
        self.data.as_ref()
    }

    /// Emits one segment per pair of neighbouring visible items.
    ///
    /// `Curved` lines are approximated by straight chords.
    pub fn draw(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let Some(data) = &self.data else {
            return Ok(());
        };
        let Some(range) = data.visible_range else {
            return Ok(());
        };
        let range = range.clamp_to_len(data.items.len());
        let visible = &data.items[range.indices()];

        for pair in visible.windows(2) {
            let (start, end) = (&pair[0], &pair[1]);
            let (Some((x1, y1)), Some((x2, y2))) = (start.point(), end.point()) else {
                continue;
            };
            let segment = |ax, ay, bx, by| {
                LinePrimitive::new(ax, ay, bx, by, data.line_width, start.line_color)
                    .with_stroke_style(data.line_style)
            };
            match data.line_type {
                LineType::Simple | LineType::Curved => {
                    frame.lines.push(segment(x1, y1, x2, y2));
                }
                LineType::WithSteps => {
                    frame.lines.push(segment(x1, y1, x2, y1));
                    frame.lines.push(segment(x2, y1, x2, y2));
                }
            }
        }
        Ok(())
    }
}
