use crate::core::ItemsRange;
use crate::error::ChartResult;
use crate::render::{Color, PixelPoint, PolygonPrimitive, RenderFrame};
use crate::views::CloudAreaItem;

/// Packet consumed by [`PaneRendererCloudArea`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloudAreaRendererData {
    pub items: Vec<CloudAreaItem>,
    pub positive_color: Color,
    pub negative_color: Color,
    pub visible_range: Option<ItemsRange>,
    pub bar_width: f64,
}

/// Fills the band between the higher and the lower boundary.
///
/// Each item carries its side (`is_above`, resolved from its row's close
/// against its open). A segment between two neighbouring visible items whose
/// ends share a side is filled in that side's color. When the sides differ
/// the segment is split where the boundaries cross, or halfway when they do
/// not cross inside it, and each half takes its own end's color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaneRendererCloudArea {
    data: Option<CloudAreaRendererData>,
}

struct BandPoint {
    x: f64,
    higher_y: f64,
    lower_y: f64,
    is_positive: bool,
}

impl BandPoint {
    fn from_item(item: &CloudAreaItem) -> Option<Self> {
        Some(Self {
            x: item.x.value()?,
            higher_y: item.higher_y.value()?,
            lower_y: item.lower_y.value()?,
            is_positive: item.is_above,
        })
    }

    fn between(start: &Self, end: &Self, t: f64) -> Self {
        Self {
            x: start.x + t * (end.x - start.x),
            higher_y: start.higher_y + t * (end.higher_y - start.higher_y),
            lower_y: start.lower_y + t * (end.lower_y - start.lower_y),
            is_positive: start.is_positive,
        }
    }

    fn higher(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.higher_y)
    }

    fn lower(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.lower_y)
    }
}

impl PaneRendererCloudArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: CloudAreaRendererData) {
        self.data = Some(data);
    }

    #[must_use]
    pub fn data(&self) -> Option<&CloudAreaRendererData> {
        self.data.as_ref()
    }

    pub fn draw(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let Some(data) = &self.data else {
            return Ok(());
        };
        let Some(range) = data.visible_range else {
            return Ok(());
        };
        let range = range.clamp_to_len(data.items.len());
        let color = |is_positive: bool| {
            if is_positive {
                data.positive_color
            } else {
                data.negative_color
            }
        };

        for pair in data.items[range.indices()].windows(2) {
            let (Some(start), Some(end)) =
                (BandPoint::from_item(&pair[0]), BandPoint::from_item(&pair[1]))
            else {
                continue;
            };

            if start.is_positive == end.is_positive {
                frame.polygons.push(PolygonPrimitive::new(
                    vec![start.higher(), end.higher(), end.lower(), start.lower()],
                    color(start.is_positive),
                ));
                continue;
            }

            if let Some(t) = crossing_ratio(&start, &end) {
                let crossing = BandPoint::between(&start, &end, t).higher();
                if t > 0.0 {
                    frame.polygons.push(PolygonPrimitive::new(
                        vec![start.higher(), crossing, start.lower()],
                        color(start.is_positive),
                    ));
                }
                if t < 1.0 {
                    frame.polygons.push(PolygonPrimitive::new(
                        vec![crossing, end.higher(), end.lower()],
                        color(end.is_positive),
                    ));
                }
                continue;
            }

            let middle = BandPoint::between(&start, &end, 0.5);
            frame.polygons.push(PolygonPrimitive::new(
                vec![start.higher(), middle.higher(), middle.lower(), start.lower()],
                color(start.is_positive),
            ));
            frame.polygons.push(PolygonPrimitive::new(
                vec![middle.higher(), end.higher(), end.lower(), middle.lower()],
                color(end.is_positive),
            ));
        }
        Ok(())
    }
}

/// Position in `[0, 1]` along the segment where the boundaries meet, if
/// they swap order inside it.
fn crossing_ratio(start: &BandPoint, end: &BandPoint) -> Option<f64> {
    let start_gap = start.higher_y - start.lower_y;
    let end_gap = end.higher_y - end.lower_y;
    if start_gap * end_gap > 0.0 || start_gap == end_gap {
        return None;
    }
    Some((start_gap / (start_gap - end_gap)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::{CloudAreaRendererData, PaneRendererCloudArea};
    use crate::core::{Coordinate, ItemsRange, Viewport};
    use crate::render::{Color, RenderFrame};
    use crate::views::CloudAreaItem;
    use approx::assert_relative_eq;

    const POSITIVE: Color = Color::rgb(0.0, 1.0, 0.0);
    const NEGATIVE: Color = Color::rgb(1.0, 0.0, 0.0);

    // Linear scale stand-in: y = 100 - price.
    fn projected_with_side(time: i64, higher: f64, lower: f64, is_above: bool) -> CloudAreaItem {
        CloudAreaItem {
            x: Coordinate::Computed(time as f64 * 10.0),
            higher_y: Coordinate::Computed(100.0 - higher),
            lower_y: Coordinate::Computed(100.0 - lower),
            ..CloudAreaItem::new(time, higher, lower, is_above)
        }
    }

    fn projected(time: i64, higher: f64, lower: f64) -> CloudAreaItem {
        projected_with_side(time, higher, lower, higher >= lower)
    }

    fn draw(items: Vec<CloudAreaItem>, range: Option<ItemsRange>) -> RenderFrame {
        let mut renderer = PaneRendererCloudArea::new();
        renderer.set_data(CloudAreaRendererData {
            items,
            positive_color: POSITIVE,
            negative_color: NEGATIVE,
            visible_range: range,
            bar_width: 10.0,
        });
        let mut frame = RenderFrame::new(Viewport::new(200, 100));
        renderer.draw(&mut frame).expect("draw");
        frame
    }

    #[test]
    fn same_sign_segments_are_quads() {
        let items = vec![
            projected(0, 20.0, 10.0),
            projected(1, 25.0, 12.0),
            projected(2, 22.0, 22.0),
        ];
        let frame = draw(items, Some(ItemsRange::new(0, 3)));
        assert_eq!(frame.polygons.len(), 2);
        assert!(frame.polygons.iter().all(|polygon| polygon.points.len() == 4));
        assert!(frame.polygons.iter().all(|polygon| polygon.fill_color == POSITIVE));
    }

    #[test]
    fn crossing_segment_is_split_at_intersection() {
        let items = vec![projected(0, 20.0, 10.0), projected(1, 10.0, 20.0)];
        let frame = draw(items, Some(ItemsRange::new(0, 2)));
        assert_eq!(frame.polygons.len(), 2);
        assert_eq!(frame.polygons[0].fill_color, POSITIVE);
        assert_eq!(frame.polygons[1].fill_color, NEGATIVE);
        let crossing = frame.polygons[0].points[1];
        assert_relative_eq!(crossing.x, 5.0);
        assert_relative_eq!(crossing.y, 85.0);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn items_outside_range_are_never_drawn() {
        let mut items = vec![projected(0, 20.0, 10.0), projected(1, 20.0, 10.0)];
        items.push(CloudAreaItem::new(2, 20.0, 10.0, true));
        let frame = draw(items.clone(), Some(ItemsRange::new(1, 3)));
        assert!(frame.polygons.is_empty());
        assert!(draw(items, None).is_empty());
    }

    #[test]
    fn side_comes_from_item_not_boundary_order() {
        let items = vec![
            projected_with_side(0, 60.0, 40.0, false),
            projected_with_side(1, 60.0, 40.0, false),
        ];
        let frame = draw(items, Some(ItemsRange::new(0, 2)));
        assert_eq!(frame.polygons.len(), 1);
        assert_eq!(frame.polygons[0].fill_color, NEGATIVE);
    }

    #[test]
    fn side_change_without_crossing_splits_halfway() {
        let items = vec![
            projected_with_side(0, 60.0, 40.0, true),
            projected_with_side(1, 70.0, 30.0, false),
        ];
        let frame = draw(items, Some(ItemsRange::new(0, 2)));
        assert_eq!(frame.polygons.len(), 2);
        assert_eq!(frame.polygons[0].fill_color, POSITIVE);
        assert_eq!(frame.polygons[1].fill_color, NEGATIVE);
        let middle_higher = frame.polygons[0].points[1];
        let middle_lower = frame.polygons[0].points[2];
        assert_relative_eq!(middle_higher.x, 5.0);
        assert_relative_eq!(middle_higher.y, 35.0);
        assert_relative_eq!(middle_lower.y, 65.0);
        assert!(frame.validate().is_ok());
    }
}
