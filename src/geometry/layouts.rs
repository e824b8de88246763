//! Layout-Funktionen: gerade Strecke, Auffahrt, Ausfahrt.

use glam::Vec2;

use super::{
    Ramp, Rect, RoadDimensions, RoadGeometry, RoadLayout, Segment, StraightRoad, LANE_MARK_INSET,
    ROAD_SIDE_INSET, SHOULDER_HEIGHT,
};

/// Horizontale Länge der Auffahrtsrampe (vom rechten Canvas-Rand gemessen).
const MERGE_IN_START_OFFSET: f32 = 560.0;
/// Abzweigpunkt der Ausfahrt (vom rechten Canvas-Rand gemessen).
const MERGE_OUT_SPLIT_OFFSET: f32 = 520.0;

/// Wählt die Geometrie-Funktion passend zum Layout.
pub fn geometry_for(layout: RoadLayout, dims: &RoadDimensions) -> RoadGeometry {
    match layout {
        RoadLayout::Straight => straight_road_geometry(dims),
        RoadLayout::MergeIn => merge_in_geometry(dims),
        RoadLayout::MergeOut => merge_out_geometry(dims),
    }
}

/// Hauptfahrbahn mit Randstreifen, Spurmarkierungen und Außenkanten.
pub fn straight_road_geometry(dims: &RoadDimensions) -> RoadGeometry {
    RoadGeometry {
        road: straight_road(dims),
        ramp: None,
        connector: None,
    }
}

/// Hauptfahrbahn plus Auffahrtsrampe von oben.
pub fn merge_in_geometry(dims: &RoadDimensions) -> RoadGeometry {
    let m = dims.road_margin;
    let s = dims.canvas_width - MERGE_IN_START_OFFSET;
    let e = dims.canvas_width - ROAD_SIDE_INSET;

    let ramp = Ramp {
        outer_edge: [
            Vec2::new(s, m - 45.0),
            Vec2::new(s + 140.0, m - 80.0),
            Vec2::new(s + 300.0, m - 55.0),
            Vec2::new(e, m - 25.0),
        ],
        inner_edge: [
            Vec2::new(s, m + 30.0),
            Vec2::new(s + 140.0, m + 10.0),
            Vec2::new(s + 300.0, m),
            Vec2::new(e, m + 12.0),
        ],
    };

    RoadGeometry {
        road: straight_road(dims),
        ramp: Some(ramp),
        connector: None,
    }
}

/// Hauptfahrbahn plus nach oben abzweigende Ausfahrt mit Verbindungsstück.
pub fn merge_out_geometry(dims: &RoadDimensions) -> RoadGeometry {
    let m = dims.road_margin;
    let s = dims.canvas_width - MERGE_OUT_SPLIT_OFFSET;
    let e = dims.canvas_width - ROAD_SIDE_INSET;

    let ramp = Ramp {
        outer_edge: [
            Vec2::new(s, m - 10.0),
            Vec2::new(s + 160.0, m - 55.0),
            Vec2::new(s + 320.0, m - 95.0),
            Vec2::new(e, m - 115.0),
        ],
        inner_edge: [
            Vec2::new(s, m + 40.0),
            Vec2::new(s + 160.0, m + 8.0),
            Vec2::new(s + 320.0, m - 20.0),
            Vec2::new(e, m - 35.0),
        ],
    };

    RoadGeometry {
        road: straight_road(dims),
        ramp: Some(ramp),
        connector: Some(Segment::new(
            Vec2::new(s, m + 40.0),
            Vec2::new(s + 60.0, m + 8.0),
        )),
    }
}

fn straight_road(dims: &RoadDimensions) -> StraightRoad {
    let left = ROAD_SIDE_INSET;
    let right = dims.canvas_width - ROAD_SIDE_INSET;
    let top = dims.road_margin;
    let bottom = dims.canvas_height - dims.road_margin;

    let lane_count = dims.lane_count.max(1);
    let lane_height = (bottom - top) / lane_count as f32;
    let lane_dividers = (1..lane_count)
        .map(|i| {
            let y = top + i as f32 * lane_height;
            Segment::new(
                Vec2::new(LANE_MARK_INSET, y),
                Vec2::new(dims.canvas_width - LANE_MARK_INSET, y),
            )
        })
        .collect();

    StraightRoad {
        surface: Rect::new(Vec2::new(left, top), Vec2::new(right, bottom)),
        shoulder_bands: [
            Rect::new(Vec2::new(left, top), Vec2::new(right, top + SHOULDER_HEIGHT)),
            Rect::new(
                Vec2::new(left, bottom - SHOULDER_HEIGHT),
                Vec2::new(right, bottom),
            ),
        ],
        lane_dividers,
        outer_edges: [
            Segment::new(Vec2::new(left, top), Vec2::new(right, top)),
            Segment::new(Vec2::new(left, bottom), Vec2::new(right, bottom)),
        ],
    }
}
