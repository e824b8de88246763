//! Zeichnet Fahrbahn, Rampe und Verbindungsstück.

use image::{Rgba, RgbaImage};
use road_scene_raster::{
    fill_polygon, fill_rect, smooth_closed, smooth_open, stroke_dashed, stroke_polygon,
    stroke_polyline, Dash,
};

use crate::geometry::{Ramp, RoadGeometry, StraightRoad};
use crate::shared::RenderPalette;

const LANE_MARK_WIDTH: f32 = 3.0;
const LANE_MARK_DASH: Dash = Dash::new(18.0, 14.0);
const OUTER_EDGE_WIDTH: f32 = 3.0;
const RAMP_OUTLINE_WIDTH: f32 = 3.0;
const RAMP_INNER_EDGE_WIDTH: f32 = 2.0;
const RAMP_INNER_EDGE_DASH: Dash = Dash::new(14.0, 10.0);
const CONNECTOR_WIDTH: f32 = 3.0;
/// Abtastpunkte pro Spline-Segment beim Glätten der Rampenkurven
const CURVE_SAMPLES: usize = 8;

/// Zeichnet die komplette Straßengeometrie eines Layouts.
pub(super) fn draw_road(image: &mut RgbaImage, geometry: &RoadGeometry, palette: &RenderPalette) {
    draw_straight_road(image, &geometry.road, palette);

    if let Some(ramp) = &geometry.ramp {
        draw_ramp(image, ramp, palette);
    }

    if let Some(connector) = &geometry.connector {
        stroke_polyline(
            image,
            &connector.points(),
            CONNECTOR_WIDTH,
            Rgba(palette.road_edge),
        );
    }
}

fn draw_straight_road(image: &mut RgbaImage, road: &StraightRoad, palette: &RenderPalette) {
    fill_rect(
        image,
        road.surface.min,
        road.surface.max,
        Rgba(palette.road_surface),
    );
    for band in &road.shoulder_bands {
        fill_rect(image, band.min, band.max, Rgba(palette.shoulder));
    }

    for divider in &road.lane_dividers {
        stroke_dashed(
            image,
            &divider.points(),
            false,
            LANE_MARK_WIDTH,
            LANE_MARK_DASH,
            Rgba(palette.lane_mark),
        );
    }

    for edge in &road.outer_edges {
        stroke_polyline(image, &edge.points(), OUTER_EDGE_WIDTH, Rgba(palette.road_edge));
    }
}

fn draw_ramp(image: &mut RgbaImage, ramp: &Ramp, palette: &RenderPalette) {
    let outline = smooth_closed(&ramp.polygon(), CURVE_SAMPLES);
    fill_polygon(image, &outline, Rgba(palette.road_surface));
    stroke_polygon(image, &outline, RAMP_OUTLINE_WIDTH, Rgba(palette.road_edge));

    let inner = smooth_open(&ramp.inner_edge, CURVE_SAMPLES);
    stroke_dashed(
        image,
        &inner,
        false,
        RAMP_INNER_EDGE_WIDTH,
        RAMP_INNER_EDGE_DASH,
        Rgba(palette.lane_mark),
    );
}
