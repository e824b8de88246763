//! Zeichnet Fahrzeug-Marker, Labels und den Selektionsrahmen.

use glam::Vec2;
use image::{Rgba, RgbaImage};
use road_scene_raster::{
    draw_text_centered, fill_rect, stroke_dashed, stroke_rect, text_height, text_width, Dash,
};

use crate::core::{Vehicle, VehicleRole};
use crate::shared::RenderPalette;

const VEHICLE_OUTLINE_WIDTH: f32 = 2.0;
const HIGHLIGHT_WIDTH: f32 = 2.0;
const HIGHLIGHT_DASH: Dash = Dash::new(6.0, 4.0);
/// Abstand des Selektionsrahmens außerhalb der Fahrzeug-Box
const HIGHLIGHT_INSET: f32 = 4.0;
const LABEL_SCALE: u32 = 2;
/// Mindestabstand des Labels zum Box-Rand
const LABEL_PADDING: f32 = 4.0;

/// Zeichnet ein Fahrzeug als gefülltes Rechteck mit Umriss und Label.
pub(super) fn draw_vehicle(
    image: &mut RgbaImage,
    vehicle: &Vehicle,
    size: Vec2,
    palette: &RenderPalette,
) {
    let (fill, outline) = match vehicle.role {
        VehicleRole::Ego => (palette.ego_fill, palette.ego_outline),
        VehicleRole::Npc => (palette.npc_fill, palette.npc_outline),
    };
    let bounds = vehicle.bounds(size);

    fill_rect(image, bounds.min, bounds.max, Rgba(fill));
    stroke_rect(
        image,
        bounds.min,
        bounds.max,
        VEHICLE_OUTLINE_WIDTH,
        Rgba(outline),
    );

    let label = vehicle.label();
    let scale = label_scale(&label, size);
    draw_text_centered(image, vehicle.position, &label, Rgba(palette.label), scale);
}

/// Gestrichelter Rahmen um das selektierte Fahrzeug.
pub(super) fn draw_highlight(
    image: &mut RgbaImage,
    vehicle: &Vehicle,
    size: Vec2,
    palette: &RenderPalette,
) {
    let frame = vehicle.bounds(size).expand(HIGHLIGHT_INSET);
    stroke_dashed(
        image,
        &frame.corners(),
        true,
        HIGHLIGHT_WIDTH,
        HIGHLIGHT_DASH,
        Rgba(palette.highlight),
    );
}

/// Größte Schrift, bei der das Label in die Box passt (mindestens 1).
fn label_scale(label: &str, size: Vec2) -> u32 {
    let fits = |scale: u32| {
        text_width(label, scale) as f32 <= size.x - 2.0 * LABEL_PADDING
            && text_height(scale) as f32 <= size.y - 2.0 * LABEL_PADDING
    };
    if fits(LABEL_SCALE) {
        LABEL_SCALE
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_labels_fall_back_to_small_font() {
        let size = Vec2::new(70.0, 36.0);

        assert_eq!(label_scale("NPC 2", size), 2);
        assert_eq!(label_scale("ego", size), 2);
        assert_eq!(label_scale("NPC 12345", size), 1);
    }
}
