//! CPU-Rendering der Szene in einen RGBA-Puffer.
//!
//! Reihenfolge pro Frame: Hintergrund, Straße, Fahrzeuge in Zeichenreihenfolge,
//! zuletzt der Selektionsrahmen. Der Renderer liest nur die `RenderScene`
//! und verändert keinen Szenenzustand.

mod export;
mod road_renderer;
mod vehicle_renderer;

pub use crate::shared::RenderScene;
pub use export::{export_frame, ExportError, ExportFormat};

use image::{Rgba, RgbaImage};
use road_scene_raster::clear;

use crate::core::SceneConfig;
use crate::geometry::geometry_for;

/// Besitzer der Render-Oberfläche.
///
/// Die Oberfläche wird nur hier beschrieben; nach `render_scene()` enthält sie
/// einen vollständigen Frame.
pub struct Renderer {
    surface: RgbaImage,
}

impl Renderer {
    /// Erstellt einen Renderer mit leerer Oberfläche in Canvas-Größe.
    pub fn new(config: &SceneConfig) -> Self {
        let (width, height) = config.canvas_size_px();
        Self {
            surface: RgbaImage::new(width, height),
        }
    }

    /// Zeichnet den kompletten Frame neu und gibt die Oberfläche zurück.
    pub fn render_scene(&mut self, scene: &RenderScene) -> &RgbaImage {
        let (width, height) = scene.config.canvas_size_px();
        if self.surface.dimensions() != (width, height) {
            self.surface = RgbaImage::new(width, height);
        }

        compose(&mut self.surface, scene);
        &self.surface
    }

    /// Zuletzt gezeichneter Frame.
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }
}

/// Rendert einen frischen Frame ohne gemeinsame Oberfläche (z.B. für den Export).
pub fn render_frame(scene: &RenderScene) -> RgbaImage {
    let (width, height) = scene.config.canvas_size_px();
    let mut image = RgbaImage::new(width, height);
    compose(&mut image, scene);
    image
}

fn compose(image: &mut RgbaImage, scene: &RenderScene) {
    let palette = &scene.palette;
    clear(image, Rgba(palette.background));

    let geometry = geometry_for(scene.layout, &scene.config.road_dimensions());
    road_renderer::draw_road(image, &geometry, palette);

    let size = scene.config.vehicle_size();
    for vehicle in &scene.vehicles {
        vehicle_renderer::draw_vehicle(image, vehicle, size, palette);
    }

    if let Some(selected) = scene.selected_vehicle() {
        vehicle_renderer::draw_highlight(image, selected, size, palette);
    }
}
