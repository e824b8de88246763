//! Canvas-Widget: zeigt den gerenderten Frame und leitet Zeiger-Eingaben weiter.

use crate::app::AppIntent;

/// Hält die Canvas-Textur und den Zustand der Zeiger-Erfassung.
#[derive(Default)]
pub struct CanvasView {
    texture: Option<egui::TextureHandle>,
    /// Primärtaste wurde auf dem Canvas gedrückt und ist noch nicht losgelassen
    pointer_captured: bool,
    /// Zuletzt gemeldete Zeigerposition (Canvas-Pixel)
    last_pointer_pos: Option<glam::Vec2>,
}

impl CanvasView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt einen neu gerenderten Frame in die Textur.
    pub fn upload_frame(&mut self, ctx: &egui::Context, frame: &image::RgbaImage) {
        let size = [frame.width() as usize, frame.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());

        match &mut self.texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("scene_frame", color_image, egui::TextureOptions::NEAREST));
            }
        }
    }

    /// Zeichnet den Canvas und sammelt Zeiger-Intents.
    ///
    /// `canvas_size` ist die Größe der Render-Fläche in Pixeln. Die Anzeige
    /// wird bei Bedarf seitentreu skaliert, die Intents tragen immer
    /// Canvas-Koordinaten.
    pub fn show(&mut self, ui: &mut egui::Ui, canvas_size: egui::Vec2) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let available = ui.available_size();
        let scale = (available.x / canvas_size.x)
            .min(available.y / canvas_size.y)
            .max(0.1);
        let (rect, response) =
            ui.allocate_exact_size(canvas_size * scale, egui::Sense::click_and_drag());

        if let Some(texture) = &self.texture {
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        let to_canvas = |pos: egui::Pos2| -> glam::Vec2 {
            let rel = (pos - rect.min) / rect.size() * canvas_size;
            glam::Vec2::new(rel.x, rel.y)
        };

        let (primary_pressed, primary_released, press_origin) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
            )
        });

        // Exakte Klickposition statt der (ggf. schon verschobenen) aktuellen
        if primary_pressed {
            if let Some(origin) = press_origin.filter(|p| rect.contains(*p)) {
                let pos = to_canvas(origin);
                events.push(AppIntent::PointerPressed { pos });
                self.pointer_captured = true;
                self.last_pointer_pos = Some(pos);
            }
        }

        if self.pointer_captured && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pointer) = response.interact_pointer_pos() {
                let pos = to_canvas(pointer);
                if self.last_pointer_pos != Some(pos) {
                    events.push(AppIntent::PointerMoved { pos });
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        if primary_released && self.pointer_captured {
            events.push(AppIntent::PointerReleased);
            self.pointer_captured = false;
            self.last_pointer_pos = None;
        }

        events
    }
}
