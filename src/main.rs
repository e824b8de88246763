//! Road Scene Editor.
//!
//! Fahrzeuge auf einer Straßenszene platzieren, verschieben und die
//! Szene als Bild exportieren.

use eframe::egui;
use road_scene_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

/// Platz für Toolbar und Status-Bar über/unter dem Canvas.
const CHROME_HEIGHT: f32 = 90.0;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Road Scene Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let editor_options = load_options();
        let scene = editor_options.scene;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([scene.canvas_width + 16.0, scene.canvas_height + CHROME_HEIGHT])
                .with_title("Road Scene Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Road Scene Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Optionen aus TOML laden; fehlt die Datei, werden die Standardwerte geschrieben.
fn load_options() -> EditorOptions {
    let config_path = EditorOptions::config_path();
    let editor_options = EditorOptions::load_from_file(&config_path);

    if !config_path.exists() {
        if let Err(e) = editor_options.save_to_file(&config_path) {
            log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }

    editor_options
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    canvas: ui::CanvasView,
    notice: Option<ui::Notice>,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        let renderer = render::Renderer::new(&editor_options.scene);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer,
            canvas: ui::CanvasView::new(),
            notice: None,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.sync_frame(ctx);

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl EditorApp {
    /// Zeichnet den Frame neu, falls das Modell sich geändert hat, und lädt ihn als Textur.
    fn sync_frame(&mut self, ctx: &egui::Context) {
        if !self.state.view.take_frame_dirty() {
            return;
        }

        let scene = self.controller.build_render_scene(&self.state);
        let frame = self.renderer.render_scene(&scene);
        self.canvas.upload_frame(ctx, frame);
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        ui::show_notice(ctx, &mut self.notice);

        // Modaler Hinweis offen: keine Canvas- oder Tastatureingaben
        let modal_open = self.notice.is_some();
        if !modal_open {
            events.extend(ui::collect_keyboard_intents(ctx, &self.state));
        }

        let canvas_size = egui::vec2(
            self.state.options.scene.canvas_width,
            self.state.options.scene.canvas_height,
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_events = self.canvas.show(ui, canvas_size);
            if !modal_open {
                events.extend(canvas_events);
            }
        });

        if ctx.input(|i| i.viewport().close_requested()) && !self.state.should_exit {
            events.push(AppIntent::ExitRequested);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.notice = Some(ui::Notice::from_error(&e));
            }
        }

        if let Some(path) = self.state.ui.last_export_path.take() {
            self.notice = Some(ui::Notice::export_succeeded(&path));
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events
            || self.state.view.frame_dirty
            || self.state.should_exit
            || self.state.ui.show_export_dialog
        {
            ctx.request_repaint();
        }
    }
}
