//! Handler für den Bild-Export.

use anyhow::Result;

use crate::app::{render_scene, AppState};
use crate::render;

/// Rendert einen frischen Frame aus dem aktuellen Zustand und schreibt ihn nach `path`.
///
/// Das Format folgt der Dateiendung (`.jpg`/`.jpeg`/`.png`). Die Szene bleibt unverändert.
pub fn export_frame(state: &mut AppState, path: String) -> Result<()> {
    let scene = render_scene::build(state);
    let frame = render::render_frame(&scene);

    render::export_frame(&frame, std::path::Path::new(&path), state.options.jpeg_quality)
        .inspect_err(|e| log::error!("Export nach {} fehlgeschlagen: {}", path, e))?;

    log::info!("Szene exportiert: {}", path);
    state.ui.last_export_path = Some(path);
    Ok(())
}
