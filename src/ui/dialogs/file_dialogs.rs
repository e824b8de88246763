use crate::app::{AppIntent, UiState};

/// Standard-Dateiname im Export-Dialog.
const DEFAULT_EXPORT_NAME: &str = "szene.jpg";

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Hängt `.jpg` an, wenn der gewählte Pfad keine Endung trägt.
fn with_default_extension(path: std::path::PathBuf) -> std::path::PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("jpg")
    }
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Export-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("PNG", &["png"])
            .set_file_name(DEFAULT_EXPORT_NAME)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&with_default_extension(path)),
            });
        }
    }

    events
}
