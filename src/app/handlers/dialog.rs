//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Export-Dateidialog im nächsten Frame.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}
