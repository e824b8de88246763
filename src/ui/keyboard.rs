//! Tastatur-Shortcuts für den Canvas.

use crate::app::{AppIntent, AppState};

/// Sammelt Intents aus Tastendrücken.
///
/// Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgewertet.
pub fn collect_keyboard_intents(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ctx.wants_keyboard_input() {
        return events;
    }

    let (delete_pressed, escape_pressed) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if delete_pressed && state.has_selection() {
        events.push(AppIntent::RemoveSelectedRequested);
    }

    if escape_pressed && state.has_selection() {
        events.push(AppIntent::ClearSelectionRequested);
    }

    events
}
