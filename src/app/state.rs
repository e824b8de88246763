//! Application State: zentrale Datenhaltung.

use super::interaction::InteractionController;
use super::CommandLog;
use crate::core::SceneModel;
use crate::shared::EditorOptions;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Export-Dateidialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad des zuletzt erfolgreich exportierten Bilds (vom Host als Hinweis angezeigt)
    pub last_export_path: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_export_dialog: false,
            last_export_path: None,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug)]
pub struct ViewState {
    /// Signalisiert, dass der Renderer den Frame neu zeichnen muss
    pub frame_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (erster Frame muss gezeichnet werden).
    pub fn new() -> Self {
        Self { frame_dirty: true }
    }

    pub fn mark_frame_dirty(&mut self) {
        self.frame_dirty = true;
    }

    /// Liefert das Dirty-Flag und setzt es zurück.
    pub fn take_frame_dirty(&mut self) -> bool {
        std::mem::take(&mut self.frame_dirty)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Fahrzeuge, Selektion und Straßenlayout
    pub scene: SceneModel,
    /// Select/Drag-Zustandsautomat
    pub interaction: InteractionController,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Maße, Farben, Export)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State; die Szene wird aus `options.scene` aufgebaut.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: SceneModel::new(options.scene),
            interaction: InteractionController::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Fahrzeuge zurück (für UI-Anzeige)
    pub fn vehicle_count(&self) -> usize {
        self.scene.vehicle_count()
    }

    /// Ob ein Fahrzeug selektiert ist (für Button-Zustände)
    pub fn has_selection(&self) -> bool {
        self.scene.selected_vehicle_id().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
