use crate::core::RoadLayout;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste auf dem Canvas gedrückt (Canvas-Pixel)
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger bei gedrückter Primärtaste bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Straßenlayout in der Auswahl gewechselt
    RoadLayoutSelected { layout: RoadLayout },
    /// Neues NPC-Fahrzeug an der nächsten Startposition
    AddNpcRequested,
    /// Selektiertes Fahrzeug entfernen
    RemoveSelectedRequested,
    /// Selektion aufheben (Escape)
    ClearSelectionRequested,
    /// Export-Dialog öffnen
    ExportRequested,
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },
    /// Szene auf Ausgangszustand zurücksetzen
    NewSceneRequested,
    /// Anwendung beenden
    ExitRequested,
}
