use crate::core::{RoadLayout, VehicleId, VehicleRole};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pointer-Down an das Interaktions-Modell weiterreichen
    PointerDown { pos: glam::Vec2 },
    /// Pointer-Move (verschiebt nur während eines Drags)
    PointerMove { pos: glam::Vec2 },
    /// Pointer-Up (beendet einen Drag)
    PointerUp,
    /// Straßenlayout setzen
    SetRoadLayout { layout: RoadLayout },
    /// Fahrzeug an Position hinzufügen (Position wird beschränkt)
    AddVehicle { role: VehicleRole, pos: glam::Vec2 },
    /// Fahrzeug entfernen
    RemoveVehicle { vehicle_id: VehicleId },
    /// Selektion setzen oder aufheben
    SetSelection { vehicle_id: Option<VehicleId> },
    /// Szene neu initialisieren (nur Ego-Fahrzeug)
    InitializeScene,
    /// Export-Dateidialog öffnen
    RequestExportDialog,
    /// Aktuellen Frame als Bild exportieren
    ExportFrame { path: String },
    /// Anwendung beenden
    RequestExit,
}
