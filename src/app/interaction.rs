//! Zustandsautomat für Selektieren und Ziehen von Fahrzeugen.
//!
//! Unabhängig von der Eingabe-API: der Host liefert Pointer-Ereignisse in
//! Canvas-Koordinaten, der Automat übersetzt sie in Modell-Operationen.

use glam::Vec2;

use crate::core::{SceneError, SceneModel, VehicleId};

/// Zustand der Zeiger-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Ein Fahrzeug wird gezogen
    Dragging {
        vehicle_id: VehicleId,
        /// Versatz Fahrzeugmittelpunkt minus Griffpunkt
        grab_offset: Vec2,
    },
}

/// Übersetzt Pointer-Ereignisse in Selektion und Verschiebung.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// ID des gezogenen Fahrzeugs, falls ein Drag aktiv ist.
    pub fn dragged_vehicle_id(&self) -> Option<VehicleId> {
        match self.state {
            DragState::Dragging { vehicle_id, .. } => Some(vehicle_id),
            DragState::Idle => None,
        }
    }

    /// Pointer gedrückt: oberstes getroffenes Fahrzeug selektieren und Drag starten.
    ///
    /// Ein Fehlklick hebt die Selektion auf. Ein noch laufender Drag
    /// (verlorenes Release) wird vorher beendet.
    pub fn pointer_down(
        &mut self,
        scene: &mut SceneModel,
        pos: Vec2,
    ) -> Result<Option<VehicleId>, SceneError> {
        if self.is_dragging() {
            log::debug!("Pointer-Down während Drag: vorherigen Drag beenden");
            self.state = DragState::Idle;
        }

        let hit = scene.hit_test(pos);
        scene.set_selection(hit)?;

        if let Some(vehicle) = hit.and_then(|id| scene.vehicle(id)) {
            self.state = DragState::Dragging {
                vehicle_id: vehicle.id,
                grab_offset: vehicle.position - pos,
            };
            log::debug!("Drag gestartet: Fahrzeug {}", vehicle.id);
        }

        Ok(hit)
    }

    /// Pointer bewegt: gezogenes Fahrzeug unter Beibehaltung des Griffversatzes verschieben.
    ///
    /// Ohne aktiven Drag passiert nichts (`Ok(None)`). Ist das gezogene
    /// Fahrzeug verschwunden, wird `NotFound` gemeldet und der Drag beendet.
    pub fn pointer_move(
        &mut self,
        scene: &mut SceneModel,
        pos: Vec2,
    ) -> Result<Option<Vec2>, SceneError> {
        let DragState::Dragging {
            vehicle_id,
            grab_offset,
        } = self.state
        else {
            return Ok(None);
        };

        match scene.move_vehicle(vehicle_id, pos + grab_offset) {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                self.state = DragState::Idle;
                Err(e)
            }
        }
    }

    /// Pointer losgelassen: Drag beenden. Gibt `true` zurück, wenn ein Drag lief.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Zurück in den Ruhezustand (z.B. nach Szenen-Reset).
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}
