//! Fehler des Szenenmodells.

use thiserror::Error;

use super::{VehicleId, VehicleRole};

/// Abgelehnte Operationen auf dem Szenenmodell. Das Modell bleibt dabei unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Fahrzeug {vehicle_id} existiert nicht")]
    NotFound { vehicle_id: VehicleId },
    #[error("Fahrzeug {vehicle_id} ist das Ego-Fahrzeug und kann nicht entfernt werden")]
    ProtectedEntity { vehicle_id: VehicleId },
    #[error("Rolle '{role}' kann nicht hinzugefügt werden")]
    InvalidRole { role: VehicleRole },
}
