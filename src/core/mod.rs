//! Core-Domänentypen: Szenenmodell, Fahrzeuge, Konfiguration.

pub mod config;
pub mod error;
/// Szenenmodell mit Fahrzeugen, Selektion und Layout
///
/// Einziger Ort, an dem Fahrzeuge erzeugt, verschoben und entfernt werden.
pub mod scene;
pub mod vehicle;

pub use crate::geometry::RoadLayout;
pub use config::SceneConfig;
pub use error::SceneError;
pub use scene::SceneModel;
pub use vehicle::{Vehicle, VehicleId, VehicleRole};
