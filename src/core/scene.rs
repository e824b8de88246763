//! Das Szenenmodell: Fahrzeuge, Selektion und Straßenlayout.

use glam::Vec2;
use indexmap::IndexMap;

use super::{SceneConfig, SceneError, Vehicle, VehicleId, VehicleRole};
use crate::geometry::{Rect, RoadLayout};

/// Einzige Datenquelle für Fahrzeuge, Selektion und Layout.
///
/// Nach der Konstruktion gilt stets:
/// - es existiert genau ein Ego-Fahrzeug
/// - die Selektion verweist nur auf vorhandene Fahrzeuge
/// - alle Positionen liegen im befahrbaren Bereich
/// - IDs werden innerhalb einer Sitzung nie wiederverwendet
///
/// Die Einfügereihenfolge der Fahrzeuge ist die Zeichenreihenfolge
/// (zuerst eingefügt = unten).
#[derive(Debug, Clone)]
pub struct SceneModel {
    config: SceneConfig,
    layout: RoadLayout,
    vehicles: IndexMap<VehicleId, Vehicle>,
    selected_vehicle_id: Option<VehicleId>,
    next_vehicle_id: VehicleId,
}

impl SceneModel {
    /// Erstellt ein Modell und initialisiert es sofort (Ego-Fahrzeug vorhanden).
    pub fn new(config: SceneConfig) -> Self {
        let mut scene = Self {
            config,
            layout: RoadLayout::default(),
            vehicles: IndexMap::new(),
            selected_vehicle_id: None,
            next_vehicle_id: 1,
        };
        scene.initialize();
        scene
    }

    /// Setzt die Szene zurück: alle Fahrzeuge weg, ID-Zähler auf 1, neues Ego.
    ///
    /// Das Straßenlayout bleibt erhalten.
    pub fn initialize(&mut self) {
        self.vehicles.clear();
        self.selected_vehicle_id = None;
        self.next_vehicle_id = 1;

        let position = self.clamp(self.config.ego_start_position());
        let id = self.allocate_id();
        self.vehicles
            .insert(id, Vehicle::new(id, VehicleRole::Ego, position));

        log::info!("Szene initialisiert: Ego-Fahrzeug {} bei {:?}", id, position);
    }

    /// Fügt ein NPC-Fahrzeug an der (beschränkten) Position hinzu.
    ///
    /// Ein zweites Ego-Fahrzeug wird mit `InvalidRole` abgelehnt.
    pub fn add_vehicle(&mut self, role: VehicleRole, pos: Vec2) -> Result<VehicleId, SceneError> {
        if role == VehicleRole::Ego {
            return Err(SceneError::InvalidRole { role });
        }

        let position = self.clamp(pos);
        let id = self.allocate_id();
        self.vehicles.insert(id, Vehicle::new(id, role, position));

        log::debug!("Fahrzeug {} ({}) hinzugefügt bei {:?}", id, role, position);
        Ok(id)
    }

    /// Entfernt ein Fahrzeug und hebt eine darauf zeigende Selektion auf.
    pub fn remove_vehicle(&mut self, id: VehicleId) -> Result<Vehicle, SceneError> {
        let vehicle = self
            .vehicles
            .get(&id)
            .ok_or(SceneError::NotFound { vehicle_id: id })?;
        if vehicle.is_ego() {
            return Err(SceneError::ProtectedEntity { vehicle_id: id });
        }

        // shift_remove erhält die Zeichenreihenfolge der übrigen Fahrzeuge
        let removed = self
            .vehicles
            .shift_remove(&id)
            .ok_or(SceneError::NotFound { vehicle_id: id })?;
        if self.selected_vehicle_id == Some(id) {
            self.selected_vehicle_id = None;
        }

        log::debug!("Fahrzeug {} entfernt", id);
        Ok(removed)
    }

    /// Setzt oder löscht die Selektion.
    pub fn set_selection(&mut self, id: Option<VehicleId>) -> Result<(), SceneError> {
        if let Some(vehicle_id) = id {
            if !self.vehicles.contains_key(&vehicle_id) {
                return Err(SceneError::NotFound { vehicle_id });
            }
        }
        self.selected_vehicle_id = id;
        Ok(())
    }

    /// Verschiebt ein Fahrzeug; die Position wird stillschweigend beschränkt.
    ///
    /// Gibt die tatsächlich gespeicherte Position zurück.
    pub fn move_vehicle(&mut self, id: VehicleId, pos: Vec2) -> Result<Vec2, SceneError> {
        let position = self.clamp(pos);
        let vehicle = self
            .vehicles
            .get_mut(&id)
            .ok_or(SceneError::NotFound { vehicle_id: id })?;
        vehicle.position = position;
        Ok(position)
    }

    /// Wechselt das Straßenlayout. Fahrzeuge bleiben unverändert.
    pub fn set_road_layout(&mut self, layout: RoadLayout) {
        self.layout = layout;
    }

    pub fn road_layout(&self) -> RoadLayout {
        self.layout
    }

    /// Fahrzeuge in Zeichenreihenfolge (unten zuerst).
    pub fn vehicles(&self) -> impl DoubleEndedIterator<Item = &Vehicle> + ExactSizeIterator {
        self.vehicles.values()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// Das Ego-Fahrzeug.
    pub fn ego(&self) -> Option<&Vehicle> {
        self.vehicles.values().find(|v| v.is_ego())
    }

    pub fn selected_vehicle_id(&self) -> Option<VehicleId> {
        self.selected_vehicle_id
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected_vehicle_id
            .and_then(|id| self.vehicles.get(&id))
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn npc_count(&self) -> usize {
        self.vehicles
            .values()
            .filter(|v| v.role == VehicleRole::Npc)
            .count()
    }

    /// Erlaubter Bereich für Fahrzeugmittelpunkte.
    pub fn drivable_bounds(&self) -> Rect {
        self.config.drivable_bounds()
    }

    /// Oberstes Fahrzeug, dessen Bounding-Box `pos` enthält (Kanten inklusive).
    pub fn hit_test(&self, pos: Vec2) -> Option<VehicleId> {
        let size = self.config.vehicle_size();
        self.vehicles
            .values()
            .rev()
            .find(|v| v.bounds(size).contains(pos))
            .map(|v| v.id)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Beschränkt eine Position auf den befahrbaren Bereich.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        let bounds = self.drivable_bounds();
        // NaN-Koordinaten landen auf der unteren Grenze
        let pos = Vec2::new(
            if pos.x.is_nan() { bounds.min.x } else { pos.x },
            if pos.y.is_nan() { bounds.min.y } else { pos.y },
        );
        bounds.clamp(pos)
    }

    fn allocate_id(&mut self) -> VehicleId {
        let id = self.next_vehicle_id;
        self.next_vehicle_id += 1;
        id
    }
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
