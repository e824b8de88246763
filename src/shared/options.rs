//! Zentrale Konfiguration für den Road Scene Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::SceneConfig;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Canvas-Hintergrund (Weiß).
pub const BACKGROUND_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
/// Fahrbahnfläche und Rampe (Hellgrau).
pub const ROAD_SURFACE_COLOR: [u8; 4] = [0xf5, 0xf5, 0xf5, 0xff];
/// Randstreifen (Fast-Schwarz).
pub const SHOULDER_COLOR: [u8; 4] = [0x1f, 0x1f, 0x1f, 0xff];
/// Fahrbahnkanten, Rampenumriss und Verbindungsstück (Dunkelgrau).
pub const ROAD_EDGE_COLOR: [u8; 4] = [0x30, 0x30, 0x30, 0xff];
/// Spurmarkierungen (Hellgrau).
pub const LANE_MARK_COLOR: [u8; 4] = [0xe6, 0xe6, 0xe6, 0xff];
/// Füllung des Ego-Fahrzeugs (Blau).
pub const EGO_FILL_COLOR: [u8; 4] = [0x2b, 0x6c, 0xb0, 0xff];
/// Umriss des Ego-Fahrzeugs (Dunkelblau).
pub const EGO_OUTLINE_COLOR: [u8; 4] = [0x1e, 0x3c, 0x68, 0xff];
/// Füllung der NPC-Fahrzeuge (Grau).
pub const NPC_FILL_COLOR: [u8; 4] = [0x5f, 0x5f, 0x5f, 0xff];
/// Umriss der NPC-Fahrzeuge (Dunkelgrau).
pub const NPC_OUTLINE_COLOR: [u8; 4] = [0x3d, 0x3d, 0x3d, 0xff];
/// Beschriftung im Fahrzeug (Weiß).
pub const LABEL_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
/// Selektionsrahmen (Orange).
pub const HIGHLIGHT_COLOR: [u8; 4] = [0xf5, 0x9e, 0x0b, 0xff];

// ── Export ──────────────────────────────────────────────────────────

/// JPEG-Qualität beim Export.
pub const JPEG_QUALITY: u8 = 95;

// ── NPC-Platzierung ─────────────────────────────────────────────────

/// Horizontaler Versatz neuer NPCs rechts der Canvas-Mitte.
pub const NPC_SPAWN_OFFSET_X: f32 = 100.0;
/// Vertikaler Abstand der drei NPC-Startreihen.
pub const NPC_SPAWN_SPACING_Y: f32 = 50.0;

/// Farbpalette des Renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPalette {
    pub background: [u8; 4],
    pub road_surface: [u8; 4],
    pub shoulder: [u8; 4],
    pub road_edge: [u8; 4],
    pub lane_mark: [u8; 4],
    pub ego_fill: [u8; 4],
    pub ego_outline: [u8; 4],
    pub npc_fill: [u8; 4],
    pub npc_outline: [u8; 4],
    pub label: [u8; 4],
    pub highlight: [u8; 4],
}

impl Default for RenderPalette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            road_surface: ROAD_SURFACE_COLOR,
            shoulder: SHOULDER_COLOR,
            road_edge: ROAD_EDGE_COLOR,
            lane_mark: LANE_MARK_COLOR,
            ego_fill: EGO_FILL_COLOR,
            ego_outline: EGO_OUTLINE_COLOR,
            npc_fill: NPC_FILL_COLOR,
            npc_outline: NPC_OUTLINE_COLOR,
            label: LABEL_COLOR,
            highlight: HIGHLIGHT_COLOR,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `road_scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// JPEG-Qualität (1–100)
    pub jpeg_quality: u8,
    /// Versatz neuer NPCs rechts der Mitte
    pub npc_spawn_offset_x: f32,
    /// Reihenabstand neuer NPCs
    pub npc_spawn_spacing_y: f32,
    /// Canvas-, Straßen- und Fahrzeugmaße
    pub scene: SceneConfig,
    /// Farben aller gezeichneten Elemente
    pub palette: RenderPalette,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: JPEG_QUALITY,
            npc_spawn_offset_x: NPC_SPAWN_OFFSET_X,
            npc_spawn_spacing_y: NPC_SPAWN_SPACING_Y,
            scene: SceneConfig::default(),
            palette: RenderPalette::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road-scene-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_scene_editor.toml")
    }

    /// Startposition für das nächste NPC (vor dem Beschränken).
    ///
    /// Drei Reihen um die Canvas-Mitte, abhängig von der aktuellen NPC-Anzahl.
    pub fn npc_spawn_position(&self, npc_count: usize) -> Vec2 {
        let row = (npc_count % 3) as f32 - 1.0;
        Vec2::new(
            self.scene.canvas_width / 2.0 + self.npc_spawn_offset_x,
            self.scene.canvas_height / 2.0 + row * self.npc_spawn_spacing_y,
        )
    }
}
