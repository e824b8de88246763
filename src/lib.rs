//! Road Scene Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geometry;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, DragState, InteractionController,
    UiState, ViewState,
};
pub use core::{RoadLayout, SceneConfig, SceneError, SceneModel, Vehicle, VehicleId, VehicleRole};
pub use geometry::{Rect, RoadGeometry};
pub use render::{ExportError, ExportFormat, Renderer};
pub use shared::{EditorOptions, RenderPalette, RenderScene};
