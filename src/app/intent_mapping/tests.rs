use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{RoadLayout, VehicleRole};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn pointer_intents_map_one_to_one() {
    let state = AppState::new();
    let pos = Vec2::new(12.0, 34.0);

    let pressed = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });
    let moved = map_intent_to_commands(&state, AppIntent::PointerMoved { pos });
    let released = map_intent_to_commands(&state, AppIntent::PointerReleased);

    assert_eq!(pressed, vec![AppCommand::PointerDown { pos }]);
    assert_eq!(moved, vec![AppCommand::PointerMove { pos }]);
    assert_eq!(released, vec![AppCommand::PointerUp]);
}

#[test]
fn add_npc_uses_spawn_position_for_current_npc_count() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::AddNpcRequested);
    assert_eq!(
        commands,
        vec![AppCommand::AddVehicle {
            role: VehicleRole::Npc,
            pos: Vec2::new(650.0, 210.0),
        }]
    );

    state
        .scene
        .add_vehicle(VehicleRole::Npc, Vec2::new(650.0, 210.0))
        .expect("NPC sollte hinzugefügt werden");

    let commands = map_intent_to_commands(&state, AppIntent::AddNpcRequested);
    assert!(matches!(
        commands[0],
        AppCommand::AddVehicle { pos, .. } if pos == Vec2::new(650.0, 260.0)
    ));
}

#[test]
fn remove_selected_without_selection_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::RemoveSelectedRequested);

    assert!(commands.is_empty());
}

#[test]
fn remove_selected_targets_selected_vehicle() {
    let mut state = AppState::new();
    state
        .scene
        .set_selection(Some(1))
        .expect("Ego sollte selektierbar sein");

    let commands = map_intent_to_commands(&state, AppIntent::RemoveSelectedRequested);

    assert_eq!(commands, vec![AppCommand::RemoveVehicle { vehicle_id: 1 }]);
}

#[test]
fn selecting_current_layout_is_a_no_op() {
    let state = AppState::new();

    let same = map_intent_to_commands(
        &state,
        AppIntent::RoadLayoutSelected {
            layout: RoadLayout::Straight,
        },
    );
    let other = map_intent_to_commands(
        &state,
        AppIntent::RoadLayoutSelected {
            layout: RoadLayout::MergeIn,
        },
    );

    assert!(same.is_empty());
    assert!(matches!(
        other[0],
        AppCommand::SetRoadLayout {
            layout: RoadLayout::MergeIn
        }
    ));
}

#[test]
fn export_path_selected_maps_to_export_frame() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ExportPathSelected {
            path: "szene.jpg".to_string(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(&commands[0], AppCommand::ExportFrame { path } if path == "szene.jpg"));
}
