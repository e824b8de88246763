use glam::Vec2;
use road_scene_editor::{
    AppCommand, AppController, AppIntent, AppState, DragState, RoadLayout, SceneError, VehicleRole,
};

fn add_npc_at(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_command(
            state,
            AppCommand::AddVehicle {
                role: VehicleRole::Npc,
                pos,
            },
        )
        .expect("NPC sollte hinzugefügt werden");
}

fn assert_selection_valid(state: &AppState) {
    if let Some(id) = state.scene.selected_vehicle_id() {
        assert!(
            state.scene.vehicle(id).is_some(),
            "Selektion {id} zeigt auf kein Fahrzeug"
        );
    }
}

fn assert_single_ego(state: &AppState) {
    let egos = state
        .scene
        .vehicles()
        .filter(|v| v.role == VehicleRole::Ego)
        .count();
    assert_eq!(egos, 1, "Es muss genau ein Ego-Fahrzeug geben");
}

#[test]
fn test_new_state_starts_with_single_ego_at_default_position() {
    let state = AppState::new();

    assert_eq!(state.vehicle_count(), 1);
    let ego = state.scene.ego().expect("Ego-Fahrzeug sollte existieren");
    assert_eq!(ego.id, 1);
    assert_eq!(ego.role, VehicleRole::Ego);
    assert_eq!(ego.position, Vec2::new(350.0, 260.0));
    assert!(!state.has_selection());
}

#[test]
fn test_remove_ego_is_rejected_with_protected_entity() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));

    let before: Vec<_> = state.scene.vehicles().cloned().collect();
    let err = controller
        .handle_command(&mut state, AppCommand::RemoveVehicle { vehicle_id: 1 })
        .expect_err("Ego darf nicht entfernt werden");

    assert!(matches!(
        err.downcast_ref::<SceneError>(),
        Some(SceneError::ProtectedEntity { vehicle_id: 1 })
    ));
    let after: Vec<_> = state.scene.vehicles().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(after[1].id, 2);
}

#[test]
fn test_remove_selected_npc_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(500.0, 300.0) })
        .expect("Klick sollte gelingen");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("Release sollte gelingen");
    assert_eq!(state.scene.selected_vehicle_id(), Some(2));

    controller
        .handle_intent(&mut state, AppIntent::RemoveSelectedRequested)
        .expect("Entfernen sollte gelingen");

    assert_eq!(state.scene.selected_vehicle_id(), None);
    assert_eq!(state.vehicle_count(), 1);
    assert_single_ego(&state);
}

#[test]
fn test_remove_selected_ego_reports_protected_entity() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(350.0, 260.0) })
        .expect("Klick sollte gelingen");

    let err = controller
        .handle_intent(&mut state, AppIntent::RemoveSelectedRequested)
        .expect_err("Ego darf nicht entfernt werden");

    assert!(matches!(
        err.downcast_ref::<SceneError>(),
        Some(SceneError::ProtectedEntity { .. })
    ));
    assert_eq!(state.scene.selected_vehicle_id(), Some(1));
}

#[test]
fn test_click_on_overlap_selects_topmost_vehicle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));
    add_npc_at(&mut controller, &mut state, Vec2::new(530.0, 310.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(515.0, 305.0) })
        .expect("Klick sollte gelingen");

    assert_eq!(state.scene.selected_vehicle_id(), Some(3));
    assert_eq!(state.interaction.dragged_vehicle_id(), Some(3));
}

#[test]
fn test_drag_far_out_of_range_stops_at_drivable_bounds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(500.0, 300.0) })
        .expect("Klick sollte gelingen");
    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { pos: Vec2::new(5000.0, 5000.0) })
        .expect("Ziehen sollte gelingen");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("Release sollte gelingen");

    let bounds = state.scene.drivable_bounds();
    let npc = state.scene.vehicle(2).expect("NPC sollte existieren");
    assert_eq!(npc.position, bounds.max);
    assert_eq!(bounds.max, Vec2::new(1065.0, 440.0));
    assert_eq!(state.interaction.state(), DragState::Idle);
}

#[test]
fn test_drag_moves_vehicle_with_grab_offset_and_marks_frame_dirty() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));
    state.view.take_frame_dirty();

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(510.0, 290.0) })
        .expect("Klick sollte gelingen");
    state.view.take_frame_dirty();

    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { pos: Vec2::new(560.0, 250.0) })
        .expect("Ziehen sollte gelingen");

    assert!(state.view.take_frame_dirty());
    let npc = state.scene.vehicle(2).expect("NPC sollte existieren");
    assert_eq!(npc.position, Vec2::new(550.0, 260.0));
}

#[test]
fn test_pointer_move_without_drag_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.take_frame_dirty();

    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { pos: Vec2::new(700.0, 200.0) })
        .expect("Bewegung ohne Drag ist kein Fehler");

    assert!(!state.view.take_frame_dirty());
    assert_eq!(
        state.scene.ego().map(|v| v.position),
        Some(Vec2::new(350.0, 260.0))
    );
}

#[test]
fn test_add_npc_requested_places_npcs_in_rows_with_increasing_ids() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..4 {
        controller
            .handle_intent(&mut state, AppIntent::AddNpcRequested)
            .expect("NPC sollte hinzugefügt werden");
    }

    let npcs: Vec<_> = state
        .scene
        .vehicles()
        .filter(|v| v.role == VehicleRole::Npc)
        .map(|v| (v.id, v.position))
        .collect();
    assert_eq!(
        npcs,
        vec![
            (2, Vec2::new(650.0, 210.0)),
            (3, Vec2::new(650.0, 260.0)),
            (4, Vec2::new(650.0, 310.0)),
            (5, Vec2::new(650.0, 210.0)),
        ]
    );
}

#[test]
fn test_ids_are_not_reused_after_removal() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));
    controller
        .handle_command(&mut state, AppCommand::RemoveVehicle { vehicle_id: 2 })
        .expect("NPC sollte entfernt werden");

    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));

    let ids: Vec<_> = state.scene.vehicles().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_new_scene_resets_vehicles_selection_and_drag_but_keeps_layout() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::RoadLayoutSelected { layout: RoadLayout::MergeOut })
        .expect("Layoutwechsel sollte gelingen");
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));
    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(500.0, 300.0) })
        .expect("Klick sollte gelingen");
    assert!(state.interaction.is_dragging());

    controller
        .handle_intent(&mut state, AppIntent::NewSceneRequested)
        .expect("Neue Szene sollte gelingen");

    assert_eq!(state.vehicle_count(), 1);
    assert_single_ego(&state);
    assert!(!state.has_selection());
    assert!(!state.interaction.is_dragging());
    assert_eq!(state.scene.road_layout(), RoadLayout::MergeOut);
    assert!(matches!(state.command_log.last(), Some(AppCommand::InitializeScene)));
}

#[test]
fn test_selecting_current_layout_logs_no_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::RoadLayoutSelected { layout: RoadLayout::Straight })
        .expect("Gleiches Layout ist kein Fehler");

    assert!(state.command_log.is_empty());
}

#[test]
fn test_layout_change_marks_frame_dirty_and_keeps_vehicles() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));
    state.view.take_frame_dirty();

    controller
        .handle_intent(&mut state, AppIntent::RoadLayoutSelected { layout: RoadLayout::MergeIn })
        .expect("Layoutwechsel sollte gelingen");

    assert!(state.view.take_frame_dirty());
    assert_eq!(state.scene.road_layout(), RoadLayout::MergeIn);
    assert_eq!(state.vehicle_count(), 2);
}

#[test]
fn test_clear_selection_requested_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: Vec2::new(350.0, 260.0) })
        .expect("Klick sollte gelingen");

    controller
        .handle_intent(&mut state, AppIntent::ClearSelectionRequested)
        .expect("Selektion aufheben sollte gelingen");

    assert_eq!(state.scene.selected_vehicle_id(), None);
}

#[test]
fn test_export_requested_opens_dialog_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("Export-Dialog sollte angefordert werden");

    assert!(state.ui.show_export_dialog);
    assert!(matches!(state.command_log.last(), Some(AppCommand::RequestExportDialog)));
}

#[test]
fn test_export_with_unsupported_extension_fails_and_leaves_scene_untouched() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_npc_at(&mut controller, &mut state, Vec2::new(500.0, 300.0));
    let before: Vec<_> = state.scene.vehicles().cloned().collect();
    let path = std::env::temp_dir().join("road_scene_editor_flow_export.gif");

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect_err("GIF wird nicht unterstützt");

    assert!(matches!(
        err.downcast_ref::<road_scene_editor::ExportError>(),
        Some(road_scene_editor::ExportError::UnsupportedFormat { .. })
    ));
    assert!(!path.exists());
    assert!(state.ui.last_export_path.is_none());
    let after: Vec<_> = state.scene.vehicles().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_export_png_writes_file_and_reports_path() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join("road_scene_editor_flow_export.png");
    let _ = std::fs::remove_file(&path);
    let path_string = path.to_string_lossy().into_owned();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path_string.clone(),
            },
        )
        .expect("PNG-Export sollte gelingen");

    assert!(path.exists());
    assert_eq!(state.ui.last_export_path.as_deref(), Some(path_string.as_str()));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_mixed_sequence_keeps_ego_and_valid_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let intents = vec![
        AppIntent::AddNpcRequested,
        AppIntent::AddNpcRequested,
        AppIntent::PointerPressed { pos: Vec2::new(650.0, 210.0) },
        AppIntent::PointerMoved { pos: Vec2::new(700.0, 400.0) },
        AppIntent::PointerReleased,
        AppIntent::RemoveSelectedRequested,
        AppIntent::PointerPressed { pos: Vec2::new(350.0, 260.0) },
        AppIntent::RemoveSelectedRequested,
        AppIntent::AddNpcRequested,
        AppIntent::PointerPressed { pos: Vec2::new(10.0, 10.0) },
        AppIntent::RemoveSelectedRequested,
        AppIntent::NewSceneRequested,
        AppIntent::AddNpcRequested,
    ];

    for intent in intents {
        // Abgelehnte Aktionen (Ego löschen) sind erlaubt, die Invarianten nicht
        let _ = controller.handle_intent(&mut state, intent);
        assert_single_ego(&state);
        assert_selection_valid(&state);
    }

    assert_eq!(state.vehicle_count(), 2);
}
