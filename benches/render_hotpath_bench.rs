//! Benchmark für die Render- und Drag-Hotpaths.
//!
//! Misst die Kosten pro Frame:
//! - Frame-Komposition je Straßenlayout und Fahrzeuganzahl
//! - RenderScene-Aufbau aus dem AppState
//! - Pointer-Move-Schleife während eines Drags

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use road_scene_editor::render::{self, Renderer};
use road_scene_editor::{AppController, AppIntent, AppState, RoadLayout, VehicleRole};
use std::hint::black_box;

fn build_state(layout: RoadLayout, npc_count: usize) -> AppState {
    let mut state = AppState::new();
    state.scene.set_road_layout(layout);

    for i in 0..npc_count {
        let x = 120.0 + (i % 12) as f32 * 80.0;
        let y = 100.0 + (i / 12 % 6) as f32 * 60.0;
        let _ = state.scene.add_vehicle(VehicleRole::Npc, Vec2::new(x, y));
    }

    let last = state.scene.vehicles().last().map(|v| v.id);
    let _ = state.scene.set_selection(last);
    state
}

/// Misst: kompletten Frame in die Renderer-Oberfläche zeichnen
fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for layout in RoadLayout::ALL {
        for &npc_count in &[0usize, 10, 50] {
            let state = build_state(layout, npc_count);
            let scene = AppController::new().build_render_scene(&state);
            let mut renderer = Renderer::new(&state.options.scene);

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", layout), npc_count),
                &scene,
                |b, scene| {
                    b.iter(|| {
                        let surface = renderer.render_scene(black_box(scene));
                        black_box(surface.width())
                    })
                },
            );
        }
    }

    group.finish();
}

/// Misst: RenderScene aus dem AppState kopieren (= pro neu gezeichnetem Frame)
fn bench_build_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_render_scene");

    for &npc_count in &[0usize, 10, 50] {
        let state = build_state(RoadLayout::Straight, npc_count);
        let controller = AppController::new();

        group.bench_with_input(BenchmarkId::new("build", npc_count), &state, |b, state| {
            b.iter(|| black_box(controller.build_render_scene(black_box(state)).vehicles.len()))
        });
    }

    group.finish();
}

/// Misst: Pointer-Move-Events während eines Drags über den Controller
fn bench_drag_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_pointer_move");

    let mut state = build_state(RoadLayout::MergeIn, 10);
    let mut controller = AppController::new();
    let ego = state.scene.ego().map(|v| v.position).unwrap_or(Vec2::ZERO);
    let _ = controller.handle_intent(&mut state, AppIntent::PointerPressed { pos: ego });

    group.bench_function("move_100_steps", |b| {
        b.iter(|| {
            for step in 0..100 {
                let pos = Vec2::new(200.0 + step as f32 * 8.0, 120.0 + step as f32 * 3.0);
                let _ = controller.handle_intent(&mut state, AppIntent::PointerMoved { pos });
            }
            black_box(state.scene.ego().map(|v| v.position))
        })
    });

    group.finish();
}

criterion_group!(
    render_hotpath_benches,
    bench_render_frame,
    bench_build_render_scene,
    bench_drag_pointer_move,
);
criterion_main!(render_hotpath_benches);
