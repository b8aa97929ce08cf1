//! Handler für Kurven-Selektion und Kontrollpunkt-Drag.

use glam::Vec2;

use crate::app::AppState;
use crate::core::hit_test;

/// Selektiert die Kurve unter dem Klick.
///
/// Deselect-before-Select-Protokoll: zuerst wird jede Selektion aufgehoben,
/// dann (falls der Hit-Test trifft) genau eine Kurve markiert. Ein Klick
/// ins Leere lässt damit nichts selektiert zurück.
pub fn select_curve_at(state: &mut AppState, ndc: Vec2) {
    state.scene.deselect_all();
    match hit_test::closest_curve(&state.scene, ndc) {
        Some(index) => {
            if let Some(curve) = state.scene.curve_mut(index) {
                curve.selected = true;
            }
            log::info!("Kurve {} selektiert", index);
        }
        None => log::info!("Klick ins Leere — Selektion aufgehoben"),
    }
}

/// Schaltet die Selektion zyklisch durch die Scene-Reihenfolge.
pub fn cycle_selection(state: &mut AppState) {
    if state.scene.is_empty() {
        return;
    }
    let next = match state.scene.selected_index() {
        Some(current) => (current + 1) % state.scene.curve_count(),
        None => 0,
    };
    state.scene.deselect_all();
    if let Some(curve) = state.scene.curve_mut(next) {
        curve.selected = true;
    }
    log::info!("Selektion gewechselt auf Kurve {}", next);
}

/// Beginnt einen Kontrollpunkt-Move: Hit-Test am Pointer, Ziel merken.
///
/// Greifbar sind nur Kontrollpunkte der selektierten Kurve — nur deren
/// Marker werden gezeichnet. Ohne Selektion greift der Drag nichts, auch
/// wenn eine unselektierte Kurve unter dem Pointer liegt.
pub fn begin_point_move(state: &mut AppState, ndc: Vec2) {
    state.editor.drag_target = state
        .scene
        .selected_index()
        .and_then(|index| hit_test::control_point_on_curve(&state.scene, index, ndc));
    if let Some(hit) = state.editor.drag_target {
        log::info!(
            "Kontrollpunkt {} von Kurve {} gegriffen",
            hit.point,
            hit.curve
        );
    }
}

/// Setzt den gegriffenen Kontrollpunkt auf die neue Pointer-Position.
pub fn move_control_point(state: &mut AppState, ndc: Vec2) -> anyhow::Result<()> {
    let Some(hit) = state.editor.drag_target else {
        return Ok(());
    };
    let Some(curve) = state.scene.curve_mut(hit.curve) else {
        // Kurve wurde zwischenzeitlich entfernt — Drag abbrechen.
        state.editor.drag_target = None;
        return Ok(());
    };
    curve.move_control_point(hit.point, ndc)
}

/// Schließt den Kontrollpunkt-Move ab.
pub fn end_point_move(state: &mut AppState) {
    state.editor.drag_target = None;
}
