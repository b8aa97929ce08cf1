//! Handler für Werkzeug-Lifecycle und Kontrollpunkt-Editing.

use glam::Vec2;

use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::{hit_test, Curve};

/// Aktiviert ein Editor-Werkzeug.
///
/// Beim Verlassen eines Draw-Werkzeugs wird die aktive Kurve finalisiert;
/// beim Betreten eines Draw-Werkzeugs entsteht sofort eine neue, leere,
/// selektierte Kurve, die alle folgenden Klicks aufnimmt.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if state.editor.active_tool == tool {
        return;
    }

    finalize_active_curve(state);
    state.editor.active_tool = tool;
    state.editor.drag_target = None;

    if let Some(mut curve) = new_curve_for_tool(tool) {
        state.scene.deselect_all();
        curve.selected = true;
        let index = state.scene.add_curve(curve);
        state.editor.active_curve = Some(index);
    }

    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Hängt einen Kontrollpunkt an die aktive Draw-Kurve.
pub fn add_control_point_to_active(state: &mut AppState, ndc: Vec2) {
    let Some(index) = state.editor.active_curve else {
        log::warn!("AddControlPointToActive ohne aktive Kurve — Geste ignoriert");
        return;
    };
    match state.scene.curve_mut(index) {
        Some(curve) => curve.add_control_point(ndc),
        None => log::warn!("Aktive Kurve {} existiert nicht mehr", index),
    }
}

/// Hängt einen Kontrollpunkt an die selektierte Kurve.
pub fn add_control_point_to_selected(state: &mut AppState, ndc: Vec2) {
    let Some(index) = state.scene.selected_index() else {
        log::warn!("AddControlPointToSelected ohne Selektion — Geste ignoriert");
        return;
    };
    if let Some(curve) = state.scene.curve_mut(index) {
        curve.add_control_point(ndc);
    }
}

/// Löscht den Kontrollpunkt unter dem Klick und räumt degenerierte Kurven auf.
pub fn delete_control_point_at(state: &mut AppState, ndc: Vec2) -> anyhow::Result<()> {
    let Some(hit) = hit_test::closest_control_point(&state.scene, ndc) else {
        log::warn!("Kein Kontrollpunkt unter dem Klick — Geste ignoriert");
        return Ok(());
    };

    let Some(curve) = state.scene.curve_mut(hit.curve) else {
        return Ok(());
    };
    curve.remove_control_point(hit.point)?;

    prune_and_invalidate(state);
    Ok(())
}

/// Finalisiert die aktive Draw-Kurve: deselektieren und Scene aufräumen.
///
/// Eine Kurve, die mit weniger als 2 Kontrollpunkten endet, wird verworfen.
fn finalize_active_curve(state: &mut AppState) {
    let Some(index) = state.editor.active_curve.take() else {
        return;
    };
    if let Some(curve) = state.scene.curve_mut(index) {
        curve.selected = false;
    }
    prune_and_invalidate(state);
}

/// Entfernt degenerierte Kurven und invalidiert gehaltene Indizes.
///
/// Nach einer Löschung kompaktiert die Scene; `active_curve` und
/// `drag_target` dürfen danach nicht weiterverwendet werden.
fn prune_and_invalidate(state: &mut AppState) {
    let removed = state.scene.prune_degenerate();
    if removed > 0 {
        state.editor.active_curve = None;
        state.editor.drag_target = None;
        state.ui.status_message = Some(format!(
            "{} Kurve(n) verworfen (weniger als 2 Kontrollpunkte)",
            removed
        ));
        log::info!("{} degenerierte Kurve(n) aus der Scene entfernt", removed);
    }
}

fn new_curve_for_tool(tool: EditorTool) -> Option<Curve> {
    match tool {
        EditorTool::DrawPolyline => Some(Curve::new_polyline()),
        EditorTool::DrawBezier => Some(Curve::new_bezier()),
        EditorTool::DrawLagrange => Some(Curve::new_lagrange()),
        EditorTool::Select | EditorTool::AddPoint | EditorTool::DeletePoint => None,
    }
}
