//! Toolbar mit den Editor-Werkzeugen.

use crate::app::{AppIntent, AppState, EditorTool};

const TOOLS: [(EditorTool, &str); 6] = [
    (EditorTool::Select, "Select"),
    (EditorTool::DrawPolyline, "Polyline (P)"),
    (EditorTool::DrawBezier, "Bezier (B)"),
    (EditorTool::DrawLagrange, "Lagrange (L)"),
    (EditorTool::AddPoint, "Add Point (A)"),
    (EditorTool::DeletePoint, "Delete Point (D)"),
];

/// Rendert die Toolbar und gibt ausgelöste Intents zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (tool, label) in TOOLS {
                let active = state.editor.active_tool == tool;
                if ui.selectable_label(active, label).clicked() && !active {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }
        });
    });

    events
}
