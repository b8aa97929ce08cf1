//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Curves: {}", state.curve_count()));

            ui.separator();

            match state.scene.selected_index() {
                Some(index) => {
                    let points = state.selected_point_count().unwrap_or(0);
                    ui.label(format!("Selected: curve {} ({} points)", index, points));
                }
                None => {
                    ui.label("Selected: none");
                }
            }

            ui.separator();

            let tool_name = match state.editor.active_tool {
                EditorTool::Select => "Select",
                EditorTool::DrawPolyline => "Polyline",
                EditorTool::DrawBezier => "Bezier",
                EditorTool::DrawLagrange => "Lagrange",
                EditorTool::AddPoint => "Add Point",
                EditorTool::DeletePoint => "Delete Point",
            };
            ui.label(format!("Tool: {}", tool_name));

            // Statusnachricht (z.B. verworfene Kurve)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
