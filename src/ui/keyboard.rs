//! Keyboard-Shortcuts → AppIntent.
//!
//! Die Werkzeugtasten wirken wie gehaltene Modi: Drücken aktiviert das
//! Werkzeug, Loslassen kehrt zu Select zurück (und finalisiert damit eine
//! laufende Draw-Kurve über den Werkzeugwechsel).

use crate::app::{AppIntent, EditorTool};

const TOOL_BINDINGS: [(egui::Key, EditorTool); 5] = [
    (egui::Key::P, EditorTool::DrawPolyline),
    (egui::Key::B, EditorTool::DrawBezier),
    (egui::Key::L, EditorTool::DrawLagrange),
    (egui::Key::A, EditorTool::AddPoint),
    (egui::Key::D, EditorTool::DeletePoint),
];

/// Sammelt Keyboard-Intents aus dem egui-Input.
pub fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.input(|input| {
        for (key, tool) in TOOL_BINDINGS {
            if input.key_pressed(key) {
                events.push(AppIntent::SetEditorToolRequested { tool });
            }
            if input.key_released(key) {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Select,
                });
            }
        }

        if input.key_pressed(egui::Key::Space) {
            events.push(AppIntent::CycleSelectionRequested);
        }
        if input.key_pressed(egui::Key::Escape) {
            events.push(AppIntent::ExitRequested);
        }
    });

    events
}
