//! Reines Intent → Command Mapping, abhängig vom aktiven Werkzeug.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen Intent in null oder mehr Commands.
///
/// Hier liegt die werkzeugabhängige Klick-Interpretation; die Funktion
/// mutiert nichts und ist dadurch isoliert testbar.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SetEditorToolRequested { tool } => {
            vec![AppCommand::SetEditorTool { tool }]
        }

        AppIntent::ViewportClicked { ndc } => match state.editor.active_tool {
            EditorTool::DrawPolyline | EditorTool::DrawBezier | EditorTool::DrawLagrange => {
                vec![AppCommand::AddControlPointToActive { ndc }]
            }
            EditorTool::AddPoint => vec![AppCommand::AddControlPointToSelected { ndc }],
            EditorTool::DeletePoint => vec![AppCommand::DeleteControlPointAt { ndc }],
            EditorTool::Select => vec![AppCommand::SelectCurveAt { ndc }],
        },

        AppIntent::CycleSelectionRequested => {
            if state.scene.is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::CycleSelection]
            }
        }

        // Kontrollpunkt-Drag gibt es nur im Select-Werkzeug.
        AppIntent::BeginPointDragRequested { ndc } => {
            if state.editor.active_tool == EditorTool::Select {
                vec![AppCommand::BeginControlPointMove { ndc }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointDragMoved { ndc } => {
            if state.editor.drag_target.is_some() {
                vec![AppCommand::MoveControlPoint { ndc }]
            } else {
                Vec::new()
            }
        }
        AppIntent::EndPointDragRequested => vec![AppCommand::EndControlPointMove],

        AppIntent::ExitRequested => vec![AppCommand::Exit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn klick_wird_werkzeugabhaengig_interpretiert() {
        let mut state = AppState::new();
        let intent = AppIntent::ViewportClicked { ndc: Vec2::ZERO };

        state.editor.active_tool = EditorTool::Select;
        assert!(matches!(
            map_intent_to_commands(&state, intent.clone())[..],
            [AppCommand::SelectCurveAt { .. }]
        ));

        state.editor.active_tool = EditorTool::DrawBezier;
        assert!(matches!(
            map_intent_to_commands(&state, intent.clone())[..],
            [AppCommand::AddControlPointToActive { .. }]
        ));

        state.editor.active_tool = EditorTool::DeletePoint;
        assert!(matches!(
            map_intent_to_commands(&state, intent)[..],
            [AppCommand::DeleteControlPointAt { .. }]
        ));
    }

    #[test]
    fn cycle_ohne_kurven_erzeugt_keinen_command() {
        let state = AppState::new();
        assert!(map_intent_to_commands(&state, AppIntent::CycleSelectionRequested).is_empty());
    }

    #[test]
    fn drag_ausserhalb_des_select_werkzeugs_wird_ignoriert() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::DrawPolyline;
        let cmds = map_intent_to_commands(
            &state,
            AppIntent::BeginPointDragRequested { ndc: Vec2::ZERO },
        );
        assert!(cmds.is_empty());
    }
}
