//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        // Statusnachrichten gelten bis zum nächsten Command; setzt dieser
        // Command selbst eine (z.B. Pruning), überlebt sie diesen Reset.
        state.ui.status_message = None;
        use super::handlers;

        match command {
            // === Werkzeug & Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::AddControlPointToActive { ndc } => {
                handlers::editing::add_control_point_to_active(state, ndc)
            }
            AppCommand::AddControlPointToSelected { ndc } => {
                handlers::editing::add_control_point_to_selected(state, ndc)
            }
            AppCommand::DeleteControlPointAt { ndc } => {
                handlers::editing::delete_control_point_at(state, ndc)?
            }

            // === Selektion & Drag ===
            AppCommand::SelectCurveAt { ndc } => handlers::selection::select_curve_at(state, ndc),
            AppCommand::CycleSelection => handlers::selection::cycle_selection(state),
            AppCommand::BeginControlPointMove { ndc } => {
                handlers::selection::begin_point_move(state, ndc)
            }
            AppCommand::MoveControlPoint { ndc } => {
                handlers::selection::move_control_point(state, ndc)?
            }
            AppCommand::EndControlPointMove => handlers::selection::end_point_move(state),

            // === System ===
            AppCommand::Exit => state.should_exit = true,
        }

        Ok(())
    }
}
