//! Viewport-Input-Handling: Maus-Events und Drag → AppIntent.
//!
//! Hier passiert die Normalisierung: jede Pointer-Position wird vor dem
//! Erzeugen eines Intents in NDC ([-1, 1]², y nach oben) umgerechnet, damit
//! Klicks und Kontrollpunkte im selben Koordinatenraum verglichen werden.

use glam::Vec2;

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::screen_to_ndc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    /// Drag eines Kontrollpunkts der getroffenen Kurve
    PointDrag,
}

/// Verwaltet den Input-Zustand für das Viewport (Klick, Drag, Tastatur).
#[derive(Default)]
pub struct InputState {
    primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentrale UI→Intent-Schnittstelle für Maus- und Tastatur-Interaktion.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_drag_start(ui, response, rect, &mut events);
        self.handle_drag_update(response, rect, &mut events);
        self.handle_drag_end(response, &mut events);
        self.handle_clicks(response, rect, &mut events);

        events
    }

    fn handle_drag_start(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition vor der
        // Drag-Schwelle; interact_pointer_pos() wäre bereits verschoben.
        if let Some(press_pos) = ui.input(|i| i.pointer.press_origin()) {
            events.push(AppIntent::BeginPointDragRequested {
                ndc: to_ndc(press_pos, rect),
            });
            self.primary_drag_mode = PrimaryDragMode::PointDrag;
        }
    }

    fn handle_drag_update(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        if self.primary_drag_mode != PrimaryDragMode::PointDrag {
            return;
        }
        if !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::PointDragMoved {
                ndc: to_ndc(pointer_pos, rect),
            });
        }
    }

    fn handle_drag_end(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }
        if self.primary_drag_mode == PrimaryDragMode::PointDrag {
            events.push(AppIntent::EndPointDragRequested);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }

    fn handle_clicks(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::ViewportClicked {
                ndc: to_ndc(pointer_pos, rect),
            });
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}

fn to_ndc(pointer_pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    screen_to_ndc(
        Vec2::new(pointer_pos.x, pointer_pos.y),
        Vec2::new(rect.min.x, rect.min.y),
        Vec2::new(rect.width(), rect.height()),
    )
}
