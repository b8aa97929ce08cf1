//! Application State — zentrale Datenhaltung.

use crate::core::{ControlPointHit, Scene};
use crate::shared::EditorOptions;

use super::CommandLog;

/// Aktives Editor-Werkzeug.
///
/// Ersetzt die gedrückt-gehaltenen Modus-Flags des klassischen
/// Immediate-Mode-Ansatzes durch einen expliziten Zustandswert, der durch
/// alle Input-Aufrufe gereicht wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Kurven selektieren, Kontrollpunkte verschieben
    #[default]
    Select,
    /// Neue Polyline zeichnen (Taste P)
    DrawPolyline,
    /// Neue Bezier-Kurve zeichnen (Taste B)
    DrawBezier,
    /// Neue Lagrange-Kurve zeichnen (Taste L)
    DrawLagrange,
    /// Kontrollpunkt an die selektierte Kurve anhängen (Taste A)
    AddPoint,
    /// Kontrollpunkt unter dem Klick löschen (Taste D)
    DeletePoint,
}

impl EditorTool {
    /// Gibt `true` zurück, wenn das Werkzeug eine neue Kurve aufbaut.
    pub fn is_draw_tool(&self) -> bool {
        matches!(
            self,
            EditorTool::DrawPolyline | EditorTool::DrawBezier | EditorTool::DrawLagrange
        )
    }
}

/// Zustand des aktuellen Editor-Werkzeugs.
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Index der Kurve, die gerade im Draw-Modus aufgebaut wird
    pub active_curve: Option<usize>,
    /// Drag-Ziel während eines Kontrollpunkt-Moves (Select-Werkzeug)
    pub drag_target: Option<ControlPointHit>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Select,
            active_curve: None,
            drag_target: None,
        }
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. verworfene Kurve)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Alle Kurven der Sitzung
    pub scene: Scene,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Farben, Stärken, Radien)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            editor: EditorToolState::new(),
            ui: UiState::new(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kurven zurück (für UI-Anzeige).
    pub fn curve_count(&self) -> usize {
        self.scene.curve_count()
    }

    /// Gibt die Kontrollpunktanzahl der selektierten Kurve zurück.
    pub fn selected_point_count(&self) -> Option<usize> {
        self.scene
            .selected_index()
            .and_then(|i| self.scene.curve(i))
            .map(|c| c.control_point_count())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
