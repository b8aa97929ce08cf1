//! App-Intent und App-Command Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
//! Commands sind die daraus abgeleiteten mutierenden Operationen.
//! Alle Positionen sind bereits NDC ([-1, 1]²) — die Input-Schicht
//! normalisiert vor dem Erzeugen eines Intents.

use glam::Vec2;

use super::state::EditorTool;

/// Eingabe-Ereignisse aus UI und Tastatur.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Editor-Werkzeug wechseln (Toolbar-Klick oder Taste gedrückt/losgelassen)
    SetEditorToolRequested { tool: EditorTool },
    /// Klick im Viewport (werkzeugabhängig interpretiert)
    ViewportClicked { ndc: Vec2 },
    /// Selektion zyklisch weiterschalten (Leertaste)
    CycleSelectionRequested,
    /// Drag-Lifecycle Start: Kontrollpunkt unter dem Pointer greifen
    BeginPointDragRequested { ndc: Vec2 },
    /// Drag-Lifecycle Update: gegriffenen Kontrollpunkt verschieben
    PointDragMoved { ndc: Vec2 },
    /// Drag-Lifecycle Ende
    EndPointDragRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Operationen auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Werkzeug aktivieren; finalisiert ggf. die aktive Draw-Kurve
    SetEditorTool { tool: EditorTool },
    /// Kontrollpunkt an die aktive Draw-Kurve anhängen
    AddControlPointToActive { ndc: Vec2 },
    /// Kontrollpunkt an die selektierte Kurve anhängen
    AddControlPointToSelected { ndc: Vec2 },
    /// Kontrollpunkt unter dem Klick löschen (inkl. Scene-Pruning)
    DeleteControlPointAt { ndc: Vec2 },
    /// Kurve unter dem Klick selektieren (Klick ins Leere deselektiert)
    SelectCurveAt { ndc: Vec2 },
    /// Selektion zyklisch weiterschalten
    CycleSelection,
    /// Kontrollpunkt-Move beginnen (Hit-Test am Pointer)
    BeginControlPointMove { ndc: Vec2 },
    /// Gegriffenen Kontrollpunkt an neue Position setzen
    MoveControlPoint { ndc: Vec2 },
    /// Kontrollpunkt-Move abschließen
    EndControlPointMove,
    /// Anwendung beenden
    Exit,
}
