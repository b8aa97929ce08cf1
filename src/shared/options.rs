//! Zentrale Konfiguration für den Freeform Curve Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Die Toleranzen
//! des Hit-Testings sind bewusst NICHT konfigurierbar — sie leben als
//! Konstanten in `core::hit_test`.

use serde::{Deserialize, Serialize};

// ── Kurven-Rendering ───────────────────────────────────────────────

/// Linienstärke nicht selektierter Kurven in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 2.0;
/// Linienstärke der selektierten Kurve in Pixeln.
pub const SELECTED_STROKE_WIDTH: f32 = 5.0;
/// Farbe nicht selektierter Kurven (RGBA: Rot).
pub const CURVE_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe der selektierten Kurve (RGBA: Blau).
pub const SELECTED_COLOR: [f32; 4] = [0.1, 0.2, 0.9, 1.0];

// ── Kontrollpunkte ─────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Marker in Pixeln.
pub const CONTROL_POINT_RADIUS_PX: f32 = 6.0;
/// Farbe der Kontrollpunkt-Marker (RGBA: Blau).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.1, 0.2, 0.9, 1.0];

// ── Hintergrund ────────────────────────────────────────────────────

/// Hintergrundfarbe des Viewports (RGBA: Himmelblau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.3, 0.8, 1.0, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `freeform_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Linienstärke nicht selektierter Kurven in Pixeln
    pub curve_stroke_width: f32,
    /// Linienstärke der selektierten Kurve in Pixeln
    pub selected_stroke_width: f32,
    /// Farbe nicht selektierter Kurven (RGBA)
    pub curve_color: [f32; 4],
    /// Farbe der selektierten Kurve (RGBA)
    pub selected_color: [f32; 4],
    /// Radius der Kontrollpunkt-Marker in Pixeln
    pub control_point_radius_px: f32,
    /// Farbe der Kontrollpunkt-Marker (RGBA)
    pub control_point_color: [f32; 4],
    /// Hintergrundfarbe des Viewports (RGBA)
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_stroke_width: CURVE_STROKE_WIDTH,
            selected_stroke_width: SELECTED_STROKE_WIDTH,
            curve_color: CURVE_COLOR,
            selected_color: SELECTED_COLOR,
            control_point_radius_px: CONTROL_POINT_RADIUS_PX,
            control_point_color: CONTROL_POINT_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `background_color` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("freeform_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("freeform_curve_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_entsprechen_den_konstanten() {
        let opts = EditorOptions::default();
        assert_eq!(opts.curve_stroke_width, CURVE_STROKE_WIDTH);
        assert_eq!(opts.selected_color, SELECTED_COLOR);
    }

    #[test]
    fn toml_roundtrip_erhaelt_alle_felder() {
        let mut opts = EditorOptions::default();
        opts.curve_stroke_width = 3.5;
        opts.curve_color = [0.1, 0.2, 0.3, 1.0];

        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(back.curve_stroke_width, 3.5);
        assert_eq!(back.curve_color, [0.1, 0.2, 0.3, 1.0]);
    }
}
