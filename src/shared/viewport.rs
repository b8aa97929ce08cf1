//! Screen ↔ NDC Koordinatentransformation.
//!
//! Der gesamte Core rechnet in normalisierten Geräte-Koordinaten
//! ([-1, 1] × [-1, 1], y nach oben). Die Input-Schicht normalisiert jede
//! Pointer-Position vor dem ersten Core-Aufruf über diese Funktionen,
//! damit Klick- und Kontrollpunkt-Koordinaten im selben Raum leben.

use glam::Vec2;

/// Wandelt eine Screen-Position (Pixel, y nach unten) in NDC um.
///
/// `rect_min`/`rect_size` beschreiben den Viewport-Bereich in Pixeln.
pub fn screen_to_ndc(screen: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    let local = screen - rect_min;
    Vec2::new(
        local.x * 2.0 / rect_size.x - 1.0,
        -(local.y * 2.0 / rect_size.y - 1.0),
    )
}

/// Wandelt NDC zurück in eine Screen-Position (Pixel, y nach unten).
pub fn ndc_to_screen(ndc: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    Vec2::new(
        rect_min.x + (ndc.x + 1.0) * 0.5 * rect_size.x,
        rect_min.y + (1.0 - (ndc.y + 1.0) * 0.5) * rect_size.y,
    )
}
