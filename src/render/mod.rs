//! Zeichnet die Scene über den egui-Painter.
//!
//! Kurven werden als Linienzug ihrer Display-Samples gezeichnet; die
//! selektierte Kurve bekommt eine dickere Linie, eigene Farbe und sichtbare
//! Kontrollpunkt-Marker.

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec2;

use crate::core::Scene;
use crate::shared::{ndc_to_screen, EditorOptions};

/// Zeichnet alle Kurven der Scene in den Viewport-Bereich `rect`.
pub fn paint_scene(painter: &Painter, rect: Rect, scene: &Scene, options: &EditorOptions) {
    painter.rect_filled(rect, 0.0, color32(options.background_color));

    let rect_min = Vec2::new(rect.min.x, rect.min.y);
    let rect_size = Vec2::new(rect.width(), rect.height());

    for curve in scene.curves() {
        // Nicht darstellbare Kurven (gerade im Aufbau) überspringen.
        if curve.control_point_count() < 2 {
            continue;
        }

        let points: Vec<Pos2> = curve
            .display_points()
            .map(|p| to_pos2(ndc_to_screen(p, rect_min, rect_size)))
            .collect();

        let (width, color) = if curve.selected {
            (options.selected_stroke_width, options.selected_color)
        } else {
            (options.curve_stroke_width, options.curve_color)
        };
        painter.add(Shape::line(points, Stroke::new(width, color32(color))));

        if curve.selected {
            for &cp in curve.control_points() {
                let center = to_pos2(ndc_to_screen(cp, rect_min, rect_size));
                painter.circle_filled(
                    center,
                    options.control_point_radius_px,
                    color32(options.control_point_color),
                );
            }
        }
    }
}

fn to_pos2(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn color32(rgba: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
