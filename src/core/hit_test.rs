//! Hit-Testing: Klickposition → Kurve, Segment, Kontrollpunkt.
//!
//! Alle Toleranzen gelten im normalisierten Geräte-Koordinatenraum
//! ([-1, 1] × [-1, 1]); die Input-Schicht normalisiert vor jedem Aufruf.
//! Treffer werden als Indizes zurückgegeben, nie als Referenzen in den
//! Container — Löschungen und Reallokationen invalidieren Referenzen.

use glam::Vec2;

use super::{CurveKind, Scene};
use crate::core::Curve;

/// Box-Toleranz für Kontrollpunkt- und Kurven-Treffer (pro Achse).
pub const POINT_BOX_TOLERANCE: f32 = 0.09;
/// Toleranz für den senkrechten Abstand zu einem Polyline-Segment.
pub const SEGMENT_CROSS_TOLERANCE: f32 = 0.05;

/// Treffer auf einen Kontrollpunkt: Kurven-Index + Punkt-Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPointHit {
    /// Index der Kurve in der Scene
    pub curve: usize,
    /// Index des Kontrollpunkts innerhalb der Kurve
    pub point: usize,
}

/// Findet die erste Kurve unter dem Klick, in Scene-Reihenfolge.
///
/// Kein Distanz-Ranking über Kurven hinweg: der erste Treffer gewinnt.
/// Parametrische Kurven werden mit Schritt 0.01 über [0, 1) abgetastet;
/// ein Sample trifft, wenn |Δx| und |Δy| jeweils unter der Box-Toleranz
/// liegen — ein achsenparalleler Box-Test, bewusst kein Radius-Test.
pub fn closest_curve(scene: &Scene, click: Vec2) -> Option<usize> {
    for (index, curve) in scene.curves().enumerate() {
        let hit = match curve.kind() {
            CurveKind::Polyline => polyline_segment_hit(curve, click).is_some(),
            CurveKind::Bezier | CurveKind::Lagrange { .. } => curve
                .display_points()
                .any(|sample| within_point_box(click, sample)),
        };
        if hit {
            return Some(index);
        }
    }
    None
}

/// Findet das erste getroffene Segment einer Polyline.
///
/// Ein Segment (cp1, cp2) akzeptiert den Klick, wenn
/// - der senkrechte Abstand zur Segmentgeraden (Kreuzprodukt mit der
///   normierten Richtung) betragsmäßig unter der Toleranz liegt,
/// - die unnormierte Projektion (Skalarprodukt) positiv ist, und
/// - der komponentenweise Versatz zum Segmentanfang den unnormierten
///   Segmentvektor betragsmäßig nicht übersteigt.
///
/// Der Extent-Guard vergleicht rohe Koordinatendifferenzen und ist für
/// schräge Segmente nur eine Näherung, kein exaktes Segment-Clipping.
/// Segmente der Länge 0 werden übersprungen.
pub fn polyline_segment_hit(curve: &Curve, click: Vec2) -> Option<usize> {
    for (index, pair) in curve.control_points().windows(2).enumerate() {
        let (cp1, cp2) = (pair[0], pair[1]);
        let segment = cp2 - cp1;
        let Some(direction) = segment.try_normalize() else {
            continue;
        };

        let offset = click - cp1;
        let cross = offset.perp_dot(direction);
        if cross.abs() >= SEGMENT_CROSS_TOLERANCE {
            continue;
        }

        let dot = offset.dot(segment);
        if dot <= 0.0 {
            continue;
        }

        let within_extent =
            offset.x.abs() <= segment.x.abs() && offset.y.abs() <= segment.y.abs();
        if within_extent {
            return Some(index);
        }
    }
    None
}

/// Findet den Kontrollpunkt unter dem Klick.
///
/// Löst zuerst die Kurve über `closest_curve` auf und scannt dann deren
/// gesamte Kontrollpunktliste. Der Scan bricht nicht beim ersten Treffer
/// ab, sondern überschreibt weiter: es gewinnt der letzte (höchstindizierte)
/// qualifizierende Punkt, nicht der nächstgelegene.
pub fn closest_control_point(scene: &Scene, click: Vec2) -> Option<ControlPointHit> {
    let curve_index = closest_curve(scene, click)?;
    control_point_on_curve(scene, curve_index, click)
}

/// Findet den Kontrollpunkt unter dem Klick auf einer bestimmten Kurve.
///
/// Scannt nur die Kurve am gegebenen Index und ignoriert den Rest der
/// Scene — das Drag-Handling nutzt das, um ausschließlich die selektierte
/// Kurve zu greifen, deren Marker sichtbar sind. Auch hier überschreibt
/// der Scan weiter: der letzte qualifizierende Punkt gewinnt.
pub fn control_point_on_curve(
    scene: &Scene,
    curve_index: usize,
    click: Vec2,
) -> Option<ControlPointHit> {
    let curve = scene.curve(curve_index)?;

    let mut hit = None;
    for (point_index, &point) in curve.control_points().iter().enumerate() {
        if within_point_box(click, point) {
            hit = Some(ControlPointHit {
                curve: curve_index,
                point: point_index,
            });
        }
    }
    hit
}

fn within_point_box(click: Vec2, target: Vec2) -> bool {
    (click.x - target.x).abs() < POINT_BOX_TOLERANCE
        && (click.y - target.y).abs() < POINT_BOX_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline_with(points: &[Vec2]) -> Curve {
        let mut curve = Curve::new_polyline();
        for &p in points {
            curve.add_control_point(p);
        }
        curve
    }

    fn bezier_with(points: &[Vec2]) -> Curve {
        let mut curve = Curve::new_bezier();
        for &p in points {
            curve.add_control_point(p);
        }
        curve
    }

    #[test]
    fn segment_akzeptiert_klick_auf_der_linie() {
        let curve = polyline_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        // cross ≈ 0, dot = 0.5 > 0, innerhalb des Extents
        assert_eq!(
            polyline_segment_hit(&curve, Vec2::new(0.5, 0.0)),
            Some(0)
        );
    }

    #[test]
    fn segment_verwirft_klick_abseits_der_linie() {
        let curve = polyline_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        // cross ≈ 1 > 0.05
        assert_eq!(polyline_segment_hit(&curve, Vec2::new(0.5, 1.0)), None);
    }

    #[test]
    fn segment_verwirft_klick_vor_dem_segmentanfang() {
        let curve = polyline_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        // dot < 0: Klick liegt hinter cp1
        assert_eq!(polyline_segment_hit(&curve, Vec2::new(-0.5, 0.0)), None);
    }

    #[test]
    fn segment_verwirft_klick_jenseits_des_extents() {
        let curve = polyline_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        // |Δx| = 1.5 > |Segment.x| = 1.0
        assert_eq!(polyline_segment_hit(&curve, Vec2::new(1.5, 0.0)), None);
    }

    #[test]
    fn segment_der_laenge_null_wird_uebersprungen() {
        let curve = polyline_with(&[
            Vec2::new(0.3, 0.3),
            Vec2::new(0.3, 0.3),
            Vec2::new(0.8, 0.3),
        ]);
        // Das degenerierte Segment 0 kann nicht treffen, Segment 1 schon.
        assert_eq!(
            polyline_segment_hit(&curve, Vec2::new(0.5, 0.3)),
            Some(1)
        );
    }

    #[test]
    fn erste_kurve_in_scene_reihenfolge_gewinnt() {
        let mut scene = Scene::new();
        // Beide Kurven liegen unter dem Klick; kein Distanz-Ranking.
        scene.add_curve(bezier_with(&[Vec2::new(0.0, 0.05), Vec2::new(1.0, 0.05)]));
        scene.add_curve(bezier_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]));

        assert_eq!(closest_curve(&scene, Vec2::new(0.5, 0.0)), Some(0));
    }

    #[test]
    fn parametrische_kurve_nutzt_box_test() {
        let mut scene = Scene::new();
        scene.add_curve(bezier_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]));

        // Innerhalb der 0.09-Box eines Samples
        assert_eq!(closest_curve(&scene, Vec2::new(0.5, 0.08)), Some(0));
        // Außerhalb in y
        assert_eq!(closest_curve(&scene, Vec2::new(0.5, 0.2)), None);
    }

    #[test]
    fn leere_scene_liefert_keinen_treffer() {
        let scene = Scene::new();
        assert_eq!(closest_curve(&scene, Vec2::ZERO), None);
        assert_eq!(closest_control_point(&scene, Vec2::ZERO), None);
    }

    #[test]
    fn letzter_qualifizierender_kontrollpunkt_gewinnt() {
        let mut scene = Scene::new();
        // Beide Punkte liegen in der 0.09-Box um den Klick (0, 0).
        scene.add_curve(bezier_with(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(0.05, 0.05),
        ]));

        let hit = closest_control_point(&scene, Vec2::new(0.0, 0.0))
            .expect("Treffer erwartet");
        assert_eq!(hit.curve, 0);
        assert_eq!(hit.point, 1, "der Scan überschreibt bis zum letzten Treffer");
    }

    #[test]
    fn kurvenscan_ignoriert_andere_kurven_der_scene() {
        let mut scene = Scene::new();
        // Kurve 0 liegt ebenfalls unter dem Klick und käme im
        // Scene-Scan zuerst — der direkte Kurvenscan übergeht sie.
        scene.add_curve(bezier_with(&[Vec2::new(0.0, 0.02), Vec2::new(1.0, 0.02)]));
        scene.add_curve(bezier_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]));

        let hit = control_point_on_curve(&scene, 1, Vec2::new(0.0, 0.0))
            .expect("Treffer auf Kurve 1 erwartet");
        assert_eq!(hit.curve, 1);
        assert_eq!(hit.point, 0);
    }

    #[test]
    fn kontrollpunkt_ausserhalb_der_box_trifft_nicht() {
        let mut scene = Scene::new();
        scene.add_curve(bezier_with(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]));

        // Kurve wird getroffen (Sample-Box), aber kein Kontrollpunkt liegt
        // in der Box um den Klick.
        let hit = closest_control_point(&scene, Vec2::new(0.5, 0.0));
        assert_eq!(hit, None);
    }
}
