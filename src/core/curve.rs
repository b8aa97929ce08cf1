//! Kurven-Datenmodell und Auswertung (Polyline, Bezier, Lagrange).
//!
//! Geschlossener Summentyp statt virtueller Dispatch: alle variantenspezifische
//! Logik läuft über `match` auf `CurveKind`, ohne Downcasts oder Tag-Flags.

use anyhow::{bail, ensure, Result};
use glam::Vec2;

/// Schrittweite der Display-Abtastung parametrischer Kurven.
pub const DISPLAY_SAMPLE_STEP: f32 = 0.01;
/// Anzahl der Display-Samples pro parametrischer Kurve (t ∈ [0, 1)).
pub const DISPLAY_SAMPLE_COUNT: usize = 100;

/// Kurvenvariante mit variantenspezifischen Daten.
///
/// Die Lagrange-Variante trägt ihre Knotenfolge als abgeleiteten Cache:
/// parallel zu den Kontrollpunkten indiziert, bei jeder Punktänderung
/// vollständig neu aufgebaut, nie inkrementell gepatcht und nie persistiert.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveKind {
    /// Stückweise linear durch die Kontrollpunkte, keine Blending-Funktion
    Polyline,
    /// Bernstein-gewichtete Bezier-Kurve
    Bezier,
    /// Lagrange-Interpolation über uniforme Knoten auf [0, 1]
    Lagrange {
        /// Knotenwert pro Kontrollpunkt: `knots[i] = i / (n-1)`
        knots: Vec<f32>,
    },
}

/// Eine editierbare Kurve mit geordneten Kontrollpunkten.
///
/// Kontrollpunkte gehören exklusiv der Kurve; Reihenfolge = Einfügereihenfolge.
/// Eine Kurve mit weniger als 2 Punkten ist nicht darstellbar und wird von
/// der Scene verworfen (siehe `Scene::prune_degenerate`).
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Ob die Kurve aktuell selektiert ist
    pub selected: bool,
    points: Vec<Vec2>,
    kind: CurveKind,
}

impl Curve {
    /// Erstellt eine leere Polyline.
    pub fn new_polyline() -> Self {
        Self {
            selected: false,
            points: Vec::new(),
            kind: CurveKind::Polyline,
        }
    }

    /// Erstellt eine leere Bezier-Kurve.
    pub fn new_bezier() -> Self {
        Self {
            selected: false,
            points: Vec::new(),
            kind: CurveKind::Bezier,
        }
    }

    /// Erstellt eine leere Lagrange-Kurve.
    pub fn new_lagrange() -> Self {
        Self {
            selected: false,
            points: Vec::new(),
            kind: CurveKind::Lagrange { knots: Vec::new() },
        }
    }

    /// Gibt die Kurvenvariante zurück.
    pub fn kind(&self) -> &CurveKind {
        &self.kind
    }

    /// Gibt `true` zurück, wenn die Kurve eine Polyline ist.
    pub fn is_polyline(&self) -> bool {
        matches!(self.kind, CurveKind::Polyline)
    }

    /// Read-only Sicht auf die Kontrollpunkte.
    pub fn control_points(&self) -> &[Vec2] {
        &self.points
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück.
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// Read-only Sicht auf die Knotenfolge (nur Lagrange).
    pub fn knots(&self) -> Option<&[f32]> {
        match &self.kind {
            CurveKind::Lagrange { knots } => Some(knots),
            _ => None,
        }
    }

    /// Hängt einen Kontrollpunkt an und baut ggf. die Knotenfolge neu auf.
    pub fn add_control_point(&mut self, p: Vec2) {
        self.points.push(p);
        self.rebuild_knots();
    }

    /// Entfernt den Kontrollpunkt am Index und gibt ihn zurück.
    ///
    /// Out-of-range Index ist eine Precondition-Verletzung (kein stilles
    /// Ignorieren): der Aufrufer muss Indizes nach Löschungen neu validieren.
    pub fn remove_control_point(&mut self, index: usize) -> Result<Vec2> {
        ensure!(
            index < self.points.len(),
            "Kontrollpunkt-Index {} außerhalb des Bereichs (Anzahl: {})",
            index,
            self.points.len()
        );
        let removed = self.points.remove(index);
        self.rebuild_knots();
        Ok(removed)
    }

    /// Verschiebt den Kontrollpunkt am Index (Drag-Mutation in place).
    ///
    /// Die Knotenfolge hängt nur von der Punktanzahl ab und bleibt unberührt.
    pub fn move_control_point(&mut self, index: usize, p: Vec2) -> Result<()> {
        ensure!(
            index < self.points.len(),
            "Kontrollpunkt-Index {} außerhalb des Bereichs (Anzahl: {})",
            index,
            self.points.len()
        );
        self.points[index] = p;
        Ok(())
    }

    /// Wertet die Kurve am Parameter t ∈ [0, 1] aus.
    ///
    /// Polyline ist keine parametrische Kurve; weniger als 2 Kontrollpunkte
    /// oder zusammenfallende Lagrange-Knoten sind degenerierte Geometrie.
    /// Beides ist ein definierter Fehler, kein NaN-Resultat.
    pub fn evaluate(&self, t: f32) -> Result<Vec2> {
        match &self.kind {
            CurveKind::Polyline => {
                bail!("Polyline hat keine parametrische Auswertung")
            }
            CurveKind::Bezier => {
                ensure!(
                    self.points.len() >= 2,
                    "Bezier-Auswertung benötigt mindestens 2 Kontrollpunkte (Anzahl: {})",
                    self.points.len()
                );
                let weights = bernstein_weights(self.points.len(), t);
                Ok(self
                    .points
                    .iter()
                    .zip(&weights)
                    .map(|(&p, &w)| p * w)
                    .sum())
            }
            CurveKind::Lagrange { knots } => lagrange_point(&self.points, knots, t),
        }
    }

    /// Abtastpunkte für die Darstellung.
    ///
    /// Parametrische Kurven: fester Schritt 0.01 über [0, 1), lazy und
    /// neu startbar. Polylines: die rohe Kontrollpunktfolge.
    /// Kurven mit weniger als 2 Punkten liefern keine Samples.
    pub fn display_points(&self) -> DisplayPoints<'_> {
        DisplayPoints {
            curve: self,
            index: 0,
        }
    }

    /// Baut die Knotenfolge vollständig neu auf: `knots[i] = i / (n-1)`.
    ///
    /// Bei n = 1 ist der einzige Knoten 0. Kein anderer Pfad schreibt Knoten.
    fn rebuild_knots(&mut self) {
        let n = self.points.len();
        if let CurveKind::Lagrange { knots } = &mut self.kind {
            knots.clear();
            match n {
                0 => {}
                1 => knots.push(0.0),
                _ => knots.extend((0..n).map(|i| i as f32 / (n - 1) as f32)),
            }
        }
    }
}

/// Lazy Abtast-Iterator einer Kurve (siehe `Curve::display_points`).
pub struct DisplayPoints<'a> {
    curve: &'a Curve,
    index: usize,
}

impl Iterator for DisplayPoints<'_> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        match &self.curve.kind {
            CurveKind::Polyline => {
                let p = self.curve.points.get(self.index).copied();
                self.index += 1;
                p
            }
            CurveKind::Bezier | CurveKind::Lagrange { .. } => {
                if self.curve.points.len() < 2 || self.index >= DISPLAY_SAMPLE_COUNT {
                    return None;
                }
                let t = self.index as f32 * DISPLAY_SAMPLE_STEP;
                self.index += 1;
                self.curve.evaluate(t).ok()
            }
        }
    }
}

/// Berechnet alle Bernstein-Gewichte `B(i, count-1, t)` in einem Durchlauf.
///
/// Iterative Grad-Erhöhung (de-Casteljau-Rekurrenz) statt naiver Rekursion:
/// dieselben Werte wie `B(i, n, t) = (1-t)·B(i, n-1, t) + t·B(i-1, n-1, t)`,
/// aber lineare Kosten pro Auswertung. Die Gewichte summieren sich zu 1.
pub(crate) fn bernstein_weights(count: usize, t: f32) -> Vec<f32> {
    let mut weights = vec![0.0f32; count];
    weights[0] = 1.0;
    for degree in 1..count {
        // In-place Update von hohem zu niedrigem Index, damit jede Zeile
        // nur Werte des vorherigen Grads liest.
        for i in (1..=degree).rev() {
            weights[i] = (1.0 - t) * weights[i] + t * weights[i - 1];
        }
        weights[0] *= 1.0 - t;
    }
    weights
}

/// Lagrange-Interpolation: `Σ L_i(t) · P_i` mit
/// `L_i(t) = Π_{j≠i} (t - knots[j]) / (knots[i] - knots[j])`.
///
/// Am Knoten `knots[i]` reproduziert die Auswertung exakt `P_i`.
fn lagrange_point(points: &[Vec2], knots: &[f32], t: f32) -> Result<Vec2> {
    ensure!(
        points.len() >= 2,
        "Lagrange-Auswertung benötigt mindestens 2 Kontrollpunkte (Anzahl: {})",
        points.len()
    );

    let mut result = Vec2::ZERO;
    for (i, (&point, &knot_i)) in points.iter().zip(knots).enumerate() {
        let mut numerator = 1.0f32;
        let mut denominator = 1.0f32;
        for (j, &knot_j) in knots.iter().enumerate() {
            if j == i {
                continue;
            }
            numerator *= t - knot_j;
            denominator *= knot_i - knot_j;
        }
        if denominator.abs() < f32::EPSILON {
            bail!("Degenerierte Lagrange-Basis: zusammenfallende Knoten");
        }
        result += point * (numerator / denominator);
    }
    Ok(result)
}
