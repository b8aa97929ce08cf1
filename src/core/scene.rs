//! Scene: geordneter Container aller Kurven, exklusiver Eigentümer.

use anyhow::{ensure, Result};

use super::Curve;

/// Geordnete Kurvensammlung.
///
/// Höchstens eine Kurve ist selektiert — erzwungen durch das
/// Deselect-before-Select-Protokoll der Handler, nicht durch den Container.
/// Entfernen ist indexbasiert; nach jeder Löschung kompaktiert der Container,
/// Aufrufer müssen gehaltene Indizes danach neu auflösen.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    curves: Vec<Curve>,
}

impl Scene {
    /// Erstellt eine leere Scene.
    pub fn new() -> Self {
        Self { curves: Vec::new() }
    }

    /// Hängt eine Kurve an und gibt ihren Index zurück.
    pub fn add_curve(&mut self, curve: Curve) -> usize {
        self.curves.push(curve);
        self.curves.len() - 1
    }

    /// Entfernt die Kurve am Index und gibt sie zurück.
    pub fn delete_curve(&mut self, index: usize) -> Result<Curve> {
        ensure!(
            index < self.curves.len(),
            "Kurven-Index {} außerhalb des Bereichs (Anzahl: {})",
            index,
            self.curves.len()
        );
        Ok(self.curves.remove(index))
    }

    /// Gibt die Kurve am Index zurück.
    pub fn curve(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Gibt die Kurve am Index mutable zurück.
    pub fn curve_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    /// Iterator über alle Kurven in Scene-Reihenfolge.
    pub fn curves(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter()
    }

    /// Gibt die Anzahl der Kurven zurück.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Gibt `true` zurück, wenn keine Kurven vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Gibt den Index der selektierten Kurve zurück (falls vorhanden).
    pub fn selected_index(&self) -> Option<usize> {
        self.curves.iter().position(|c| c.selected)
    }

    /// Hebt jede Selektion auf (erster Schritt des Select-Protokolls).
    pub fn deselect_all(&mut self) {
        for curve in &mut self.curves {
            curve.selected = false;
        }
    }

    /// Entfernt alle Kurven mit weniger als 2 Kontrollpunkten.
    ///
    /// Gibt die Anzahl der entfernten Kurven zurück. Wird nach jedem
    /// Punkt-Löschen und beim Finalisieren einer Kurve aufgerufen.
    pub fn prune_degenerate(&mut self) -> usize {
        let before = self.curves.len();
        self.curves.retain(|c| c.control_point_count() >= 2);
        before - self.curves.len()
    }
}
