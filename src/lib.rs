//! Freeform Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, UiState};
pub use core::{
    closest_control_point, closest_curve, control_point_on_curve, polyline_segment_hit,
    ControlPointHit, Curve, CurveKind, Scene,
};
pub use shared::EditorOptions;
