//! Core-Domänentypen: Kurven, Scene, Hit-Testing.

pub mod curve;
pub mod hit_test;
pub mod scene;

pub use curve::{Curve, CurveKind, DisplayPoints, DISPLAY_SAMPLE_COUNT, DISPLAY_SAMPLE_STEP};
pub use hit_test::{
    closest_control_point, closest_curve, control_point_on_curve, polyline_segment_hit,
    ControlPointHit, POINT_BOX_TOLERANCE, SEGMENT_CROSS_TOLERANCE,
};
pub use scene::Scene;
