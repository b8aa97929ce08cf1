//! Layer-neutrale Bausteine: Optionen, Koordinatentransformation.

pub mod options;
pub mod viewport;

pub use options::EditorOptions;
pub use viewport::{ndc_to_screen, screen_to_ndc};
