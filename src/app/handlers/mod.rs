//! Feature-Handler: mutierende Operationen auf dem AppState.

pub mod editing;
pub mod selection;
