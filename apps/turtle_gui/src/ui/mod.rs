//! UI layer: app shell, canvas widget, and the command button row.

pub mod app;
pub mod canvas;

pub use app::{launch, StartupConfig};
