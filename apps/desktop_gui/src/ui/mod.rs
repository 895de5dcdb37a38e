//! UI layer for the desktop client: app shell, screens, widgets, and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{GraderApp, StartupConfig};
