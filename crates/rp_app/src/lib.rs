pub mod actions;
pub mod app;
pub mod driver;
pub mod egui_theme;
pub mod error;
pub mod history;
pub mod prefs;
pub mod state;

pub use app::launch;
